//! SNR / N0 tracker (spec §3 "SNR State", §4.5).
//!
//! `precision` is the LLR scaling constant the demapper multiplies
//! received symbols by; it is recomputed once per batch from the
//! previous batch's post-decode residual, except for the very first
//! batch, which bootstraps from hard-decision residuals (spec §4.5 step 1).

/// Constant scale factor in `precision = FACTOR / (N0 / 2)`.
pub const FACTOR: f32 = 2.0;

/// Process-wide SNR/N0 estimate driving LLR scaling (spec §3).
#[derive(Debug, Clone, Copy)]
pub struct SnrState {
    pub snr_linear: f32,
    pub n0: f32,
    pub precision: f32,
}

impl SnrState {
    /// A reasonable initial estimate before any frame has been observed:
    /// unit SNR, used only until the first batch's bootstrap overwrites it.
    pub fn unit() -> SnrState {
        SnrState::from_snr_linear(1.0)
    }

    fn from_snr_linear(snr_linear: f32) -> SnrState {
        let snr_linear = snr_linear.max(f32::EPSILON);
        SnrState::from_n0(1.0 / snr_linear)
    }

    fn from_n0(n0: f32) -> SnrState {
        let n0 = n0.max(f32::EPSILON);
        let snr_linear = 1.0 / n0;
        let precision = FACTOR / (n0 / 2.0);
        SnrState {
            snr_linear,
            n0,
            precision,
        }
    }

    /// Recompute from `snr = sum(|s|^2) / sum(|z - s|^2)` accumulated over
    /// a batch of frames (spec §4.5 steps 1, 4-5).
    pub fn update_from_residual(&mut self, symbol_energy: f32, residual_energy: f32) {
        let snr_linear = symbol_energy / residual_energy.max(f32::EPSILON);
        *self = SnrState::from_snr_linear(snr_linear);
    }

    /// Fold per-frame SNR samples (already `symbol_energy/residual_energy`
    /// ratios) into the tracker. Spec §4.5 step 5 averages the *N0* samples,
    /// not the SNR samples, so each ratio is inverted to `N0 = Es/snr` before
    /// accumulating (matching the original's `N0_accum += Es / d_snr_lin`).
    pub fn update_from_samples(&mut self, samples: &[f32]) {
        if samples.is_empty() {
            return;
        }
        let n0_avg = samples
            .iter()
            .map(|&snr_linear| 1.0 / snr_linear.max(f32::EPSILON))
            .sum::<f32>()
            / samples.len() as f32;
        *self = SnrState::from_n0(n0_avg);
    }

    pub fn snr_db(&self) -> f32 {
        10.0 * self.snr_linear.max(f32::EPSILON).log10()
    }
}

impl Default for SnrState {
    fn default() -> Self {
        SnrState::unit()
    }
}
