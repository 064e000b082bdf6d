//! Mode descriptor: the closed-set construction parameters from spec §6.
//!
//! This replaces the original C++ constructor's nested `switch` ladders
//! (Design Note §9) with plain enums dispatched once, at construction, by
//! the table registry and the interleaver plan builder.

/// Physical-layer standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    S2,
    T2,
}

/// FEC frame size in bits (code length `n` for a rate-1 placeholder; the
/// actual `n` comes from the selected [`crate::table::CodeTable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSize {
    Normal,
    Short,
    Medium,
}

impl FrameSize {
    /// Nominal code length in bits for this frame size, per spec §6.
    pub const fn nominal_n(self) -> u32 {
        match self {
            FrameSize::Normal => 64_800,
            FrameSize::Short => 16_200,
            FrameSize::Medium => 32_400,
        }
    }
}

/// One of the standards-defined code-rate identifiers (spec §6 names ~45;
/// this crate's registry ships a representative subset — see [`crate::table`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeRate {
    C1_4,
    C1_3,
    C2_5,
    C1_2,
    C3_5,
    C2_3,
    C3_4,
    C4_5,
    C5_6,
    C8_9,
    C9_10,
}

/// Constellation in use for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constellation {
    Qpsk,
    Psk8,
    Qam16,
    Qam64,
    Qam256,
}

impl Constellation {
    /// Bits carried per modulated symbol.
    pub const fn bits_per_symbol(self) -> usize {
        match self {
            Constellation::Qpsk => 2,
            Constellation::Psk8 => 3,
            Constellation::Qam16 => 4,
            Constellation::Qam64 => 6,
            Constellation::Qam256 => 8,
        }
    }
}

/// What `Decoder::process_batch` writes out per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Emit the full `n`-bit codeword (`n/8` bytes).
    Codeword,
    /// Emit only the `k`-bit information word (`k/8` bytes).
    Message,
}

/// Diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoMode {
    Quiet,
    Verbose,
}

/// Number of lanes processed in lockstep by one `decode` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelWidth {
    W16 = 16,
    W32 = 32,
}

impl KernelWidth {
    pub const fn lanes(self) -> usize {
        self as usize
    }
}

/// Decoder requested `max_trials == 0`; spec §4.5 maps this to the default.
pub const DEFAULT_TRIALS: u32 = 25;

/// Immutable configuration selected at construction (spec §3 "Mode Descriptor").
#[derive(Debug, Clone, Copy)]
pub struct ModeDescriptor {
    pub standard: Standard,
    pub framesize: FrameSize,
    pub rate: CodeRate,
    pub constellation: Constellation,
    pub output_mode: OutputMode,
    pub info_mode: InfoMode,
    pub max_trials: u32,
    pub kernel_width: KernelWidth,
}

impl ModeDescriptor {
    /// Resolve `max_trials == 0` to [`DEFAULT_TRIALS`], as spec §4.5 requires.
    pub fn effective_max_trials(&self) -> u32 {
        if self.max_trials == 0 {
            DEFAULT_TRIALS
        } else {
            self.max_trials
        }
    }

    /// Whether the parity-bit interleave (spec §4.4 step 3) is part of this
    /// mode's permutation chain. 8PSK never interleaves parity bits (step 4
    /// undoes only the row rotation); QPSK only does for DVB-T2 rates 1/3
    /// and 2/5 (step 5) and otherwise passes LLRs through unpermuted. Every
    /// other constellation (16/64/256QAM) always applies it alongside the
    /// twist/mux chain (steps 1-3).
    pub fn uses_parity_interleave(&self) -> bool {
        match self.constellation {
            Constellation::Psk8 => false,
            Constellation::Qpsk => {
                matches!(self.standard, Standard::T2)
                    && matches!(self.rate, CodeRate::C1_3 | CodeRate::C2_5)
            }
            Constellation::Qam16 | Constellation::Qam64 | Constellation::Qam256 => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(standard: Standard, rate: CodeRate, constellation: Constellation) -> ModeDescriptor {
        ModeDescriptor {
            standard,
            framesize: FrameSize::Normal,
            rate,
            constellation,
            output_mode: OutputMode::Codeword,
            info_mode: InfoMode::Quiet,
            max_trials: 25,
            kernel_width: KernelWidth::W16,
        }
    }

    #[test]
    fn psk8_never_uses_parity_interleave() {
        for rate in [CodeRate::C1_2, CodeRate::C3_5, CodeRate::C2_3] {
            assert!(!mode(Standard::S2, rate, Constellation::Psk8).uses_parity_interleave());
            assert!(!mode(Standard::T2, rate, Constellation::Psk8).uses_parity_interleave());
        }
    }

    #[test]
    fn qpsk_uses_parity_interleave_only_for_t2_rates_1_3_and_2_5() {
        assert!(mode(Standard::T2, CodeRate::C1_3, Constellation::Qpsk).uses_parity_interleave());
        assert!(mode(Standard::T2, CodeRate::C2_5, Constellation::Qpsk).uses_parity_interleave());
        assert!(!mode(Standard::T2, CodeRate::C1_2, Constellation::Qpsk).uses_parity_interleave());
        assert!(!mode(Standard::S2, CodeRate::C1_3, Constellation::Qpsk).uses_parity_interleave());
        assert!(!mode(Standard::S2, CodeRate::C1_2, Constellation::Qpsk).uses_parity_interleave());
    }

    #[test]
    fn qam_always_uses_parity_interleave() {
        for c in [Constellation::Qam16, Constellation::Qam64, Constellation::Qam256] {
            assert!(mode(Standard::S2, CodeRate::C3_4, c).uses_parity_interleave());
            assert!(mode(Standard::T2, CodeRate::C3_4, c).uses_parity_interleave());
        }
    }
}
