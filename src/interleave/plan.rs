//! Twist + mux permutation plan (spec §4.4 steps 1-2, 4).
//!
//! A [`Plan`] is a precomputed, length-`n` permutation built once per mode
//! at construction: `interleave` maps codeword order to transmit order,
//! `deinterleave` is its exact inverse. The codeword-domain parity
//! interleave (step 3 of §4.4) is q-dependent and lives in
//! [`super::parity`] instead, applied separately at decode time.

use super::tables::*;
use crate::mode::{CodeRate, Constellation, FrameSize, ModeDescriptor};

/// 8PSK has no mux table; instead three row streams are read back in one
/// of three fixed orders, selected by rate (spec §4.4 step 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Psk8Order {
    Order012,
    Order102,
    Order210,
}

impl Psk8Order {
    fn permutation(self) -> [usize; 3] {
        match self {
            Psk8Order::Order012 => [0, 1, 2],
            Psk8Order::Order102 => [1, 0, 2],
            Psk8Order::Order210 => [2, 1, 0],
        }
    }
}

/// Selects the 8PSK row-stream order for a rate, per the `rowaddr0/1/2`
/// selection in the original decoder: rate 3/5 uses "210", a handful of
/// higher rates use "102", everything else uses "012".
pub fn psk8_order_for_rate(rate: CodeRate) -> Psk8Order {
    match rate {
        CodeRate::C3_5 => Psk8Order::Order210,
        CodeRate::C1_3 | CodeRate::C2_5 => Psk8Order::Order102,
        _ => Psk8Order::Order012,
    }
}

fn mux16_table(rate: CodeRate) -> &'static [u32] {
    match rate {
        CodeRate::C3_5 => &MUX16_35,
        CodeRate::C1_3 => &MUX16_13,
        CodeRate::C2_5 => &MUX16_25,
        _ => &MUX16,
    }
}

fn mux64_table(rate: CodeRate) -> &'static [u32] {
    match rate {
        CodeRate::C3_5 => &MUX64_35,
        CodeRate::C1_3 => &MUX64_13,
        CodeRate::C2_5 => &MUX64_25,
        _ => &MUX64,
    }
}

fn mux256_table(rate: CodeRate, framesize: FrameSize) -> &'static [u32] {
    match framesize {
        FrameSize::Short => match rate {
            CodeRate::C1_3 => &MUX256S_13,
            CodeRate::C2_5 => &MUX256S_25,
            _ => &MUX256S,
        },
        _ => match rate {
            CodeRate::C3_5 => &MUX256_35,
            CodeRate::C2_3 => &MUX256_23,
            _ => &MUX256,
        },
    }
}

fn twist16_table(framesize: FrameSize) -> &'static [u32] {
    match framesize {
        FrameSize::Short => &TWIST16S,
        _ => &TWIST16N,
    }
}

fn twist64_table(framesize: FrameSize) -> &'static [u32] {
    match framesize {
        FrameSize::Short => &TWIST64S,
        _ => &TWIST64N,
    }
}

fn twist256_table(framesize: FrameSize) -> &'static [u32] {
    match framesize {
        FrameSize::Short => &TWIST256S,
        _ => &TWIST256N,
    }
}

/// Codeword-order <-> transmit-order permutation for one mode.
#[derive(Debug, Clone)]
pub struct Plan {
    forward: Vec<u32>,
    inverse: Vec<u32>,
}

impl Plan {
    pub fn build(mode: &ModeDescriptor, n: usize) -> Plan {
        let forward = match mode.constellation {
            Constellation::Qpsk => (0..n as u32).collect(),
            Constellation::Psk8 => {
                build_rotation_forward(n, 3, psk8_order_for_rate(mode.rate).permutation())
            }
            Constellation::Qam16 => {
                build_twist_mux_forward(n, mux16_table(mode.rate), twist16_table(mode.framesize))
            }
            Constellation::Qam64 => {
                build_twist_mux_forward(n, mux64_table(mode.rate), twist64_table(mode.framesize))
            }
            Constellation::Qam256 => build_twist_mux_forward(
                n,
                mux256_table(mode.rate, mode.framesize),
                twist256_table(mode.framesize),
            ),
        };
        let inverse = invert(&forward);
        Plan { forward, inverse }
    }

    /// Codeword order -> transmit order.
    pub fn interleave<T: Copy>(&self, codeword: &[T]) -> Vec<T> {
        (0..codeword.len())
            .map(|j| codeword[self.inverse[j] as usize])
            .collect()
    }

    /// Transmit order -> codeword order.
    pub fn deinterleave<T: Copy>(&self, received: &[T]) -> Vec<T> {
        (0..received.len())
            .map(|i| received[self.forward[i] as usize])
            .collect()
    }
}

fn invert(forward: &[u32]) -> Vec<u32> {
    let mut inverse = vec![0u32; forward.len()];
    for (i, &f) in forward.iter().enumerate() {
        inverse[f as usize] = i as u32;
    }
    inverse
}

fn build_twist_mux_forward(n: usize, mux: &[u32], twist: &[u32]) -> Vec<u32> {
    let cols = mux.len();
    debug_assert_eq!(cols, twist.len());
    debug_assert_eq!(n % cols, 0);
    let rows = n / cols;
    let mut forward = vec![0u32; n];
    for i in 0..n {
        let row = i / cols;
        let col = i % cols;
        let trow = (row + twist[col] as usize) % rows;
        let mcol = mux[col] as usize;
        forward[i] = (trow * cols + mcol) as u32;
    }
    forward
}

fn build_rotation_forward(n: usize, cols: usize, perm: [usize; 3]) -> Vec<u32> {
    debug_assert_eq!(cols, perm.len());
    debug_assert_eq!(n % cols, 0);
    let mut forward = vec![0u32; n];
    for i in 0..n {
        let row = i / cols;
        let col = i % cols;
        forward[i] = (row * cols + perm[col]) as u32;
    }
    forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{InfoMode, KernelWidth, OutputMode, Standard};

    fn mode(constellation: Constellation, rate: CodeRate, framesize: FrameSize) -> ModeDescriptor {
        ModeDescriptor {
            standard: Standard::S2,
            framesize,
            rate,
            constellation,
            output_mode: OutputMode::Codeword,
            info_mode: InfoMode::Quiet,
            max_trials: 25,
            kernel_width: KernelWidth::W16,
        }
    }

    #[test]
    fn every_plan_is_an_involution_pair() {
        let cases = [
            (Constellation::Qpsk, CodeRate::C1_2, FrameSize::Normal, 64_800usize),
            (Constellation::Psk8, CodeRate::C3_5, FrameSize::Normal, 64_800),
            (Constellation::Qam16, CodeRate::C1_2, FrameSize::Normal, 64_800),
            (Constellation::Qam64, CodeRate::C2_3, FrameSize::Normal, 64_800),
            (Constellation::Qam256, CodeRate::C3_4, FrameSize::Normal, 64_800),
            (Constellation::Qam256, CodeRate::C1_2, FrameSize::Short, 16_200),
        ];
        for (c, r, f, n) in cases {
            let plan = Plan::build(&mode(c, r, f), n);
            let original: Vec<u32> = (0..n as u32).collect();
            let transmitted = plan.interleave(&original);
            let recovered = plan.deinterleave(&transmitted);
            assert_eq!(recovered, original, "{c:?}/{r:?}/{f:?} failed to round trip");
        }
    }
}
