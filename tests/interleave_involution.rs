//! Interleaver involution (spec §8): forward then inverse is the identity
//! on [0, n), across every (modulation, rate, framesize) combination the
//! mode registry can build a plan for, plus the q-dependent parity
//! interleave exercised separately.

use ldpc_core::mode::{
    CodeRate, Constellation, FrameSize, InfoMode, KernelWidth, ModeDescriptor, OutputMode,
    Standard,
};
use ldpc_core::interleave;

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
fn twist_and_mux_plan_is_an_involution_for_every_registered_mode() {
    let cases = [
        (Constellation::Qpsk, CodeRate::C1_2, FrameSize::Normal),
        (Constellation::Psk8, CodeRate::C3_5, FrameSize::Normal),
        (Constellation::Qam16, CodeRate::C1_2, FrameSize::Normal),
        (Constellation::Qam16, CodeRate::C3_5, FrameSize::Normal),
        (Constellation::Qam64, CodeRate::C2_3, FrameSize::Normal),
        (Constellation::Qam256, CodeRate::C3_4, FrameSize::Normal),
        (Constellation::Qam256, CodeRate::C1_2, FrameSize::Short),
    ];

    for (constellation, rate, framesize) in cases {
        let n = framesize.nominal_n() as usize;
        let m = mode(constellation, rate, framesize);
        let plan = interleave::Plan::build(&m, n);

        let codeword: Vec<u32> = (0..n as u32).collect();
        let transmitted = plan.interleave(&codeword);
        let recovered = plan.deinterleave(&transmitted);
        assert_eq!(recovered, codeword, "{constellation:?}/{rate:?}/{framesize:?}");

        // A permutation: every transmit slot used exactly once.
        let mut seen = transmitted.clone();
        seen.sort_unstable();
        assert_eq!(seen, codeword, "{constellation:?}/{rate:?}/{framesize:?} is not a bijection");
    }
}

#[test]
fn parity_interleave_is_an_involution_for_every_q() {
    for q in [0usize, 1, 25, 45, 60, 90] {
        let k = 3600;
        let n = k + q * 360;
        let codeword: Vec<u32> = (0..n as u32).collect();
        let transmitted = interleave::interleave_parity(&codeword, k, q);
        let recovered = interleave::deinterleave_parity(&transmitted, k, q);
        assert_eq!(recovered, codeword, "q={q}");
    }
}
