//! Encode/decode identity (spec §8): 50 random information words per mode,
//! encoded by the test-only reference encoder, injected as high-confidence
//! LLRs with the correct sign, must converge in <= 2 iterations and
//! reproduce the original bits exactly.

mod common;

use ldpc_core::decoder::{DecoderKernel, GenericKernel};
use ldpc_core::mode::{CodeRate, FrameSize, Standard};
use ldpc_core::{graph, table};
use rand::prelude::*;

const SUPPORTED_MODES: &[(Standard, FrameSize, CodeRate)] = &[
    (Standard::S2, FrameSize::Normal, CodeRate::C1_2),
    (Standard::S2, FrameSize::Normal, CodeRate::C3_5),
    (Standard::S2, FrameSize::Short, CodeRate::C1_2),
    (Standard::T2, FrameSize::Normal, CodeRate::C2_3),
];

#[test]
fn converges_within_two_iterations_for_noiseless_codewords() {
    let mut rng = rand::rng();

    for &(standard, framesize, rate) in SUPPORTED_MODES {
        let t = table::lookup(standard, framesize, rate).unwrap();
        let g = graph::expand(t).unwrap();
        let mut kernel = GenericKernel::init(&g, 1);

        for trial in 0..50 {
            let info_bits: Vec<bool> = (0..t.k).map(|_| rng.random_bool(0.5)).collect();
            let codeword = common::encode(&g, t.k, &info_bits);
            let mut llr = common::to_llr(&codeword, 100);

            let result = kernel.decode(&mut llr, g.n, 2);
            assert!(
                result >= 0,
                "{standard:?}/{framesize:?}/{rate:?} trial {trial}: failed to converge within 2 iterations"
            );

            let decoded: Vec<bool> = llr.iter().map(|&v| v < 0).collect();
            assert_eq!(
                decoded, codeword,
                "{standard:?}/{framesize:?}/{rate:?} trial {trial}: decoded bits mismatch"
            );
        }
    }
}
