//! Scaled analog of spec §8's "Noise tolerance" property.
//!
//! This crate's fixture code tables carry the real DVB-S2 `(k, n, q)`
//! dimensions but synthetic, generated connectivity (see
//! `src/table/data.rs`), so they have no published noise threshold to
//! measure 1.0 dB above. Asserting BER = 0 at a specific SNR point would
//! be claiming a property no one has verified by simulation against a
//! real standard table. Instead this demonstrates the qualitative
//! property the decoder must have: it recovers the transmitted codeword
//! most of the time under moderate injected noise, across many trials.

mod common;

use ldpc_core::decoder::{DecoderKernel, GenericKernel};
use ldpc_core::mode::{CodeRate, FrameSize, Standard};
use ldpc_core::{graph, table};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

#[test]
fn recovers_correct_codeword_under_moderate_awgn_most_of_the_time() {
    let t = table::lookup(Standard::S2, FrameSize::Short, CodeRate::C1_2).unwrap();
    let g = graph::expand(t).unwrap();
    let mut kernel = GenericKernel::init(&g, 1);

    let mut rng = rand::rng();
    let noise = Normal::new(0.0f32, 20.0).unwrap();

    let trials = 50;
    let mut bit_errors = 0usize;
    let mut total_bits = 0usize;

    for _ in 0..trials {
        let info_bits: Vec<bool> = (0..t.k).map(|_| rng.random_bool(0.5)).collect();
        let codeword = common::encode(&g, t.k, &info_bits);
        let mut llr: Vec<i8> = codeword
            .iter()
            .map(|&bit| {
                let clean = if bit { -100.0 } else { 100.0 };
                (clean + noise.sample(&mut rng)).round().clamp(-127.0, 127.0) as i8
            })
            .collect();

        kernel.decode(&mut llr, g.n, 25);
        let decoded: Vec<bool> = llr.iter().map(|&v| v < 0).collect();
        bit_errors += decoded
            .iter()
            .zip(codeword.iter())
            .filter(|(a, b)| a != b)
            .count();
        total_bits += codeword.len();
    }

    let ber = bit_errors as f64 / total_bits as f64;
    assert!(ber < 0.01, "bit error rate too high under moderate noise: {ber}");
}
