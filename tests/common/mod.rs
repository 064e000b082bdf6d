//! Shared test-only helpers.
//!
//! `encode` is a reference LDPC encoder built directly from the expanded
//! parity-check graph's dual-diagonal accumulator structure — not part of
//! the library, just enough to produce a codeword that satisfies every
//! check row so the decoder's correctness can be exercised.

use ldpc_core::graph::ParityCheckGraph;

pub fn encode(graph: &ParityCheckGraph, k: usize, info_bits: &[bool]) -> Vec<bool> {
    assert_eq!(info_bits.len(), k);
    let mut codeword = vec![false; graph.n];
    codeword[..k].copy_from_slice(info_bits);

    let mut acc = false;
    for row in 0..graph.m {
        let mut term = false;
        for &col in &graph.check_to_var[row] {
            if (col as usize) < k {
                term ^= codeword[col as usize];
            }
        }
        acc ^= term;
        codeword[k + row] = acc;
    }
    codeword
}

/// Codeword bits to saturated LLRs at the given confidence magnitude.
/// `true` (bit 1) maps to a negative LLR, matching the crate's convention
/// that positive means bit 0 is more likely.
pub fn to_llr(codeword: &[bool], magnitude: i8) -> Vec<i8> {
    codeword
        .iter()
        .map(|&bit| if bit { -magnitude } else { magnitude })
        .collect()
}
