//! Parity-bit interleave (spec §4.4 step 3).
//!
//! Received bit `k + 360*t + s` (for `0 <= t < q`, `0 <= s < 360`)
//! originated at codeword position `k + q*s + t`. Information bits
//! (`0..k`) are untouched. `q == 0` (VLSNR short-frame variants) means the
//! step is skipped entirely.

/// Undo the parity interleave: transmit order -> codeword order.
pub fn deinterleave_parity<T: Copy>(received: &[T], k: usize, q: usize) -> Vec<T> {
    let mut out = received.to_vec();
    if q == 0 {
        return out;
    }
    debug_assert_eq!(received.len() - k, q * 360);
    for t in 0..q {
        for s in 0..360 {
            let recv_idx = k + 360 * t + s;
            let cw_idx = k + q * s + t;
            out[cw_idx] = received[recv_idx];
        }
    }
    out
}

/// Apply the parity interleave: codeword order -> transmit order. Used by
/// the test-only reference encoder to build synthetic transmit frames.
pub fn interleave_parity<T: Copy>(codeword: &[T], k: usize, q: usize) -> Vec<T> {
    let mut out = codeword.to_vec();
    if q == 0 {
        return out;
    }
    debug_assert_eq!(codeword.len() - k, q * 360);
    for t in 0..q {
        for s in 0..360 {
            let cw_idx = k + q * s + t;
            let recv_idx = k + 360 * t + s;
            out[recv_idx] = codeword[cw_idx];
        }
    }
    out
}
