//! Min-sum LDPC decoder engine (spec §4.3) — the hardest and largest
//! component of this crate.
//!
//! [`DecoderKernel`] is the trait boundary spec §9's "tagged-variant
//! descriptor" note asks for: one interface, with the concrete width-16 /
//! width-32 / NEON / AVX2 implementation bound once at construction. This
//! crate ships [`GenericKernel`], a portable implementation with no
//! `std::arch` intrinsics; a SIMD-specialized kernel would implement the
//! same trait and slot in at [`crate::pipeline::Decoder::new`] without
//! touching the rest of the pipeline.

mod kernel;

pub use kernel::GenericKernel;

use crate::graph::ParityCheckGraph;

/// One decode work area bound to a fixed lane count (`simd_width`).
pub trait DecoderKernel {
    fn init(graph: &ParityCheckGraph, simd_width: usize) -> Self
    where
        Self: Sized;

    /// Decode `simd_width` frames of `code_len` LLRs each, laid out as
    /// `simd_width` consecutive blocks in `llr_batch`. Hardens `llr_batch`
    /// in place. Returns the non-negative count of trials left unused if
    /// every lane converged, or a negative sentinel if any lane did not
    /// (spec §4.3).
    fn decode(&mut self, llr_batch: &mut [i8], code_len: usize, max_trials: u32) -> i32;
}
