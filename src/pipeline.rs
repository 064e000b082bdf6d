//! Frame pipeline and SNR tracker (spec §4.5) — the public entry point.
//!
//! [`Decoder`] owns every piece of shared mutable state for one configured
//! mode: the parity-check graph, the decode kernel's message buffer, the
//! interleaver plan, and the SNR tracker. `process_batch` runs one batch
//! of `simd_width` frames to completion synchronously — there is no
//! internal concurrency beyond the kernel's own lane-parallel arithmetic
//! (spec §5).

use bitvec::prelude::*;
use num::Complex;
use tracing::{debug, info};

use crate::decoder::{DecoderKernel, GenericKernel};
use crate::error::ConstructError;
use crate::graph::{self, ParityCheckGraph};
use crate::interleave::{self, Plan};
use crate::mode::{InfoMode, ModeDescriptor, OutputMode};
use crate::snr::SnrState;
use crate::table::{self, CodeTable};

/// Per-batch diagnostics returned by [`Decoder::process_batch`].
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Trials consumed per frame, in lane order.
    pub trials_used: Vec<u32>,
    /// Post-decode SNR estimate (dB) per frame, in lane order.
    pub snr_db: Vec<f32>,
}

/// A constructed decoder bound to one (standard, framesize, rate, ...)
/// mode. Construction is the only fallible operation; `process_batch`
/// never fails (spec §7).
pub struct Decoder {
    mode: ModeDescriptor,
    table: &'static CodeTable,
    graph: ParityCheckGraph,
    kernel: GenericKernel,
    plan: Plan,
    snr: SnrState,
    bootstrapped: bool,
}

impl Decoder {
    pub fn new(mode: ModeDescriptor) -> Result<Decoder, ConstructError> {
        let table = table::lookup(mode.standard, mode.framesize, mode.rate)?;
        let graph = graph::expand(table)?;
        let kernel = GenericKernel::init(&graph, mode.kernel_width.lanes());
        let plan = Plan::build(&mode, graph.n);
        Ok(Decoder {
            mode,
            table,
            graph,
            kernel,
            plan,
            snr: SnrState::unit(),
            bootstrapped: false,
        })
    }

    /// Code length of the selected mode.
    pub fn code_len(&self) -> usize {
        self.table.n
    }

    /// Number of frames processed per `process_batch` call.
    pub fn lanes(&self) -> usize {
        self.mode.kernel_width.lanes()
    }

    /// The effective trial cap (`max_trials`, resolved from `0` to the
    /// default of 25 per spec §4.5) this decoder was configured with.
    pub fn max_trials(&self) -> u32 {
        self.mode.effective_max_trials()
    }

    /// Input symbols required per `process_batch` call.
    pub fn symbols_per_batch(&self) -> usize {
        self.lanes() * self.symbols_per_frame()
    }

    /// Output bytes produced per `process_batch` call.
    pub fn output_bytes_per_batch(&self) -> usize {
        self.lanes() * self.output_bytes_per_frame()
    }

    fn symbols_per_frame(&self) -> usize {
        self.table.n / self.mode.constellation.bits_per_symbol()
    }

    fn output_bytes_per_frame(&self) -> usize {
        match self.mode.output_mode {
            OutputMode::Codeword => self.table.n / 8,
            OutputMode::Message => self.table.k / 8,
        }
    }

    /// Process one batch of `lanes()` frames. `symbols` must contain
    /// exactly `lanes() * symbols_per_frame()` complex samples; `out` must
    /// be exactly `lanes() * output_bytes_per_frame()` bytes.
    pub fn process_batch(&mut self, symbols: &[Complex<f32>], out: &mut [u8]) -> BatchReport {
        let lanes = self.lanes();
        let spf = self.symbols_per_frame();
        let n = self.table.n;
        let k = self.table.k;
        let q = self.table.q;
        let bps = self.mode.constellation.bits_per_symbol();
        let out_bytes = self.output_bytes_per_frame();

        debug_assert_eq!(symbols.len(), lanes * spf);
        debug_assert_eq!(out.len(), lanes * out_bytes);

        if !self.bootstrapped {
            self.bootstrap_snr(symbols);
            self.bootstrapped = true;
        }

        let mut llr_batch = vec![0i8; n * lanes];
        for lane in 0..lanes {
            let frame_symbols = &symbols[lane * spf..(lane + 1) * spf];
            let transmit_order: Vec<i8> = frame_symbols
                .iter()
                .flat_map(|&z| {
                    self.mode
                        .constellation
                        .soft(z, self.snr.precision)
                        .into_iter()
                        .map(|llr| llr.round().clamp(-127.0, 127.0) as i8)
                })
                .collect();
            let deinterleaved = self.plan.deinterleave(&transmit_order);
            let codeword_order = if self.mode.uses_parity_interleave() {
                interleave::deinterleave_parity(&deinterleaved, k, q)
            } else {
                deinterleaved
            };
            llr_batch[lane * n..(lane + 1) * n].copy_from_slice(&codeword_order);
        }

        let trial_result = self
            .kernel
            .decode(&mut llr_batch, n, self.mode.effective_max_trials());
        let per_lane_trials = self.kernel.last_trials().to_vec();

        let mut snr_samples = Vec::with_capacity(lanes);
        let mut snr_db_per_frame = Vec::with_capacity(lanes);

        for lane in 0..lanes {
            let codeword_llr = &llr_batch[lane * n..(lane + 1) * n];
            let bits: Vec<bool> = codeword_llr.iter().map(|&v| v < 0).collect();

            // Re-interleave and remap to reconstruct transmitted symbols
            // for SNR refinement (spec §4.5 step 4).
            let interleaved_parity = if self.mode.uses_parity_interleave() {
                interleave::interleave_parity(&bits, k, q)
            } else {
                bits.clone()
            };
            let transmit_order_bits = self.plan.interleave(&interleaved_parity);

            let frame_symbols = &symbols[lane * spf..(lane + 1) * spf];
            let mut symbol_energy = 0f32;
            let mut residual_energy = 0f32;
            for (sym_idx, &z) in frame_symbols.iter().enumerate() {
                let sym_bits = &transmit_order_bits[sym_idx * bps..(sym_idx + 1) * bps];
                let s = self.mode.constellation.map(sym_bits);
                symbol_energy += s.norm_sqr();
                residual_energy += (z - s).norm_sqr();
            }
            let sample = symbol_energy / residual_energy.max(f32::EPSILON);
            snr_samples.push(sample);
            snr_db_per_frame.push(10.0 * sample.max(f32::EPSILON).log10());

            let out_bits = if matches!(self.mode.output_mode, OutputMode::Message) {
                &bits[..k]
            } else {
                &bits[..]
            };
            let packed = pack_bits(out_bits);
            out[lane * out_bytes..(lane + 1) * out_bytes].copy_from_slice(&packed);

            if matches!(self.mode.info_mode, InfoMode::Verbose) {
                let trials_display = if trial_result < 0 {
                    "max".to_string()
                } else {
                    per_lane_trials[lane].to_string()
                };
                info!(
                    frame = lane,
                    snr_db = snr_db_per_frame[lane],
                    trials = %trials_display,
                    "decoded frame"
                );
            }
        }

        self.snr.update_from_samples(&snr_samples);
        debug!(precision = self.snr.precision, n0 = self.snr.n0, "snr tracker updated");

        BatchReport {
            trials_used: per_lane_trials,
            snr_db: snr_db_per_frame,
        }
    }

    fn bootstrap_snr(&mut self, symbols: &[Complex<f32>]) {
        let mut symbol_energy = 0f32;
        let mut residual_energy = 0f32;
        for &z in symbols {
            let bits = self.mode.constellation.hard(z);
            let s = self.mode.constellation.map(&bits);
            symbol_energy += s.norm_sqr();
            residual_energy += (z - s).norm_sqr();
        }
        self.snr
            .update_from_residual(symbol_energy, residual_energy);
    }
}

/// MSB-first byte packing (spec §4.5 step 6): the earliest bit lands in
/// the most-significant bit of the first byte.
fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bv: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len());
    bv.extend(bits.iter().copied());
    bv.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_bits_matches_msb_first_convention() {
        assert_eq!(pack_bits(&[true; 8]), vec![0xFFu8]);
        assert_eq!(
            pack_bits(&[true, false, false, false, false, false, false, false]),
            vec![0x80u8]
        );
    }
}
