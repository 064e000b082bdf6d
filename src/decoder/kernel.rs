//! Portable min-sum kernel (spec §4.3 algorithm, no `std::arch` intrinsics).
//!
//! Messages are saturated `i8` throughout. Edges are numbered once at
//! `init` by walking `check_to_var` row-major; that numbering is shared
//! between the check-row view (`edges_per_check`) and the variable-column
//! view (`edges_per_var`) so both sides of an edge always address the same
//! message slot. The message buffer and the two per-lane scratch arrays
//! (`channel_llr`, `total_llr`) are allocated once here and reused by
//! every `decode` call — no allocation in the steady-state hot path.

use super::DecoderKernel;
use crate::graph::ParityCheckGraph;

const CLAMP: i8 = 127;

/// `(neighbor_index, edge_id)` — the neighbor is a variable column when
/// walking from a check row, or a check row when walking from a variable
/// column.
type Edge = (u32, u32);

pub struct GenericKernel {
    lanes: usize,
    n: usize,
    m: usize,
    edges_per_check: Vec<Vec<Edge>>,
    edges_per_var: Vec<Vec<Edge>>,
    num_edges: usize,
    messages: Vec<i8>,
    channel_llr: Vec<i8>,
    total_llr: Vec<i8>,
    done: Vec<bool>,
    last_trials: Vec<u32>,
    /// Per-row scratch for `check_update`, pre-sized at `init` to the
    /// widest check row in the graph so the hot path never reallocates
    /// (spec §5) and never indexes past a fixed-size buffer (spec §4.3
    /// places no cap on check-node degree).
    extrinsic_scratch: Vec<i32>,
}

impl DecoderKernel for GenericKernel {
    fn init(graph: &ParityCheckGraph, simd_width: usize) -> Self {
        let m = graph.m;
        let n = graph.n;

        let mut edges_per_check: Vec<Vec<Edge>> = Vec::with_capacity(m);
        let mut edges_per_var: Vec<Vec<Edge>> = vec![Vec::new(); n];
        let mut edge_id: u32 = 0;
        for (c, vars) in graph.check_to_var.iter().enumerate() {
            let mut row = Vec::with_capacity(vars.len());
            for &v in vars {
                row.push((v, edge_id));
                edges_per_var[v as usize].push((c as u32, edge_id));
                edge_id += 1;
            }
            edges_per_check.push(row);
        }
        let num_edges = edge_id as usize;
        let max_row_len = edges_per_check.iter().map(|r| r.len()).max().unwrap_or(0);

        GenericKernel {
            lanes: simd_width,
            n,
            m,
            edges_per_check,
            edges_per_var,
            num_edges,
            messages: vec![0i8; num_edges * simd_width],
            channel_llr: vec![0i8; n * simd_width],
            total_llr: vec![0i8; n * simd_width],
            done: vec![false; simd_width],
            last_trials: vec![0; simd_width],
            extrinsic_scratch: Vec::with_capacity(max_row_len),
        }
    }

    fn decode(&mut self, llr_batch: &mut [i8], code_len: usize, max_trials: u32) -> i32 {
        debug_assert_eq!(code_len, self.n);
        debug_assert_eq!(llr_batch.len(), self.n * self.lanes);

        let max_trials = if max_trials == 0 {
            crate::mode::DEFAULT_TRIALS
        } else {
            max_trials
        };

        self.channel_llr.copy_from_slice(llr_batch);
        self.total_llr.copy_from_slice(llr_batch);
        self.messages.iter_mut().for_each(|m| *m = 0);
        self.done.iter_mut().for_each(|d| *d = false);

        let mut trials_used = 0u32;
        for lane in 0..self.lanes {
            self.last_trials[lane] = max_trials;
        }
        for _trial in 0..max_trials {
            trials_used += 1;
            for lane in 0..self.lanes {
                if self.done[lane] {
                    continue;
                }
                self.check_update(lane);
                self.variable_update(lane);
                if self.syndrome_satisfied(lane) {
                    self.done[lane] = true;
                    self.last_trials[lane] = trials_used;
                }
            }
            if self.done.iter().all(|&d| d) {
                break;
            }
        }

        llr_batch.copy_from_slice(&self.total_llr);

        if self.done.iter().all(|&d| d) {
            (max_trials - trials_used) as i32
        } else {
            -1
        }
    }
}

impl GenericKernel {
    fn check_update(&mut self, lane: usize) {
        let lane_llr = &self.total_llr[lane * self.n..(lane + 1) * self.n];
        let lane_msg_base = lane * self.num_edges;

        for row in &self.edges_per_check {
            if row.is_empty() {
                continue;
            }
            let mut min1 = i32::MAX;
            let mut min2 = i32::MAX;
            let mut min1_count = 0u32;
            let mut sign_product: i32 = 1;
            self.extrinsic_scratch.clear();

            for &(v, e) in row.iter() {
                let prior = self.messages[lane_msg_base + e as usize] as i32;
                let extrinsic = (lane_llr[v as usize] as i32 - prior)
                    .clamp(-(CLAMP as i32), CLAMP as i32);
                self.extrinsic_scratch.push(extrinsic);
                let mag = extrinsic.abs();
                let sign = if extrinsic < 0 { -1 } else { 1 };
                sign_product *= sign;
                if mag < min1 {
                    min2 = min1;
                    min1 = mag;
                    min1_count = 1;
                } else if mag == min1 {
                    min1_count += 1;
                } else if mag < min2 {
                    min2 = mag;
                }
            }

            for (i, &(_v, e)) in row.iter().enumerate() {
                let extrinsic = self.extrinsic_scratch[i];
                let mag = extrinsic.abs();
                let excl_min = if mag == min1 {
                    if min1_count > 1 {
                        min1
                    } else {
                        min2
                    }
                } else {
                    min1
                };
                let this_sign = if extrinsic < 0 { -1 } else { 1 };
                let out_sign = sign_product * this_sign;
                let magnitude = excl_min.min(CLAMP as i32).max(0);
                self.messages[lane_msg_base + e as usize] = (out_sign * magnitude) as i8;
            }
        }
    }

    fn variable_update(&mut self, lane: usize) {
        let lane_msg_base = lane * self.num_edges;
        let lane_channel = &self.channel_llr[lane * self.n..(lane + 1) * self.n];
        let lane_out = &mut self.total_llr[lane * self.n..(lane + 1) * self.n];

        for v in 0..self.n {
            let mut acc = lane_channel[v] as i32;
            for &(_c, e) in &self.edges_per_var[v] {
                acc += self.messages[lane_msg_base + e as usize] as i32;
            }
            lane_out[v] = acc.clamp(-(CLAMP as i32), CLAMP as i32) as i8;
        }
    }

    /// Trials consumed by each lane in the most recent `decode` call.
    pub fn last_trials(&self) -> &[u32] {
        &self.last_trials
    }

    fn syndrome_satisfied(&self, lane: usize) -> bool {
        let lane_llr = &self.total_llr[lane * self.n..(lane + 1) * self.n];
        for row in &self.edges_per_check {
            let mut parity = 0u8;
            for &(v, _e) in row {
                parity ^= (lane_llr[v as usize] < 0) as u8;
            }
            if parity != 0 {
                return false;
            }
        }
        true
    }
}
