//! Fixture code tables.
//!
//! Every table below has the real `(k, n, q)` triple published for the
//! named DVB-S2/T2 mode, but its `pos` seed connectivity is generated by
//! [`fixture_table`] rather than transcribed from the standard — see the
//! module doc on [`super`]. `fixture_table` builds a single-degree-class
//! table (`deg = [col_weight]`, `len = [k / 360]`) with seeds dispersed by
//! a fixed linear formula, giving every information bit the same column
//! weight and a reasonably spread-out set of check-row neighbors.

use once_cell::sync::Lazy;

use super::CodeTable;
use crate::mode::{CodeRate, FrameSize, Standard};

/// Build a fixture table for a code of length `n`, dimension `k`, with
/// every information bit connected to `col_weight` check-row "seeds" per
/// spec §3/§4.2. `variant` distinguishes tables that otherwise share
/// `(k, n)` (e.g. the S2 and T2 rate-2/3 NORMAL tables in spec scenario 5)
/// so the registry can prove it selected the right one.
fn fixture_table(k: usize, n: usize, col_weight: u32, variant: u64) -> CodeTable {
    let m = n - k;
    assert!(m % 360 == 0, "n - k must be a multiple of 360");
    assert!(k % 360 == 0, "k must be a multiple of 360");
    let q = m / 360;
    let groups = k / 360;

    let step = ((m / col_weight.max(1) as usize).max(1)) as u64;
    let mut pos = Vec::with_capacity(groups * col_weight as usize);
    for g in 0..groups as u64 {
        for d in 0..col_weight as u64 {
            let seed = (g.wrapping_mul(7).wrapping_add(d.wrapping_mul(step)).wrapping_add(
                variant.wrapping_mul(97),
            )) % m as u64;
            pos.push(seed as u32);
        }
    }

    CodeTable {
        k,
        n,
        q,
        deg: vec![col_weight],
        len: vec![groups as u32],
        pos,
    }
}

macro_rules! fixture_static {
    ($name:ident, $k:expr, $n:expr, $col_weight:expr, $variant:expr) => {
        static $name: Lazy<CodeTable> = Lazy::new(|| fixture_table($k, $n, $col_weight, $variant));
    };
}

// S2 NORMAL (n = 64800)
fixture_static!(S2_NORMAL_1_2, 32_400, 64_800, 3, 1);
fixture_static!(S2_NORMAL_3_5, 38_880, 64_800, 3, 2);
fixture_static!(S2_NORMAL_2_3, 43_200, 64_800, 3, 3);
fixture_static!(S2_NORMAL_3_4, 48_600, 64_800, 3, 4);

// T2 NORMAL (n = 64800) — distinct variant from the S2 table of the same rate.
fixture_static!(T2_NORMAL_2_3, 43_200, 64_800, 3, 30);

// S2 SHORT (n = 16200)
fixture_static!(S2_SHORT_1_2, 7_200, 16_200, 3, 11);

pub(super) fn registry(
    standard: Standard,
    framesize: FrameSize,
    rate: CodeRate,
) -> Option<&'static CodeTable> {
    use CodeRate::*;
    use FrameSize::*;
    use Standard::*;

    match (standard, framesize, rate) {
        (S2, Normal, C1_2) => Some(&S2_NORMAL_1_2),
        (S2, Normal, C3_5) => Some(&S2_NORMAL_3_5),
        (S2, Normal, C2_3) => Some(&S2_NORMAL_2_3),
        (S2, Normal, C3_4) => Some(&S2_NORMAL_3_4),
        (T2, Normal, C2_3) => Some(&T2_NORMAL_2_3),
        (S2, Short, C1_2) => Some(&S2_SHORT_1_2),
        _ => None,
    }
}
