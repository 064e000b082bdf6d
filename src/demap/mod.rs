//! Soft/hard constellation demapping (spec §4.4).
//!
//! Each constellation publishes a fixed, unit-average-energy, Gray-coded
//! point set. [`Constellation::soft`] computes a max-log-MAP bit LLR per
//! bit position — closed form for QPSK, a nearest-point distance search
//! otherwise — and [`Constellation::hard`]/[`Constellation::map`] give the
//! nearest-point decision and its inverse, used by the test-only reference
//! encoder in this crate's test suite.

use num::Complex;

use crate::mode::Constellation;

type Sym = Complex<f32>;

impl Constellation {
    /// Gray-coded constellation point for a bit pattern (MSB-first, length
    /// `bits_per_symbol()`), normalized to unit average energy.
    pub fn map(self, bits: &[bool]) -> Sym {
        debug_assert_eq!(bits.len(), self.bits_per_symbol());
        self.points()[bits_to_index(bits)]
    }

    /// Nearest-point hard decision, as a bit pattern (MSB-first).
    pub fn hard(self, symbol: Sym) -> Vec<bool> {
        let points = self.points();
        let mut best = 0usize;
        let mut best_dist = f32::INFINITY;
        for (i, p) in points.iter().enumerate() {
            let d = (p - symbol).norm_sqr();
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        index_to_bits(best, self.bits_per_symbol())
    }

    /// Max-log-MAP LLR per bit (MSB-first, positive meaning bit 0 is more
    /// likely), scaled by the tracker's `precision` (spec §3, §4.4).
    pub fn soft(self, symbol: Sym, precision: f32) -> Vec<f32> {
        if matches!(self, Constellation::Qpsk) {
            // Gray-coded QPSK LLRs reduce to the rotated I/Q components
            // directly; no nearest-point search is needed.
            return vec![precision * symbol.re, precision * symbol.im];
        }

        let points = self.points();
        let nbits = self.bits_per_symbol();
        let mut llrs = Vec::with_capacity(nbits);
        for bit in 0..nbits {
            let mut min0 = f32::INFINITY;
            let mut min1 = f32::INFINITY;
            for (i, p) in points.iter().enumerate() {
                let d = (p - symbol).norm_sqr();
                if bit_at(i, bit, nbits) {
                    min1 = min1.min(d);
                } else {
                    min0 = min0.min(d);
                }
            }
            llrs.push(precision * (min1 - min0) / 2.0);
        }
        llrs
    }

    fn points(self) -> Vec<Sym> {
        let nbits = self.bits_per_symbol();
        let count = 1usize << nbits;
        match self {
            Constellation::Qpsk => (0..count)
                .map(|i| {
                    let bits = index_to_bits(i, nbits);
                    let re = if bits[0] { -1.0 } else { 1.0 };
                    let im = if bits[1] { -1.0 } else { 1.0 };
                    Complex::new(re, im) / std::f32::consts::SQRT_2
                })
                .collect(),
            Constellation::Psk8 => (0..count)
                .map(|i| {
                    // `i` is the bit pattern; its angular slot is the
                    // position whose Gray code equals `i` (same direction
                    // as the QAM axis lookup below).
                    let slot = gray_to_binary(i);
                    let theta = std::f32::consts::PI / 4.0 * slot as f32;
                    Complex::from_polar(1.0, theta)
                })
                .collect(),
            Constellation::Qam16 | Constellation::Qam64 | Constellation::Qam256 => {
                square_qam_points(nbits)
            }
        }
    }
}

/// Square M-QAM point set, Gray-coded independently on each axis and
/// normalized so the constellation has unit average energy.
fn square_qam_points(nbits: usize) -> Vec<Sym> {
    let side_bits = nbits / 2;
    let side = 1usize << side_bits;
    let levels: Vec<f32> = (0..side)
        .map(|bin| 2.0 * bin as f32 - (side as f32 - 1.0))
        .collect();
    let avg_energy = 2.0 * ((side * side) as f32 - 1.0) / 3.0;
    let norm = avg_energy.sqrt();

    let mut points = vec![Complex::new(0.0, 0.0); 1 << nbits];
    for i_gray in 0..side {
        for q_gray in 0..side {
            let idx = (i_gray << side_bits) | q_gray;
            let re = levels[gray_to_binary(i_gray)] / norm;
            let im = levels[gray_to_binary(q_gray)] / norm;
            points[idx] = Complex::new(re, im);
        }
    }
    points
}

fn gray_to_binary(g: usize) -> usize {
    let mut b = g;
    let mut shift = b >> 1;
    while shift != 0 {
        b ^= shift;
        shift >>= 1;
    }
    b
}

fn bits_to_index(bits: &[bool]) -> usize {
    bits.iter().fold(0usize, |acc, &b| (acc << 1) | b as usize)
}

fn index_to_bits(index: usize, nbits: usize) -> Vec<bool> {
    (0..nbits)
        .map(|b| (index >> (nbits - 1 - b)) & 1 == 1)
        .collect()
}

fn bit_at(index: usize, bit: usize, nbits: usize) -> bool {
    (index >> (nbits - 1 - bit)) & 1 == 1
}
