//! Inverse bit interleaver (spec §4.4).
//!
//! Three independent pieces, composed by [`crate::pipeline`]:
//! fixed twist/mux [`tables`], the precomputed permutation [`plan::Plan`]
//! built from them, and the q-dependent [`parity`] interleave applied
//! separately because it depends on the selected code table.

pub mod parity;
pub mod plan;
pub mod tables;

pub use parity::{deinterleave_parity, interleave_parity};
pub use plan::{psk8_order_for_rate, Plan, Psk8Order};
