//! Soft-input LDPC decode core for DVB-S2/S2X/T2 physical-layer FEC frames.
//!
//! Complex baseband symbols in, hard-decision bytes out: [`pipeline::Decoder`]
//! ties together constellation demapping ([`demap`]), the standards-defined
//! bit interleaver ([`interleave`]), table-driven quasi-cyclic parity-check
//! graph construction ([`table`], [`graph`]), the batched min-sum decoder
//! engine ([`decoder`]), and the running SNR/N0 tracker ([`snr`]) that
//! adapts LLR scaling between batches.

pub mod decoder;
pub mod demap;
pub mod error;
pub mod graph;
pub mod interleave;
pub mod mode;
pub mod pipeline;
pub mod snr;
pub mod table;
pub mod tracing_init;

pub use error::{ConstructError, GraphError, ModeError};
pub use mode::{
    CodeRate, Constellation, FrameSize, InfoMode, KernelWidth, ModeDescriptor, OutputMode,
    Standard,
};
pub use pipeline::{BatchReport, Decoder};
pub use table::CodeTable;
