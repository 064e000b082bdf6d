//! Error taxonomy for the decode core
//!
//! Three failure kinds, matching spec §7: an unsupported mode triple, a
//! malformed code table (expansion produced an out-of-range index), and
//! their combination at `Decoder` construction. Non-convergence is
//! deliberately absent here — it is not an error (see [`crate::pipeline`]).

use snafu::Snafu;

use crate::mode::{CodeRate, FrameSize, Standard};

/// Code table registry lookup failed.
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
#[snafu(display(
    "no code table registered for standard={standard:?} framesize={framesize:?} rate={rate:?}"
))]
pub struct ModeError {
    pub standard: Standard,
    pub framesize: FrameSize,
    pub rate: CodeRate,
}

/// Parity-check graph expansion found a column index outside `[0, n)`.
#[derive(Debug, Snafu, PartialEq, Eq, Clone, Copy)]
#[snafu(display(
    "code table produced column index {index} but code length n={bound}"
))]
pub struct GraphError {
    pub index: u32,
    pub bound: u32,
}

/// Failure at `Decoder::new`.
#[derive(Debug, Snafu)]
pub enum ConstructError {
    #[snafu(display("unsupported mode: {source}"))]
    Mode { source: ModeError },

    #[snafu(display("malformed code table: {source}"))]
    Table { source: GraphError },
}

impl From<ModeError> for ConstructError {
    fn from(source: ModeError) -> Self {
        ConstructError::Mode { source }
    }
}

impl From<GraphError> for ConstructError {
    fn from(source: GraphError) -> Self {
        ConstructError::Table { source }
    }
}
