use thiserror::Error;

/// Construction and access errors. Every variant indicates a broken caller
/// or a corrupted invariant; the engine never generates these during normal
/// play, since every position it produces is in-bounds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    Dimensions { width: u16, height: u16 },

    #[error("a run of {run} cannot be completed on a {width}x{height} board")]
    RunLength { run: u16, width: u16, height: u16 },

    #[error("position ({row}, {col}) is outside the {width}x{height} board")]
    OutOfBounds {
        row: u16,
        col: u16,
        width: u16,
        height: u16,
    },
}
