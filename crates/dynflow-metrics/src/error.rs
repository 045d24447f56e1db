use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("tensor contains no time points")]
    EmptyTensor,

    #[error("tensor slices must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("tensor slice {step} has shape {rows}x{cols}, different from the first slice")]
    RaggedTensor {
        step: usize,
        rows: usize,
        cols: usize,
    },
}
