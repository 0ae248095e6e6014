//! Error types for the hydrec-extrema crate.

/// Error type for extrema detection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtremaError {
    /// Returned when the detection window is zero.
    #[error("detection window must be at least 1 sample, got {window}")]
    InvalidWindow {
        /// The rejected window width.
        window: usize,
    },

    /// Returned when the input series contains a non-finite value.
    #[error("series contains a non-finite value at index {index}")]
    NonFinite {
        /// Position of the first non-finite sample.
        index: usize,
    },
}
