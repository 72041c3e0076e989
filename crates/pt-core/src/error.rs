use thiserror::Error;

/// Errors originating from the core types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid width/height dimensions at construction.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Requested width value.
        width: u32,
        /// Requested height value.
        height: u32,
    },
}
