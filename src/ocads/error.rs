use crate::xml::XmlError;

/// Errors that can occur while writing an OCADS document
#[derive(Debug, thiserror::Error)]
pub enum OcadsError {
    /// The document could not be serialized
    #[error("OCADS document error: {0}")]
    XmlError(#[from] XmlError),

    /// The output could not be written or flushed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
