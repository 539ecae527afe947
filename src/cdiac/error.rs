use crate::xml::XmlError;

/// Errors that can occur while loading a CDIAC document
#[derive(Debug, thiserror::Error)]
pub enum CdiacError {
    /// The document is not well-formed XML
    #[error("CDIAC document error: {0}")]
    XmlError(#[from] XmlError),

    /// The document could not be opened
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
