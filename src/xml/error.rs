/// Errors that can occur while reading or writing XML documents
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Malformed XML or a failure inside the XML reader/writer
    #[error("XML parsing error: {0}")]
    ParseError(#[from] quick_xml::Error),

    /// I/O error reading or writing the document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Element or attribute name that is not valid UTF-8
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Well-formed XML that does not form a single element tree
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    /// The input contained no element at all
    #[error("Document has no root element")]
    NoRootElement,
}
