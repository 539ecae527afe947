//! # XML Document Support
//!
//! A small owned element tree read with `quick-xml`, addressed by paths of
//! element names relative to any element:
//!
//! ```
//! use socatmeta::xml::Document;
//!
//! let doc = Document::parse_str("<a><b><c> text </c></b></a>").unwrap();
//! assert_eq!(doc.root().element_text(&["b", "c"]), "text");
//! assert_eq!(doc.root().element_text(&["b", "missing"]), "");
//! ```
//!
//! The [`helpers`] turn the free text found in metadata documents into model
//! values (names, dates, numbers with units).

mod element;
mod error;
pub mod helpers;


pub use element::{Document, Element};
pub use error::XmlError;
pub use helpers::{
    get_datestamp, get_list_of_lines, get_numeric_string, get_person_names, guess_platform_type,
};
