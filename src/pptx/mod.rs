//! PowerPoint (.pptx) document generation and inspection.
//!
//! A `.pptx` file is an OPC package: a ZIP archive of XML parts wired
//! together by relationship files. [`Presentation`] builds the document
//! model in memory and serializes every part on save; [`Package`] opens
//! a finished archive and answers questions about its contents.

pub mod error;
pub mod pres;
pub mod reader;
pub mod shape;
pub mod slide;
pub mod text;

pub(crate) mod constants;
pub(crate) mod package;
pub(crate) mod parts;

pub use error::{PptxError, Result};
pub use pres::{DocumentProperties, Presentation};
pub use reader::Package;
pub use shape::Shape;
pub use slide::Slide;
pub use text::{Alignment, Paragraph, TextFrame};
