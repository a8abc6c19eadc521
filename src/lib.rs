//! Slideberry - PowerPoint deck generation for the ServiceNow Incident
//! Management overview presentation
//!
//! This crate carries a small, hand-written Office Open XML (OOXML) writer
//! for PowerPoint presentations and uses it to produce a fixed ten-slide
//! deck describing a ServiceNow incident-management web application.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Common utilities** (`common`): EMU length conversions, RGB colors,
//!    XML text escaping
//! 2. **PPTX layer** (`pptx`): the presentation object model
//!    (`Presentation` -> `Slide` -> `Shape` -> `TextFrame` -> `Paragraph`),
//!    the Open Packaging Conventions serializer that renders the model to a
//!    complete `.pptx` ZIP package, and a reader for verifying produced files
//! 3. **Deck layer** (`deck`): the fixed slide definitions and the two
//!    slide-construction helpers (title-style and content-style)
//!
//! # Example - Building a presentation
//!
//! ```no_run
//! use slideberry::pptx::{Alignment, Presentation};
//! use slideberry::common::RGBColor;
//!
//! # fn main() -> slideberry::Result<()> {
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(RGBColor::new(31, 78, 121));
//!
//! // Shape positions and sizes are in inches
//! let frame = slide.add_text_box(0.5, 2.5, 9.0, 1.5);
//! frame.set_word_wrap(true);
//! frame
//!     .add_paragraph("Hello")
//!     .font_size(54.0)
//!     .bold(true)
//!     .alignment(Alignment::Center);
//!
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building the fixed deck
//!
//! ```no_run
//! use slideberry::deck;
//!
//! # fn main() -> slideberry::Result<()> {
//! let pres = deck::build_deck();
//! pres.save(deck::OUTPUT_FILE)?;
//! println!("Slides: {}", pres.slide_count());
//! # Ok(())
//! # }
//! ```

/// Common types and utilities shared across the crate
pub mod common;

/// Fixed deck content and construction helpers
pub mod deck;

/// PowerPoint (.pptx) object model, writer, and reader
pub mod pptx;

// Re-export commonly used types for convenience
pub use common::RGBColor;
pub use pptx::{PptxError, Presentation, Result};
