//! The in-memory presentation model.

use std::fmt::Write;
use std::path::Path;

use crate::common::unit::inches_to_emu;

use super::error::{PptxError, Result};
use super::slide::Slide;

/// Core document metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// A PowerPoint presentation under construction.
///
/// Starts with a 10 x 7.5 inch slide size and no slides. Slides are
/// appended with [`add_slide`](Presentation::add_slide) and the finished
/// document is serialized with [`to_bytes`](Presentation::to_bytes) or
/// written to disk with [`save`](Presentation::save).
///
/// # Examples
///
/// ```
/// use slideberry::Presentation;
///
/// let mut pres = Presentation::new();
/// let slide = pres.add_slide();
/// slide.add_text_box(0.5, 0.5, 9.0, 1.0).add_paragraph("Hello");
/// let bytes = pres.to_bytes()?;
/// assert!(!bytes.is_empty());
/// # Ok::<(), slideberry::PptxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
    properties: DocumentProperties,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty presentation with the default slide size.
    pub fn new() -> Self {
        Presentation {
            slides: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
            properties: DocumentProperties::default(),
        }
    }

    /// Append a blank slide and return it for populating.
    pub fn add_slide(&mut self) -> &mut Slide {
        // Slide ids start at 256, matching the usual PowerPoint numbering
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().unwrap()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide at `index`, if it exists.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub(crate) fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide width in EMU.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMU.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide width in EMU.
    pub fn set_slide_width(&mut self, emu: i64) -> &mut Self {
        self.slide_width = emu;
        self
    }

    /// Set the slide height in EMU.
    pub fn set_slide_height(&mut self, emu: i64) -> &mut Self {
        self.slide_height = emu;
        self
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.properties.title = Some(title.into());
        self
    }

    /// Document title, if set.
    pub fn title(&self) -> Option<&str> {
        self.properties.title.as_deref()
    }

    /// Set the document author.
    pub fn set_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.properties.author = Some(author.into());
        self
    }

    /// Document author, if set.
    pub fn author(&self) -> Option<&str> {
        self.properties.author.as_deref()
    }

    pub(crate) fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Generate `ppt/presentation.xml`.
    ///
    /// Relationship ids mirror the layout written by the package writer:
    /// rId1 is the slide master, slides follow from rId2.
    pub(crate) fn generate_presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
        xml.push_str(
            "<p:presentation xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
             xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">",
        );
        xml.push_str(
            "<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>",
        );
        xml.push_str("<p:sldIdLst>");
        for (i, slide) in self.slides.iter().enumerate() {
            write!(
                xml,
                "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
                slide.slide_id(),
                i + 2
            )
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        }
        xml.push_str("</p:sldIdLst>");
        write!(
            xml,
            "<p:sldSz cx=\"{}\" cy=\"{}\"/><p:notesSz cx=\"6858000\" cy=\"9144000\"/></p:presentation>",
            self.slide_width, self.slide_height
        )
        .map_err(|e| PptxError::Xml(e.to_string()))?;
        Ok(xml)
    }

    /// Serialize the presentation to an in-memory `.pptx` archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        super::package::write_package(self)
    }

    /// Write the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slide_size() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_are_sequential_from_256() {
        let mut pres = Presentation::new();
        pres.add_slide();
        pres.add_slide();
        pres.add_slide();
        let ids: Vec<u32> = pres.slides().iter().map(Slide::slide_id).collect();
        assert_eq!(ids, vec![256, 257, 258]);
    }

    #[test]
    fn test_presentation_xml_references_slides() {
        let mut pres = Presentation::new();
        pres.add_slide();
        pres.add_slide();
        let xml = pres.generate_presentation_xml().unwrap();
        assert!(xml.contains("<p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/>"));
        assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
        assert!(xml.contains("<p:sldId id=\"257\" r:id=\"rId3\"/>"));
        assert!(xml.contains("<p:sldSz cx=\"9144000\" cy=\"6858000\"/>"));
    }

    #[test]
    fn test_presentation_xml_with_no_slides() {
        let pres = Presentation::new();
        let xml = pres.generate_presentation_xml().unwrap();
        assert!(xml.contains("<p:sldIdLst></p:sldIdLst>"));
    }

    #[test]
    fn test_custom_slide_size() {
        let mut pres = Presentation::new();
        pres.set_slide_width(12_192_000).set_slide_height(6_858_000);
        let xml = pres.generate_presentation_xml().unwrap();
        assert!(xml.contains("<p:sldSz cx=\"12192000\" cy=\"6858000\"/>"));
    }

    #[test]
    fn test_document_properties() {
        let mut pres = Presentation::new();
        pres.set_title("ServiceNow Incident Management")
            .set_author("slideberry");
        assert_eq!(pres.title(), Some("ServiceNow Incident Management"));
        assert_eq!(pres.author(), Some("slideberry"));
    }
}
