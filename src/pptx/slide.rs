//! A single slide: optional background color plus an ordered shape list.

use std::fmt::Write;

use crate::common::RGBColor;

use super::error::{PptxError, Result};
use super::shape::Shape;
use super::text::TextFrame;

/// A presentation slide.
///
/// Slides are created through [`Presentation::add_slide`] and populated
/// with shapes in z-order: later shapes render on top of earlier ones.
///
/// [`Presentation::add_slide`]: super::Presentation::add_slide
#[derive(Debug, Clone)]
pub struct Slide {
    slide_id: u32,
    background: Option<RGBColor>,
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Slide {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Slide identifier as written to the presentation part.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set a solid background color.
    pub fn set_background(&mut self, color: RGBColor) -> &mut Self {
        self.background = Some(color);
        self
    }

    /// Background color, if one was set.
    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Add a text box at the given position and size in inches.
    /// Returns its text frame for filling in paragraphs.
    pub fn add_text_box(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut TextFrame {
        let shape_id = self.next_shape_id();
        self.shapes.push(Shape::new_text_box(shape_id, x, y, width, height));
        self.shapes
            .last_mut()
            .and_then(|shape| shape.text_frame_mut())
            .unwrap()
    }

    /// Add a rectangle at the given position and size in inches.
    /// Returns the shape for setting fill and outline colors.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Shape {
        let shape_id = self.next_shape_id();
        self.shapes.push(Shape::new_rectangle(shape_id, x, y, width, height));
        self.shapes.last_mut().unwrap()
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // Shape id 1 is reserved for the group holding the shape tree
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
        xml.push_str(
            "<p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
             xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
             xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\"><p:cSld>",
        );

        // The background element must precede the shape tree
        if let Some(color) = self.background {
            write!(
                xml,
                "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>",
                color.to_hex()
            )
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        }

        xml.push_str(
            "<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
             <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
             <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>",
        );
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut slide = Slide::new(256);
        slide.add_rectangle(0.0, 0.0, 10.0, 1.0);
        slide.add_text_box(0.5, 0.2, 9.0, 0.8);
        let ids: Vec<u32> = slide.shapes().iter().map(Shape::shape_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new(256);
        slide.set_background(RGBColor::new(31, 78, 121));
        slide.add_text_box(0.0, 0.0, 1.0, 1.0);
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains("<a:srgbClr val=\"1F4E79\"/>"));
    }

    #[test]
    fn test_no_background_element_by_default() {
        let slide = Slide::new(256);
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
    }

    #[test]
    fn test_text_box_frame_is_writable() {
        let mut slide = Slide::new(257);
        let frame = slide.add_text_box(0.7, 1.3, 8.6, 5.7);
        frame.add_paragraph("first").font_size(18.0);
        frame.add_paragraph("second");
        assert_eq!(slide.shape_count(), 1);
        assert_eq!(slide.shapes()[0].text_frame().unwrap().paragraph_count(), 2);
    }
}
