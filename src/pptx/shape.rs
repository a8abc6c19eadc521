//! Slide shapes: text boxes and filled rectangles.

use std::fmt::Write;

use crate::common::RGBColor;
use crate::common::unit::inches_to_emu;

use super::error::{PptxError, Result};
use super::text::TextFrame;

/// A shape placed on a slide.
///
/// Two shape kinds are modeled: borderless text boxes and preset-geometry
/// rectangles with solid fill and outline. Positions and sizes are given
/// in inches and converted to EMU on serialization.
#[derive(Debug, Clone)]
pub struct Shape {
    shape_id: u32,
    kind: ShapeKind,
}

#[derive(Debug, Clone)]
enum ShapeKind {
    TextBox {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        frame: TextFrame,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<RGBColor>,
        line: Option<RGBColor>,
    },
}

impl Shape {
    pub(crate) fn new_text_box(shape_id: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape {
            shape_id,
            kind: ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame: TextFrame::default(),
            },
        }
    }

    pub(crate) fn new_rectangle(shape_id: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Shape {
            shape_id,
            kind: ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
                fill: None,
                line: None,
            },
        }
    }

    /// Shape identifier, unique within the slide.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Set the solid fill color. Has no effect on text boxes.
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeKind::Rectangle { fill, .. } = &mut self.kind {
            *fill = Some(color);
        }
        self
    }

    /// Set the outline color. Has no effect on text boxes.
    pub fn line(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeKind::Rectangle { line, .. } = &mut self.kind {
            *line = Some(color);
        }
        self
    }

    /// Text frame of a text box, `None` for rectangles.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox { frame, .. } => Some(frame),
            ShapeKind::Rectangle { .. } => None,
        }
    }

    pub(crate) fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::TextBox { frame, .. } => Some(frame),
            ShapeKind::Rectangle { .. } => None,
        }
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame,
            } => {
                write!(
                    xml,
                    "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"Text Box {id}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>",
                    id = self.shape_id
                )
                .map_err(|e| PptxError::Xml(e.to_string()))?;
                write_sp_pr_open(xml, *x, *y, *width, *height)?;
                xml.push_str("<a:noFill/></p:spPr>");
                frame.to_xml(xml)?;
                xml.push_str("</p:sp>");
            }
            ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
                fill,
                line,
            } => {
                write!(
                    xml,
                    "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"Rectangle {id}\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>",
                    id = self.shape_id
                )
                .map_err(|e| PptxError::Xml(e.to_string()))?;
                write_sp_pr_open(xml, *x, *y, *width, *height)?;
                if let Some(color) = fill {
                    write!(
                        xml,
                        "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
                        color.to_hex()
                    )
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
                }
                if let Some(color) = line {
                    write!(
                        xml,
                        "<a:ln><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:ln>",
                        color.to_hex()
                    )
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
                }
                xml.push_str("</p:spPr></p:sp>");
            }
        }
        Ok(())
    }
}

/// Open `<p:spPr>` with the shape transform and preset rectangle geometry.
/// The caller appends fill properties and closes the element.
fn write_sp_pr_open(xml: &mut String, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
    write!(
        xml,
        "<p:spPr><a:xfrm><a:off x=\"{}\" y=\"{}\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm><a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>",
        inches_to_emu(x),
        inches_to_emu(y),
        inches_to_emu(width),
        inches_to_emu(height)
    )
    .map_err(|e| PptxError::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_box_xml() {
        let mut shape = Shape::new_text_box(2, 0.5, 2.5, 9.0, 1.5);
        shape
            .text_frame_mut()
            .unwrap()
            .add_paragraph("ServiceNow Incident Management");
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<p:cNvPr id=\"2\" name=\"Text Box 2\"/>"));
        assert!(xml.contains("<p:cNvSpPr txBox=\"1\"/>"));
        assert!(xml.contains("<a:off x=\"457200\" y=\"2286000\"/>"));
        assert!(xml.contains("<a:ext cx=\"8229600\" cy=\"1371600\"/>"));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_rectangle_xml() {
        let mut shape = Shape::new_rectangle(2, 0.0, 0.0, 10.0, 1.0);
        let color = RGBColor::new(31, 78, 121);
        shape.fill(color).line(color);
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<p:cNvPr id=\"2\" name=\"Rectangle 2\"/>"));
        assert!(xml.contains("<a:solidFill><a:srgbClr val=\"1F4E79\"/></a:solidFill>"));
        assert!(xml.contains("<a:ln><a:solidFill><a:srgbClr val=\"1F4E79\"/></a:solidFill></a:ln>"));
        // Rectangles carry no text body
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_fill_has_no_effect_on_text_box() {
        let mut shape = Shape::new_text_box(3, 0.0, 0.0, 1.0, 1.0);
        shape.fill(RGBColor::new(255, 0, 0));
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(!xml.contains("FF0000"));
    }
}
