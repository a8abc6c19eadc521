//! Text frames, paragraphs and run formatting.

use std::fmt::Write;

use crate::common::RGBColor;
use crate::common::xml::escape_xml;

use super::error::{PptxError, Result};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// DrawingML `algn` attribute value.
    pub(crate) fn as_attr(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }
}

/// A paragraph of text with uniform run formatting.
///
/// Formatting applies to the whole paragraph: the generated XML carries a
/// single run, so one font size, weight and color per paragraph.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    text: String,
    font_size: Option<f64>,
    bold: bool,
    color: Option<RGBColor>,
    alignment: Option<Alignment>,
    space_before: Option<f64>,
    space_after: Option<f64>,
}

impl Paragraph {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Paragraph {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the font size in points.
    pub fn font_size(&mut self, points: f64) -> &mut Self {
        self.font_size = Some(points);
        self
    }

    /// Set bold formatting.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    /// Set the font color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Set the paragraph alignment.
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the space before the paragraph in points.
    pub fn space_before(&mut self, points: f64) -> &mut Self {
        self.space_before = Some(points);
        self
    }

    /// Set the space after the paragraph in points.
    pub fn space_after(&mut self, points: f64) -> &mut Self {
        self.space_after = Some(points);
        self
    }

    /// Paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        let has_props =
            self.alignment.is_some() || self.space_before.is_some() || self.space_after.is_some();
        if has_props {
            xml.push_str("<a:pPr");
            if let Some(align) = self.alignment {
                write!(xml, " algn=\"{}\"", align.as_attr())
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
            }
            if self.space_before.is_none() && self.space_after.is_none() {
                xml.push_str("/>");
            } else {
                xml.push('>');
                if let Some(points) = self.space_before {
                    write!(
                        xml,
                        "<a:spcBef><a:spcPts val=\"{}\"/></a:spcBef>",
                        (points * 100.0) as u32
                    )
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
                }
                if let Some(points) = self.space_after {
                    write!(
                        xml,
                        "<a:spcAft><a:spcPts val=\"{}\"/></a:spcAft>",
                        (points * 100.0) as u32
                    )
                    .map_err(|e| PptxError::Xml(e.to_string()))?;
                }
                xml.push_str("</a:pPr>");
            }
        }

        // A run is always written so empty paragraphs survive a round trip
        xml.push_str("<a:r><a:rPr lang=\"en-US\"");
        if let Some(points) = self.font_size {
            // sz is in hundredths of a point
            write!(xml, " sz=\"{}\"", (points * 100.0) as u32)
                .map_err(|e| PptxError::Xml(e.to_string()))?;
        }
        if self.bold {
            xml.push_str(" b=\"1\"");
        }
        xml.push_str(" dirty=\"0\"");
        if let Some(color) = self.color {
            write!(
                xml,
                "><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:rPr>",
                color.to_hex()
            )
            .map_err(|e| PptxError::Xml(e.to_string()))?;
        } else {
            xml.push_str("/>");
        }
        write!(xml, "<a:t>{}</a:t></a:r></a:p>", escape_xml(&self.text))
            .map_err(|e| PptxError::Xml(e.to_string()))?;

        Ok(())
    }
}

/// The text container of a text box.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    word_wrap: Option<bool>,
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Enable or disable word wrap for the frame.
    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    /// Append a paragraph and return it for styling.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new(text));
        self.paragraphs.last_mut().unwrap()
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        match self.word_wrap {
            Some(true) => xml.push_str("<a:bodyPr wrap=\"square\" rtlCol=\"0\"/>"),
            Some(false) => xml.push_str("<a:bodyPr wrap=\"none\" rtlCol=\"0\"/>"),
            None => xml.push_str("<a:bodyPr rtlCol=\"0\"/>"),
        }
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            // txBody requires at least one paragraph
            xml.push_str("<a:p/>");
        } else {
            for paragraph in &self.paragraphs {
                paragraph.to_xml(xml)?;
            }
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_paragraph(p: &Paragraph) -> String {
        let mut xml = String::new();
        p.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_run_formatting() {
        let mut p = Paragraph::new("Thank You");
        p.font_size(54.0).bold(true).color(RGBColor::new(255, 255, 255));
        let xml = render_paragraph(&p);
        assert!(xml.contains("sz=\"5400\""));
        assert!(xml.contains("b=\"1\""));
        assert!(xml.contains("<a:srgbClr val=\"FFFFFF\"/>"));
        assert!(xml.contains("<a:t>Thank You</a:t>"));
    }

    #[test]
    fn test_alignment_and_spacing() {
        let mut p = Paragraph::new("centered");
        p.alignment(Alignment::Center);
        assert!(render_paragraph(&p).contains("<a:pPr algn=\"ctr\"/>"));

        let mut p = Paragraph::new("spaced");
        p.space_before(6.0).space_after(6.0);
        let xml = render_paragraph(&p);
        assert!(xml.contains("<a:spcBef><a:spcPts val=\"600\"/></a:spcBef>"));
        assert!(xml.contains("<a:spcAft><a:spcPts val=\"600\"/></a:spcAft>"));
    }

    #[test]
    fn test_plain_paragraph_has_no_ppr() {
        let xml = render_paragraph(&Paragraph::new("plain"));
        assert!(!xml.contains("<a:pPr"));
        assert!(xml.contains("<a:rPr lang=\"en-US\" dirty=\"0\"/>"));
    }

    #[test]
    fn test_empty_text_keeps_run() {
        let xml = render_paragraph(&Paragraph::new(""));
        assert!(xml.contains("<a:t></a:t>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render_paragraph(&Paragraph::new("Questions & Discussion"));
        assert!(xml.contains("<a:t>Questions &amp; Discussion</a:t>"));
    }

    #[test]
    fn test_frame_word_wrap() {
        let mut frame = TextFrame::default();
        frame.set_word_wrap(false);
        frame.add_paragraph("wide");
        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:bodyPr wrap=\"none\" rtlCol=\"0\"/>"));
    }

    #[test]
    fn test_empty_frame_emits_placeholder_paragraph() {
        let frame = TextFrame::default();
        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
    }
}
