//! Reading finished `.pptx` packages.
//!
//! [`Package`] opens an archive and answers structural questions about
//! it. It does not rebuild the full document model; each accessor pulls
//! the part it needs and scans it with a streaming XML reader.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::common::xml::unescape_xml;

use super::error::{PptxError, Result};

/// A PowerPoint (.pptx) package opened for inspection.
///
/// # Examples
///
/// ```rust,no_run
/// use slideberry::pptx::Package;
///
/// let mut pkg = Package::open("ServiceNow_Incident_Management.pptx")?;
/// println!("Presentation has {} slides", pkg.slide_count()?);
/// # Ok::<(), slideberry::PptxError>(())
/// ```
pub struct Package {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Package {
    /// Open a `.pptx` package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Open a `.pptx` package from in-memory bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        // The presentation part is what makes a ZIP archive a .pptx
        if archive.by_name("ppt/presentation.xml").is_err() {
            return Err(PptxError::InvalidFormat(
                "missing ppt/presentation.xml".to_string(),
            ));
        }
        Ok(Package { archive })
    }

    /// Raw bytes of a package part.
    pub fn part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(PptxError::PartNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Number of slides listed in `ppt/presentation.xml`.
    pub fn slide_count(&mut self) -> Result<usize> {
        let bytes = self.part("ppt/presentation.xml")?;
        let mut reader = Reader::from_reader(&bytes[..]);

        let mut count = 0;
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldId" {
                        count += 1;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Ok(count)
    }

    /// Slide size in EMU as `(width, height)`.
    pub fn slide_size(&mut self) -> Result<(i64, i64)> {
        let bytes = self.part("ppt/presentation.xml")?;
        let mut reader = Reader::from_reader(&bytes[..]);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"sldSz" {
                        let mut cx = None;
                        let mut cy = None;
                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"cx" => cx = Some(parse_emu_attr(&attr.value)?),
                                b"cy" => cy = Some(parse_emu_attr(&attr.value)?),
                                _ => {}
                            }
                        }
                        return match (cx, cy) {
                            (Some(cx), Some(cy)) => Ok((cx, cy)),
                            _ => Err(PptxError::InvalidFormat(
                                "sldSz missing cx or cy".to_string(),
                            )),
                        };
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Err(PptxError::InvalidFormat(
            "no sldSz element in presentation.xml".to_string(),
        ))
    }

    /// Extract the text of every text frame on a slide.
    ///
    /// Returns one entry per `<p:txBody>` in shape order, each holding the
    /// paragraph texts in document order. Slide indices are zero-based.
    ///
    /// Whitespace is preserved exactly as written: spacer paragraphs come
    /// back as empty strings and indented text keeps its leading spaces.
    pub fn slide_text_frames(&mut self, index: usize) -> Result<Vec<Vec<String>>> {
        let bytes = self.part(&format!("ppt/slides/slide{}.xml", index + 1))?;
        let mut reader = Reader::from_reader(&bytes[..]);

        let mut frames: Vec<Vec<String>> = Vec::new();
        let mut in_body = false;
        let mut in_text = false;
        let mut current = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"txBody" => {
                        frames.push(Vec::new());
                        in_body = true;
                    }
                    b"p" if in_body => current.clear(),
                    b"t" if in_body => in_text = true,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_text => {
                    let t = std::str::from_utf8(e.as_ref())
                        .map_err(|e| PptxError::Xml(e.to_string()))?;
                    current.push_str(&unescape_xml(t));
                }
                // quick-xml reports `&amp;` and friends as separate reference events
                Ok(Event::GeneralRef(e)) if in_text => {
                    let name = std::str::from_utf8(e.as_ref())
                        .map_err(|e| PptxError::Xml(e.to_string()))?;
                    if let Some(c) = resolve_reference(name) {
                        current.push(c);
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"txBody" => in_body = false,
                    b"p" if in_body => {
                        if let Some(frame) = frames.last_mut() {
                            frame.push(std::mem::take(&mut current));
                        }
                    }
                    b"t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Empty(e)) if in_body && e.local_name().as_ref() == b"p" => {
                    if let Some(frame) = frames.last_mut() {
                        frame.push(String::new());
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(frames)
    }

    /// Number of shapes on a slide. Slide indices are zero-based.
    pub fn slide_shape_count(&mut self, index: usize) -> Result<usize> {
        let bytes = self.part(&format!("ppt/slides/slide{}.xml", index + 1))?;
        let mut reader = Reader::from_reader(&bytes[..]);

        let mut count = 0;
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"sp" => count += 1,
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Ok(count)
    }

    /// Background color of a slide as an `RRGGBB` hex string, if the slide
    /// carries an explicit solid background.
    pub fn slide_background(&mut self, index: usize) -> Result<Option<String>> {
        let bytes = self.part(&format!("ppt/slides/slide{}.xml", index + 1))?;
        let mut reader = Reader::from_reader(&bytes[..]);

        let mut in_bg = false;
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"bg" => in_bg = true,
                Ok(Event::End(e)) if e.local_name().as_ref() == b"bg" => in_bg = false,
                Ok(Event::Start(e)) | Ok(Event::Empty(e))
                    if in_bg && e.local_name().as_ref() == b"srgbClr" =>
                {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"val" {
                            let hex = std::str::from_utf8(&attr.value)
                                .map_err(|e| PptxError::Xml(e.to_string()))?;
                            return Ok(Some(hex.to_string()));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Ok(None)
    }
}

fn parse_emu_attr(value: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(value).map_err(|e| PptxError::Xml(e.to_string()))?;
    text.parse()
        .map_err(|_| PptxError::InvalidFormat(format!("bad EMU value: {text}")))
}

/// Resolve a predefined entity or numeric character reference.
fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::pptx::Presentation;

    fn sample_package() -> Package {
        let mut pres = Presentation::new();
        let slide = pres.add_slide();
        slide.set_background(RGBColor::new(31, 78, 121));
        let frame = slide.add_text_box(0.5, 2.5, 9.0, 1.5);
        frame.add_paragraph("Create & Edit");
        frame.add_paragraph("");
        slide.add_rectangle(0.0, 0.0, 10.0, 1.0);
        Package::from_bytes(pres.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_round_trip_structure() {
        let mut pkg = sample_package();
        assert_eq!(pkg.slide_count().unwrap(), 1);
        assert_eq!(pkg.slide_size().unwrap(), (9_144_000, 6_858_000));
        assert_eq!(pkg.slide_shape_count(0).unwrap(), 2);
        assert_eq!(pkg.slide_background(0).unwrap().as_deref(), Some("1F4E79"));
    }

    #[test]
    fn test_round_trip_text_preserves_escapes_and_empties() {
        let mut pkg = sample_package();
        let frames = pkg.slide_text_frames(0).unwrap();
        // One text box; the rectangle has no text body
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], vec!["Create & Edit".to_string(), String::new()]);
    }

    #[test]
    fn test_missing_part_is_reported() {
        let mut pkg = sample_package();
        let err = pkg.part("ppt/slides/slide99.xml").unwrap_err();
        assert!(matches!(err, PptxError::PartNotFound(_)));
    }

    #[test]
    fn test_rejects_archive_without_presentation_part() {
        // An empty ZIP is not a presentation
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file("hello.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        std::io::Write::write_all(&mut writer, b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(
            Package::from_bytes(bytes),
            Err(PptxError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_resolve_reference_variants() {
        assert_eq!(resolve_reference("amp"), Some('&'));
        assert_eq!(resolve_reference("#38"), Some('&'));
        assert_eq!(resolve_reference("#x26"), Some('&'));
        assert_eq!(resolve_reference("unknown"), None);
    }
}
