//! PPTX package writing functionality.
//!
//! A `.pptx` document is an OPC package: a ZIP archive whose parts are
//! declared in `[Content_Types].xml` and wired together by `.rels`
//! relationship parts. This module assembles the full archive from a
//! [`Presentation`] in memory.

use std::fmt::Write as _;
use std::io::Write;

use chrono::{SecondsFormat, Utc};
use tracing::debug;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::xml::escape_xml;

use super::constants::{content_type, relationship_type};
use super::error::{PptxError, Result};
use super::parts;
use super::pres::{DocumentProperties, Presentation};

/// Builder for OPC packages (ZIP archives).
///
/// Thin wrapper over [`ZipWriter`] that deflates every part. Unlike ODF
/// there is no `mimetype` entry with special placement rules; the content
/// types part carries that information instead.
pub(crate) struct PackageWriter<W: Write + std::io::Seek> {
    zip_writer: ZipWriter<W>,
}

impl PackageWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory.
    pub(crate) fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(std::io::Cursor::new(Vec::new())),
        }
    }

    /// Finish writing and return the bytes.
    pub(crate) fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write + std::io::Seek> PackageWriter<W> {
    /// Add a part to the package.
    pub(crate) fn add_part(&mut self, path: &str, content: &str) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Serialize a presentation into a complete `.pptx` archive.
pub(crate) fn write_package(pres: &Presentation) -> Result<Vec<u8>> {
    let slide_count = pres.slide_count();
    debug!(slides = slide_count, "writing pptx package");

    let mut writer = PackageWriter::new();

    writer.add_part("[Content_Types].xml", &content_types_xml(slide_count)?)?;
    writer.add_part("_rels/.rels", parts::ROOT_RELS_XML)?;

    writer.add_part("ppt/presentation.xml", &pres.generate_presentation_xml()?)?;
    writer.add_part(
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(slide_count)?,
    )?;

    writer.add_part("ppt/slideMasters/slideMaster1.xml", parts::SLIDE_MASTER_XML)?;
    writer.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        parts::SLIDE_MASTER_RELS_XML,
    )?;
    writer.add_part("ppt/slideLayouts/slideLayout1.xml", parts::SLIDE_LAYOUT_XML)?;
    writer.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        parts::SLIDE_LAYOUT_RELS_XML,
    )?;
    writer.add_part("ppt/theme/theme1.xml", parts::THEME_XML)?;
    writer.add_part("ppt/presProps.xml", parts::PRES_PROPS_XML)?;
    writer.add_part("ppt/viewProps.xml", parts::VIEW_PROPS_XML)?;
    writer.add_part("ppt/tableStyles.xml", parts::TABLE_STYLES_XML)?;

    for (i, slide) in pres.slides().iter().enumerate() {
        let slide_xml = slide.to_xml()?;
        writer.add_part(&format!("ppt/slides/slide{}.xml", i + 1), &slide_xml)?;
        writer.add_part(
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            parts::SLIDE_RELS_XML,
        )?;
    }

    writer.add_part("docProps/core.xml", &core_props_xml(pres.properties())?)?;
    writer.add_part("docProps/app.xml", &app_props_xml(slide_count)?)?;

    let bytes = writer.finish_to_bytes()?;
    debug!(bytes = bytes.len(), "pptx package assembled");
    Ok(bytes)
}

/// Generate `[Content_Types].xml` declaring every part in the package.
fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    xml.push_str("<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">");
    write!(
        xml,
        "<Default Extension=\"rels\" ContentType=\"{}\"/><Default Extension=\"xml\" ContentType=\"{}\"/>",
        content_type::RELATIONSHIPS,
        content_type::XML
    )
    .map_err(|e| PptxError::Xml(e.to_string()))?;

    let overrides = [
        ("/ppt/presentation.xml", content_type::PRESENTATION_MAIN),
        ("/ppt/slideMasters/slideMaster1.xml", content_type::SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml", content_type::SLIDE_LAYOUT),
        ("/ppt/theme/theme1.xml", content_type::THEME),
        ("/ppt/presProps.xml", content_type::PRES_PROPS),
        ("/ppt/viewProps.xml", content_type::VIEW_PROPS),
        ("/ppt/tableStyles.xml", content_type::TABLE_STYLES),
    ];
    for (part_name, ct) in overrides {
        write!(xml, "<Override PartName=\"{part_name}\" ContentType=\"{ct}\"/>")
            .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    for i in 0..slide_count {
        write!(
            xml,
            "<Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"{}\"/>",
            i + 1,
            content_type::SLIDE
        )
        .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    write!(
        xml,
        "<Override PartName=\"/docProps/core.xml\" ContentType=\"{}\"/><Override PartName=\"/docProps/app.xml\" ContentType=\"{}\"/></Types>",
        content_type::CORE_PROPERTIES,
        content_type::EXTENDED_PROPERTIES
    )
    .map_err(|e| PptxError::Xml(e.to_string()))?;
    Ok(xml)
}

/// Generate `ppt/_rels/presentation.xml.rels`.
///
/// rId1 is the slide master, rId2 through rId(n+1) are the slides, and
/// the supporting parts follow. [`Presentation::generate_presentation_xml`]
/// relies on this numbering.
fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    xml.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    );
    write!(
        xml,
        "<Relationship Id=\"rId1\" Type=\"{}\" Target=\"slideMasters/slideMaster1.xml\"/>",
        relationship_type::SLIDE_MASTER
    )
    .map_err(|e| PptxError::Xml(e.to_string()))?;
    for i in 0..slide_count {
        write!(
            xml,
            "<Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>",
            i + 2,
            relationship_type::SLIDE,
            i + 1
        )
        .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    let tail = [
        (slide_count + 2, relationship_type::PRES_PROPS, "presProps.xml"),
        (slide_count + 3, relationship_type::VIEW_PROPS, "viewProps.xml"),
        (slide_count + 4, relationship_type::THEME, "theme/theme1.xml"),
        (slide_count + 5, relationship_type::TABLE_STYLES, "tableStyles.xml"),
    ];
    for (id, rel_type, target) in tail {
        write!(
            xml,
            "<Relationship Id=\"rId{id}\" Type=\"{rel_type}\" Target=\"{target}\"/>"
        )
        .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Generate `docProps/core.xml` with title, author and timestamps.
fn core_props_xml(properties: &DocumentProperties) -> Result<String> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(512);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    xml.push_str(
        "<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    );
    if let Some(title) = &properties.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))
            .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    if let Some(author) = &properties.author {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(author))
            .map_err(|e| PptxError::Xml(e.to_string()))?;
    }
    write!(
        xml,
        "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{now}</dcterms:created>\
         <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{now}</dcterms:modified>\
         </cp:coreProperties>"
    )
    .map_err(|e| PptxError::Xml(e.to_string()))?;
    Ok(xml)
}

/// Generate `docProps/app.xml`.
fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>");
    write!(
        xml,
        "<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
         xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVT\">\
         <Application>{}</Application><Slides>{}</Slides></Properties>",
        concat!("Slideberry/", env!("CARGO_PKG_VERSION")),
        slide_count
    )
    .map_err(|e| PptxError::Xml(e.to_string()))?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_rels_numbering() {
        let xml = presentation_rels_xml(10).unwrap();
        assert!(xml.contains("Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\""));
        assert!(xml.contains("Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide1.xml\"/>"));
        assert!(xml.contains("Id=\"rId11\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide10.xml\"/>"));
        assert!(xml.contains("Id=\"rId12\"") && xml.contains("Target=\"presProps.xml\""));
        assert!(xml.contains("Id=\"rId14\"") && xml.contains("Target=\"theme/theme1.xml\""));
        assert!(xml.contains("Id=\"rId15\"") && xml.contains("Target=\"tableStyles.xml\""));
    }

    #[test]
    fn test_content_types_lists_each_slide() {
        let xml = content_types_xml(3).unwrap();
        assert!(xml.contains("PartName=\"/ppt/slides/slide1.xml\""));
        assert!(xml.contains("PartName=\"/ppt/slides/slide3.xml\""));
        // 7 fixed ppt parts + 3 slides + core + app
        assert_eq!(xml.matches("<Override").count(), 12);
        assert_eq!(xml.matches("<Default").count(), 2);
    }

    #[test]
    fn test_core_props_escape_and_timestamps() {
        let props = DocumentProperties {
            title: Some("Q&A Deck".to_string()),
            author: None,
        };
        let xml = core_props_xml(&props).unwrap();
        assert!(xml.contains("<dc:title>Q&amp;A Deck</dc:title>"));
        assert!(!xml.contains("<dc:creator>"));
        assert!(xml.contains("<dcterms:created xsi:type=\"dcterms:W3CDTF\">"));
        assert!(xml.contains("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">"));
    }

    #[test]
    fn test_app_props_slide_count() {
        let xml = app_props_xml(10).unwrap();
        assert!(xml.contains("<Slides>10</Slides>"));
        assert!(xml.contains("<Application>Slideberry/"));
    }

    #[test]
    fn test_package_bytes_are_a_zip_archive() {
        let mut pres = Presentation::new();
        pres.add_slide();
        let bytes = write_package(&pres).unwrap();
        // ZIP local file header signature
        assert_eq!(&bytes[..2], b"PK");
    }
}
