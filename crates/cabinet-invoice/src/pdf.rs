//! # PDF Assembly
//!
//! Wraps finished canvas pages into a complete document.
//!
//! ## Object Graph
//! ```text
//! Trailer ──► Catalog ──► Pages ──┬──► Page 1 ──► Content stream
//!    │                  │         ├──► Page 2 ──► Content stream
//!    │                  │         └──► ...
//!    │                  └── Resources: /F1 Helvetica, /F2 Helvetica-Bold
//!    └──► Info (Title, Producer, CreationDate)
//! ```
//!
//! Streams stay uncompressed and no `/ID` is written, so identical input
//! always serializes to identical bytes.

use chrono::NaiveDateTime;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::canvas::PageOps;
use crate::error::{InvoiceError, InvoiceResult};
use crate::metrics::Font;

const PDF_VERSION: &str = "1.4";
const PRODUCER: &str = "cabinet-invoice";

/// Document-level metadata.
#[derive(Debug, Clone)]
pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub created: NaiveDateTime,
}

/// Serializes `pages` of size `width` x `height` into PDF bytes.
pub fn assemble(
    pages: Vec<PageOps>,
    width: f32,
    height: f32,
    info: &DocumentInfo<'_>,
) -> InvoiceResult<Vec<u8>> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = doc.add_object(font_dictionary(font));
        fonts.set(font.resource_name().to_vec(), Object::Reference(font_id));
    }
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let page_count = pages.len();
    let mut kids = Vec::with_capacity(page_count);
    for operations in pages {
        let content = Content { operations }.encode()?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
        kids.push(Object::Reference(add_page(&mut doc, pages_id, content_id)));
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", name("Pages"));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(page_count as i64));
    pages_dict.set("Resources", Object::Dictionary(resources));
    pages_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ]),
    );
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", name("Catalog"));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);

    let info_id = doc.add_object(info_dictionary(info));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(InvoiceError::Encode)?;
    debug!(pages = page_count, bytes = bytes.len(), "Assembled PDF");
    Ok(bytes)
}

fn add_page(doc: &mut Document, parent: ObjectId, content: ObjectId) -> ObjectId {
    let mut page = Dictionary::new();
    page.set("Type", name("Page"));
    page.set("Parent", Object::Reference(parent));
    page.set("Contents", Object::Reference(content));
    doc.add_object(page)
}

fn font_dictionary(font: Font) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", name("Font"));
    dict.set("Subtype", name("Type1"));
    dict.set("BaseFont", Object::Name(font.base_font().to_vec()));
    dict.set("Encoding", name("WinAnsiEncoding"));
    dict
}

fn info_dictionary(info: &DocumentInfo<'_>) -> Dictionary {
    let created = info.created.format("D:%Y%m%d%H%M%S").to_string();
    let mut dict = Dictionary::new();
    dict.set("Title", text(info.title));
    dict.set("Producer", text(PRODUCER));
    dict.set("CreationDate", text(&created));
    dict
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

fn text(value: &str) -> Object {
    Object::String(crate::metrics::encode_text(value), StringFormat::Literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use chrono::NaiveDate;

    fn info() -> DocumentInfo<'static> {
        DocumentInfo {
            title: "Invoice",
            created: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    fn two_pages() -> Vec<PageOps> {
        let mut canvas = Canvas::new();
        canvas.draw_text(Font::Bold, 14.0, 50.0, 732.0, "page one");
        canvas.show_page();
        canvas.draw_text(Font::Regular, 9.0, 50.0, 742.0, "page two");
        canvas.finish()
    }

    #[test]
    fn test_assembled_document_parses() {
        let bytes = assemble(two_pages(), 612.0, 792.0, &info()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let a = assemble(two_pages(), 612.0, 792.0, &info()).unwrap();
        let b = assemble(two_pages(), 612.0, 792.0, &info()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_creation_date_comes_from_info() {
        let bytes = assemble(two_pages(), 612.0, 792.0, &info()).unwrap();
        let needle = b"D:20250601143000";
        assert!(bytes.windows(needle.len()).any(|w| w == needle));
    }
}
