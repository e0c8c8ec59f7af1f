//! # PDF Renderer
//!
//! Renders an assembled [`Document`] onto a single US Letter page using
//! absolute coordinates.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         US Letter (8.5" x 11")                          │
//! │                                                                         │
//! │  MABIDIS TECHNOLOGIES LTD              ← company header, 1" from top   │
//! │  P.O. Box 1234, Nairobi, Kenya                                         │
//! │                                                                         │
//! │  QUOTATION                             ← title, 2" from top            │
//! │  Number: QTN-3FA2B91C                                                  │
//! │  Date: 2026-08-27                                                      │
//! │                                                                         │
//! │  BILL TO:                              ← client block, 3" from top     │
//! │  Acme Ltd ...                                                          │
//! │                                                                         │
//! │  Item        Qty   Unit   Price   Total   ← table header, 4.5" down   │
//! │  ──────────────────────────────────────                                │
//! │  rows step down 0.25" each                                             │
//! │                                                                         │
//! │                          ───────────────  ← totals rule                │
//! │                          Subtotal / VAT (16%) / TOTAL                  │
//! │                                                                         │
//! │  Thank you for your business!          ← footer, 0.75" from bottom    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomic Placement
//! The document is rendered fully in memory, written to a sibling temp file,
//! then renamed onto the destination. The destination path never holds a
//! partially written PDF.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use tracing::{debug, info};

use quotegen_core::{Document, LineItem};

use crate::error::{RenderError, RenderResult};

// =============================================================================
// Layout Constants
// =============================================================================

const MM_PER_INCH: f64 = 25.4;

/// US Letter page size in millimetres.
const PAGE_WIDTH_MM: f64 = 215.9;
const PAGE_HEIGHT_MM: f64 = 279.4;

/// Item names wider than this are truncated on the page. The stored
/// document keeps the full name; only the rendering narrows it.
const ITEM_NAME_WIDTH: usize = 30;

/// Column x-positions of the items table, in inches from the left edge.
const COL_ITEM: f64 = 1.0;
const COL_QTY: f64 = 3.5;
const COL_UNIT: f64 = 4.5;
const COL_PRICE: f64 = 5.5;
const COL_TOTAL: f64 = 6.5;
const TABLE_RIGHT: f64 = 7.5;

const COMPANY_NAME: &str = "MABIDIS TECHNOLOGIES LTD";
const COMPANY_ADDRESS: &str = "P.O. Box 1234, Nairobi, Kenya";
const COMPANY_CONTACT: &str = "Email: support@mabidis.co.ke | Phone: +254 712 345678";
const FOOTER_THANKS: &str = "Thank you for your business!";
const FOOTER_GENERATED: &str = "This document was generated automatically by MABIDIS System.";

/// Converts inches to printpdf millimetres.
#[inline]
fn inches(v: f64) -> Mm {
    Mm(v * MM_PER_INCH)
}

// =============================================================================
// Renderer
// =============================================================================

/// Returns the conventional output filename for a document,
/// e.g. `Quotation_QTN-3FA2B91C.pdf`.
pub fn default_filename(document: &Document) -> String {
    format!("{}_{}.pdf", document.document_type.as_str(), document.number)
}

/// Renders `document` to a single-page PDF at `path`.
///
/// ## Guarantees
/// - The page layout is fixed-coordinate; items never reflow
/// - `path` either ends up as a complete PDF or is left untouched
///
/// ## Errors
/// - [`RenderError::Pdf`] if the PDF backend fails
/// - [`RenderError::Io`] if the temp file cannot be written or renamed
pub fn render(document: &Document, path: &Path) -> RenderResult<()> {
    info!(
        number = %document.number,
        items = document.items.len(),
        path = %path.display(),
        "Rendering PDF"
    );

    let bytes = render_to_bytes(document)?;
    write_atomic(path, &bytes)?;

    info!(bytes = bytes.len(), "PDF written");
    Ok(())
}

/// Renders `document` to an in-memory PDF.
///
/// Split out from [`render`] so callers that stream the bytes elsewhere
/// (or tests) never touch the filesystem.
pub fn render_to_bytes(document: &Document) -> RenderResult<Vec<u8>> {
    let title = format!("{} {}", document.document_type.as_str(), document.number);
    let (doc, page, layer) =
        PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);

    let fonts = Fonts::load(&doc)?;
    let height = PAGE_HEIGHT_MM / MM_PER_INCH; // page height in inches

    draw_company_header(&layer, &fonts, height);
    draw_title_block(&layer, &fonts, document, height);
    draw_client_block(&layer, &fonts, document, height);

    let mut y = height - 4.5;
    y = draw_table_header(&layer, &fonts, y);
    y = draw_items(&layer, &fonts, &document.items, y);
    draw_totals(&layer, &fonts, document, y);
    draw_footer(&layer, &fonts);

    let mut bytes = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
    }
    Ok(bytes)
}

/// The three builtin faces the page uses. Builtin Helvetica needs no
/// embedding, so load can only fail if the backend itself is broken.
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &printpdf::PdfDocumentReference) -> RenderResult<Self> {
        let load = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| RenderError::Pdf(e.to_string()))
        };
        Ok(Fonts {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
        })
    }
}

fn draw_company_header(layer: &PdfLayerReference, fonts: &Fonts, height: f64) {
    layer.use_text(COMPANY_NAME, 20.0, inches(1.0), inches(height - 1.0), &fonts.bold);
    layer.use_text(COMPANY_ADDRESS, 10.0, inches(1.0), inches(height - 1.2), &fonts.regular);
    layer.use_text(COMPANY_CONTACT, 10.0, inches(1.0), inches(height - 1.4), &fonts.regular);
}

fn draw_title_block(layer: &PdfLayerReference, fonts: &Fonts, document: &Document, height: f64) {
    let title = document.document_type.as_str().to_uppercase();
    layer.use_text(title, 18.0, inches(1.0), inches(height - 2.0), &fonts.bold);

    let number = format!("Number: {}", document.number);
    let date = format!("Date: {}", document.created_at.format("%Y-%m-%d"));
    layer.use_text(number, 10.0, inches(1.0), inches(height - 2.3), &fonts.regular);
    layer.use_text(date, 10.0, inches(1.0), inches(height - 2.5), &fonts.regular);
}

fn draw_client_block(layer: &PdfLayerReference, fonts: &Fonts, document: &Document, height: f64) {
    let client = &document.client;
    layer.use_text("BILL TO:", 12.0, inches(1.0), inches(height - 3.0), &fonts.bold);
    layer.use_text(&client.name, 10.0, inches(1.0), inches(height - 3.2), &fonts.regular);
    layer.use_text(
        client.address.as_deref().unwrap_or(""),
        10.0,
        inches(1.0),
        inches(height - 3.4),
        &fonts.regular,
    );
    let phone = format!("Phone: {}", client.phone.as_deref().unwrap_or(""));
    let email = format!("Email: {}", client.email.as_deref().unwrap_or(""));
    layer.use_text(phone, 10.0, inches(1.0), inches(height - 3.6), &fonts.regular);
    layer.use_text(email, 10.0, inches(1.0), inches(height - 3.8), &fonts.regular);
}

fn draw_table_header(layer: &PdfLayerReference, fonts: &Fonts, mut y: f64) -> f64 {
    layer.use_text("Item", 10.0, inches(COL_ITEM), inches(y), &fonts.bold);
    layer.use_text("Qty", 10.0, inches(COL_QTY), inches(y), &fonts.bold);
    layer.use_text("Unit", 10.0, inches(COL_UNIT), inches(y), &fonts.bold);
    layer.use_text("Price", 10.0, inches(COL_PRICE), inches(y), &fonts.bold);
    layer.use_text("Total", 10.0, inches(COL_TOTAL), inches(y), &fonts.bold);

    y -= 0.2;
    draw_rule(layer, COL_ITEM, TABLE_RIGHT, y);
    y - 0.3
}

fn draw_items(layer: &PdfLayerReference, fonts: &Fonts, items: &[LineItem], mut y: f64) -> f64 {
    for item in items {
        debug!(product = %item.product, "Drawing item row");
        layer.use_text(truncate_name(&item.product), 9.0, inches(COL_ITEM), inches(y), &fonts.regular);
        layer.use_text(item.quantity_label(), 9.0, inches(COL_QTY), inches(y), &fonts.regular);
        layer.use_text(item.unit.as_str(), 9.0, inches(COL_UNIT), inches(y), &fonts.regular);
        layer.use_text(
            item.unit_price().to_string(),
            9.0,
            inches(COL_PRICE),
            inches(y),
            &fonts.regular,
        );
        layer.use_text(
            item.line_total().to_string(),
            9.0,
            inches(COL_TOTAL),
            inches(y),
            &fonts.regular,
        );
        y -= 0.25;
    }
    y
}

fn draw_totals(layer: &PdfLayerReference, fonts: &Fonts, document: &Document, mut y: f64) {
    y -= 0.3;
    draw_rule(layer, 4.8, TABLE_RIGHT, y);

    y -= 0.25;
    let subtotal = format!("Subtotal: {}", document.subtotal());
    layer.use_text(subtotal, 10.0, inches(5.0), inches(y), &fonts.regular);

    y -= 0.25;
    let vat = format!("VAT (16%): {}", document.vat());
    layer.use_text(vat, 10.0, inches(5.0), inches(y), &fonts.regular);

    y -= 0.3;
    let total = format!("TOTAL: {}", document.grand_total());
    layer.use_text(total, 12.0, inches(5.0), inches(y), &fonts.bold);
}

fn draw_footer(layer: &PdfLayerReference, fonts: &Fonts) {
    layer.use_text(FOOTER_THANKS, 8.0, inches(1.0), inches(0.75), &fonts.oblique);
    layer.use_text(FOOTER_GENERATED, 8.0, inches(1.0), inches(0.55), &fonts.oblique);
}

/// Draws a horizontal rule from `x1` to `x2` inches at height `y` inches.
fn draw_rule(layer: &PdfLayerReference, x1: f64, x2: f64, y: f64) {
    let line = Line {
        points: vec![
            (Point::new(inches(x1), inches(y)), false),
            (Point::new(inches(x2), inches(y)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(line);
}

/// Narrows a product name to the fixed item column width.
fn truncate_name(name: &str) -> String {
    name.chars().take(ITEM_NAME_WIDTH).collect()
}

/// Writes `bytes` to `path` atomically: temp file in the same directory,
/// flushed, then renamed over the destination.
fn write_atomic(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    let tmp_path = temp_path_for(path);

    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        // Leave the destination untouched; drop the partial temp file
        let _ = fs::remove_file(&tmp_path);
    }

    result.map_err(RenderError::from)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quotegen_core::{ClientDetails, DocumentType, Unit};

    fn sample_document() -> Document {
        let items = vec![
            LineItem {
                product: "Cat-6 cable".into(),
                quantity: 2.0,
                unit: Unit::Set,
                unit_price_cents: 110_000,
            },
            LineItem {
                product: "Patch panel".into(),
                quantity: 1.5,
                unit: Unit::Dzn,
                unit_price_cents: 50_000,
            },
        ];
        let total: i64 = items.iter().map(|i| i.line_total().cents()).sum();
        Document {
            document_type: DocumentType::Quotation,
            number: "QTN-3FA2B91C".into(),
            client: ClientDetails {
                name: "Acme Ltd".into(),
                address: Some("Mombasa Road, Nairobi".into()),
                phone: Some("+254 700 000000".into()),
                email: None,
            },
            items,
            total_amount_cents: total,
            created_at: Utc::now(),
        }
    }

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quotegen-pdf-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_produces_pdf_file() {
        let dir = unique_temp_dir("render");
        let path = dir.join("Quotation_QTN-3FA2B91C.pdf");

        render(&sample_document(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // No temp leftovers next to the output
        assert!(!dir.join("Quotation_QTN-3FA2B91C.pdf.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_to_missing_directory_is_io_error() {
        let path = Path::new("/nonexistent-quotegen-dir/out.pdf");
        let err = render(&sample_document(), path).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_render_to_bytes_never_touches_disk() {
        let bytes = render_to_bytes(&sample_document()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_default_filename() {
        let doc = sample_document();
        assert_eq!(default_filename(&doc), "Quotation_QTN-3FA2B91C.pdf");
    }

    #[test]
    fn test_truncate_name_is_silent_and_char_aware() {
        assert_eq!(truncate_name("short"), "short");
        let long = "x".repeat(45);
        assert_eq!(truncate_name(&long).len(), 30);
        // Multi-byte chars count as one character, not one byte
        let accented = "é".repeat(40);
        assert_eq!(truncate_name(&accented).chars().count(), 30);
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let dir = unique_temp_dir("overwrite");
        let path = dir.join("doc.pdf");
        fs::write(&path, b"stale").unwrap();

        render(&sample_document(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
