//! # Invoice Renderer
//!
//! Draws the invoice top to bottom with a single cursor `y`:
//!
//! ```text
//!  y = height - 50     business name / phone / email
//!  y -= 30             generation timestamp (right side)
//!  y -= 30             column headers
//!  y -= 15             rule
//!  y -= 15             first row
//!  ...                 one row per line item, y -= 18 after each;
//!                      y < 100 → new page, y = height - 50
//!  y -= 20             rule, then seven 15pt totals lines
//! ```
//!
//! Continuation pages carry rows only. When the totals block does not fit
//! above the bottom margin it moves to a fresh page.

use cabinet_core::{InvoiceTotals, LineItem, Money, INVOICE_NAME_MAX_CHARS, SALES_TAX_RATE};
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::business::BusinessInfo;
use crate::canvas::Canvas;
use crate::document::InvoiceDocument;
use crate::error::{InvoiceError, InvoiceResult};
use crate::layout::{
    Columns, PageLayout, BOTTOM_MARGIN, PAGE_BREAK_Y, ROW_HEIGHT, TOTALS_GAP,
    TOTALS_LINE_HEIGHT,
};
use crate::metrics::Font;
use crate::pdf::{self, DocumentInfo};
use crate::{DEFAULT_FILENAME, TIMESTAMP_FORMAT};

const NAME_SIZE: f32 = 14.0;
const CONTACT_SIZE: f32 = 10.0;
const TIMESTAMP_SIZE: f32 = 9.0;
const HEADER_SIZE: f32 = 9.0;
const ROW_SIZE: f32 = 9.0;
const TOTALS_SIZE: f32 = 10.0;

const TOTALS_LINES: usize = 7;

/// Renders carts into PDF invoices for one page layout.
///
/// ## Example
/// ```rust
/// use cabinet_core::{Cart, CatalogItem, MarkupRate, Money};
/// use cabinet_invoice::{BusinessInfo, InvoiceRenderer, PageLayout};
/// use chrono::NaiveDate;
///
/// let item = CatalogItem::new("Base", "B12", Money::from_cents(30000), Money::from_cents(10000));
/// let mut cart = Cart::new();
/// cart.add(&item, 2, MarkupRate::from_bps(3000)).unwrap();
/// let totals = cart.totals(Money::from_dollars(100), Money::zero());
///
/// let at = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
/// let doc = InvoiceRenderer::new(PageLayout::Portrait)
///     .render(cart.items(), &totals, &BusinessInfo::default(), at)
///     .unwrap();
/// assert_eq!(doc.page_count, 1);
/// assert_eq!(doc.filename, "invoice.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceRenderer {
    layout: PageLayout,
    filename: String,
}

impl InvoiceRenderer {
    pub fn new(layout: PageLayout) -> Self {
        InvoiceRenderer {
            layout,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Overrides the suggested download name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// Renders `items` and `totals` as a paginated invoice.
    ///
    /// `timestamp` is printed in the header and stored as the creation date;
    /// identical arguments give identical bytes.
    pub fn render(
        &self,
        items: &[LineItem],
        totals: &InvoiceTotals,
        business: &BusinessInfo,
        timestamp: NaiveDateTime,
    ) -> InvoiceResult<InvoiceDocument> {
        if items.is_empty() {
            return Err(InvoiceError::EmptyCart);
        }

        let (width, height) = self.layout.page_size();
        let columns = self.layout.columns();
        let mut canvas = Canvas::new();

        let mut y = self.layout.top();
        self.draw_header(&mut canvas, &columns, business, timestamp, &mut y);

        for item in items {
            draw_row(&mut canvas, &columns, item, y);
            y -= ROW_HEIGHT;
            if y < PAGE_BREAK_Y {
                canvas.show_page();
                y = self.layout.top();
                debug!(page = canvas.page_count() + 1, "Continuing rows on new page");
            }
        }

        let block_height = TOTALS_GAP + TOTALS_LINE_HEIGHT * TOTALS_LINES as f32;
        if y - block_height < BOTTOM_MARGIN {
            canvas.show_page();
            y = self.layout.top();
            debug!("Totals moved to new page");
        }
        draw_totals(&mut canvas, &columns, totals, y);

        let pages = canvas.finish();
        let page_count = pages.len();
        let bytes = pdf::assemble(
            pages,
            width,
            height,
            &DocumentInfo {
                title: "Invoice",
                created: timestamp,
            },
        )?;

        info!(
            layout = ?self.layout,
            items = items.len(),
            pages = page_count,
            grand_total = %totals.grand_total,
            "Invoice rendered"
        );

        Ok(InvoiceDocument {
            bytes,
            page_count,
            filename: self.filename.clone(),
        })
    }

    fn draw_header(
        &self,
        canvas: &mut Canvas,
        columns: &Columns,
        business: &BusinessInfo,
        timestamp: NaiveDateTime,
        y: &mut f32,
    ) {
        let left = columns.type_x;
        canvas.draw_text(Font::Bold, NAME_SIZE, left, *y - 10.0, &business.name);
        canvas.draw_text(Font::Regular, CONTACT_SIZE, left, *y - 25.0, &business.phone_line());
        canvas.draw_text(Font::Regular, CONTACT_SIZE, left, *y - 40.0, &business.email_line());

        *y -= 30.0;
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        canvas.draw_text(Font::Regular, TIMESTAMP_SIZE, columns.timestamp_x, *y, &stamp);

        *y -= 30.0;
        canvas.draw_text(Font::Bold, HEADER_SIZE, columns.type_x, *y, "TYPE");
        canvas.draw_text(Font::Bold, HEADER_SIZE, columns.item_x, *y, "ITEM");
        for (right, label) in numeric_headers(columns) {
            canvas.draw_right_text(Font::Bold, HEADER_SIZE, right, *y, label);
        }

        *y -= 15.0;
        canvas.draw_rule(columns.rule_start(), columns.rule_end(), *y);
        *y -= 15.0;
    }
}

impl Default for InvoiceRenderer {
    fn default() -> Self {
        InvoiceRenderer::new(PageLayout::default())
    }
}

/// Right edge and label of each numeric column header.
fn numeric_headers(columns: &Columns) -> [(f32, &'static str); 5] {
    [
        (columns.retail_right, "PRICE W/O DISCOUNT"),
        (columns.unit_right, "UNIT $"),
        (columns.final_right, "FINAL PRICE $"),
        (columns.qty_right, "QTY"),
        (columns.total_right, "TOTAL $"),
    ]
}

fn draw_row(canvas: &mut Canvas, columns: &Columns, item: &LineItem, y: f32) {
    canvas.draw_text(Font::Regular, ROW_SIZE, columns.type_x, y, &item.item_type);
    canvas.draw_text(Font::Regular, ROW_SIZE, columns.item_x, y, &truncate_name(&item.name));

    let quantity = item.quantity.to_string();
    for (right, text) in [
        (columns.retail_right, item.retail_price.to_string()),
        (columns.unit_right, item.base_price.to_string()),
        (columns.final_right, item.final_unit_price.to_string()),
        (columns.qty_right, quantity),
        (columns.total_right, item.line_total.to_string()),
    ] {
        canvas.draw_right_text(Font::Regular, ROW_SIZE, right, y, &text);
    }
}

fn draw_totals(canvas: &mut Canvas, columns: &Columns, totals: &InvoiceTotals, mut y: f32) {
    y -= TOTALS_GAP;
    canvas.draw_rule(columns.rule_start(), columns.rule_end(), y);

    for (label, value) in totals_lines(totals) {
        y -= TOTALS_LINE_HEIGHT;
        canvas.draw_right_text(Font::Bold, TOTALS_SIZE, columns.label_right, y, &label);
        canvas.draw_right_text(Font::Bold, TOTALS_SIZE, columns.total_right, y, &value);
    }
}

/// Label and value of each totals line, top to bottom.
pub fn totals_lines(totals: &InvoiceTotals) -> [(String, String); TOTALS_LINES] {
    [
        ("Price Without Discount:".into(), totals.retail_total.to_string()),
        ("You Save:".into(), format_savings(totals.total_savings)),
        ("Subtotal (with discount):".into(), totals.subtotal.to_string()),
        (
            format!("Tax ({}%):", SALES_TAX_RATE.percentage()),
            totals.tax.to_string(),
        ),
        ("Shipping:".into(), format_fee(totals.shipping_fee)),
        ("Delivery:".into(), format_fee(totals.delivery_fee)),
        ("Final Total:".into(), totals.grand_total.to_string()),
    ]
}

/// A fee of zero prints as `FREE`.
pub fn format_fee(fee: Money) -> String {
    if fee.is_zero() {
        "FREE".to_string()
    } else {
        fee.to_string()
    }
}

/// Savings print negated in parentheses: `(-$340.00)`.
pub fn format_savings(savings: Money) -> String {
    format!("({})", -savings)
}

/// First [`INVOICE_NAME_MAX_CHARS`] characters of an item name.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(INVOICE_NAME_MAX_CHARS).collect()
}
