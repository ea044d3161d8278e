//! End-to-end rendering checks against the parsed PDF output.

use cabinet_core::{Cart, CatalogItem, MarkupRate, Money};
use cabinet_invoice::{BusinessInfo, InvoiceDocument, InvoiceError, InvoiceRenderer, PageLayout};
use chrono::{NaiveDate, NaiveDateTime};

fn at(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(14, minute, 0)
        .unwrap()
}

fn cart_with_rows(rows: usize) -> Cart {
    let mut cart = Cart::new();
    for i in 0..rows {
        let item = CatalogItem::new(
            "Wall Cabinets",
            format!("W{:02}30", 9 + i % 40),
            Money::from_cents(25_000),
            Money::from_cents(8_000 + i as i64),
        );
        cart.add(&item, 1 + (i as i64 % 3), MarkupRate::from_bps(3000))
            .unwrap();
    }
    cart
}

fn render(cart: &Cart, layout: PageLayout, shipping: Money, delivery: Money) -> InvoiceDocument {
    let totals = cart.totals(shipping, delivery);
    InvoiceRenderer::new(layout)
        .render(cart.items(), &totals, &BusinessInfo::default(), at(30))
        .unwrap()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

fn parsed_pages(doc: &InvoiceDocument) -> usize {
    lopdf::Document::load_mem(&doc.bytes)
        .unwrap()
        .get_pages()
        .len()
}

#[test]
fn reference_invoice_content() {
    let mut cart = Cart::new();
    let b12 = CatalogItem::new(
        "Base",
        "B12",
        Money::from_cents(30_000),
        Money::from_cents(10_000),
    );
    cart.add(&b12, 2, MarkupRate::from_bps(3000)).unwrap();

    let doc = render(&cart, PageLayout::Portrait, Money::from_dollars(100), Money::zero());

    assert_eq!(doc.page_count, 1);
    assert_eq!(parsed_pages(&doc), 1);
    assert_eq!(doc.mime_type(), "application/pdf");
    assert_eq!(doc.filename, "invoice.pdf");

    for needle in [
        &b"(Mike Renovations LLC)"[..],
        b"(Phone: 239-200-5772)",
        b"(Email: contact@mikerenovations.com)",
        b"(2025-06-01 14:30)",
        b"(B12)",
        b"($130.00)",
        b"($260.00)",
        b"-$340.00",
        b"($16.90)",
        b"($376.90)",
        b"(PRICE W/O DISCOUNT)",
        b"(FINAL PRICE $)",
        b"(Subtotal (with discount):)",
        b"(Final Total:)",
    ] {
        assert!(
            contains(&doc.bytes, needle),
            "missing {}",
            String::from_utf8_lossy(needle)
        );
    }
    assert_eq!(count(&doc.bytes, b"(FREE)"), 1);
}

#[test]
fn zero_fees_print_free() {
    let cart = cart_with_rows(3);
    let doc = render(&cart, PageLayout::Portrait, Money::zero(), Money::zero());
    assert_eq!(count(&doc.bytes, b"(FREE)"), 2);

    let doc = render(
        &cart,
        PageLayout::Portrait,
        Money::from_dollars(200),
        Money::from_dollars(400),
    );
    assert_eq!(count(&doc.bytes, b"(FREE)"), 0);
    assert!(contains(&doc.bytes, b"($400.00)"));
}

#[test]
fn portrait_pagination() {
    // Page one holds 27 rows plus the totals block
    let doc = render(&cart_with_rows(27), PageLayout::Portrait, Money::zero(), Money::zero());
    assert_eq!(doc.page_count, 1);

    // One more row pushes the totals onto a second page
    let doc = render(&cart_with_rows(28), PageLayout::Portrait, Money::zero(), Money::zero());
    assert_eq!(doc.page_count, 2);
    assert_eq!(parsed_pages(&doc), 2);

    // 31 rows on page one, 36 per continuation page, totals on their own page
    let doc = render(&cart_with_rows(100), PageLayout::Portrait, Money::zero(), Money::zero());
    assert_eq!(doc.page_count, 4);
    assert_eq!(parsed_pages(&doc), 4);
}

#[test]
fn landscape_pagination() {
    let doc = render(&cart_with_rows(17), PageLayout::Landscape, Money::zero(), Money::zero());
    assert_eq!(doc.page_count, 1);

    let doc = render(&cart_with_rows(18), PageLayout::Landscape, Money::zero(), Money::zero());
    assert_eq!(doc.page_count, 2);
    assert_eq!(parsed_pages(&doc), 2);
}

#[test]
fn header_not_repeated_on_continuation_pages() {
    let doc = render(&cart_with_rows(60), PageLayout::Portrait, Money::zero(), Money::zero());
    assert!(doc.page_count >= 2);
    assert_eq!(count(&doc.bytes, b"(Mike Renovations LLC)"), 1);
    assert_eq!(count(&doc.bytes, b"(TOTAL $)"), 1);
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let cart = cart_with_rows(40);
    let totals = cart.totals(Money::from_dollars(100), Money::from_dollars(300));
    let renderer = InvoiceRenderer::new(PageLayout::Landscape);
    let business = BusinessInfo::default();

    let first = renderer
        .render(cart.items(), &totals, &business, at(30))
        .unwrap();
    let second = renderer
        .render(cart.items(), &totals, &business, at(30))
        .unwrap();
    assert_eq!(first.bytes, second.bytes);

    let later = renderer
        .render(cart.items(), &totals, &business, at(31))
        .unwrap();
    assert_ne!(first.bytes, later.bytes);
}

#[test]
fn long_and_non_ascii_names() {
    let mut cart = Cart::new();
    let item = CatalogItem::new(
        "Vanity",
        "Café Vanity 48in Shaker White With Drawers",
        Money::from_cents(90_000),
        Money::from_cents(40_000),
    );
    cart.add(&item, 1, MarkupRate::zero()).unwrap();

    let doc = render(&cart, PageLayout::Portrait, Money::zero(), Money::zero());
    // WinAnsi keeps the accented letter as a single byte
    assert!(contains(&doc.bytes, b"(Caf\xe9 Vanity 48in Shaker White )"));
    assert!(!contains(&doc.bytes, b"Drawers"));
}

#[test]
fn unmappable_characters_fall_back_to_question_mark() {
    let mut cart = Cart::new();
    let item = CatalogItem::new(
        "Vanity",
        "Łódź Vanity \u{2014} 36in",
        Money::from_cents(90_000),
        Money::from_cents(40_000),
    );
    cart.add(&item, 1, MarkupRate::zero()).unwrap();

    let doc = render(&cart, PageLayout::Portrait, Money::zero(), Money::zero());
    // Em dash is in WinAnsi (0x97); the Polish letters outside Latin-1 are not
    assert!(contains(&doc.bytes, b"(?\xf3d? Vanity \x97 36in)"));
}

#[test]
fn custom_business_details() {
    let cart = cart_with_rows(1);
    let totals = cart.totals(Money::zero(), Money::zero());
    let business = BusinessInfo::new("Gulf Coast Cabinets", "555-0100", "sales@example.com");
    let doc = InvoiceRenderer::default()
        .render(cart.items(), &totals, &business, at(0))
        .unwrap();

    assert!(contains(&doc.bytes, b"(Gulf Coast Cabinets)"));
    assert!(contains(&doc.bytes, b"(Phone: 555-0100)"));
    assert!(!contains(&doc.bytes, b"Mike Renovations"));
}

#[test]
fn empty_cart_is_refused() {
    let cart = Cart::new();
    let totals = cart.totals(Money::from_dollars(100), Money::zero());
    let err = InvoiceRenderer::default()
        .render(cart.items(), &totals, &BusinessInfo::default(), at(0))
        .unwrap_err();
    assert!(matches!(err, InvoiceError::EmptyCart));
    assert_eq!(err.to_string(), "Your cart is empty!");
}
