//! Glyph widths of the two base-14 fonts the invoice uses.
//!
//! Right-aligned columns need the rendered width of each string. The widths
//! below are the Adobe Helvetica and Helvetica-Bold metrics for the printable
//! WinAnsi range, in 1/1000 em. Characters WinAnsi cannot express are drawn
//! as `?` (see [`encode_text`]) and measured as such.

/// Fonts registered in every invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used inside content streams.
    pub const fn resource_name(&self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
        }
    }

    /// PostScript name of the base-14 font.
    pub const fn base_font(&self) -> &'static [u8] {
        match self {
            Font::Regular => b"Helvetica",
            Font::Bold => b"Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 224] {
        match self {
            Font::Regular => &HELVETICA_WIDTHS,
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

// WinAnsi codes 32..=255; zero marks codes with no glyph
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Characters WinAnsi places in 0x80..=0x9F.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20ac}', 0x80), ('\u{201a}', 0x82), ('\u{0192}', 0x83), ('\u{201e}', 0x84),
    ('\u{2026}', 0x85), ('\u{2020}', 0x86), ('\u{2021}', 0x87), ('\u{02c6}', 0x88),
    ('\u{2030}', 0x89), ('\u{0160}', 0x8a), ('\u{2039}', 0x8b), ('\u{0152}', 0x8c),
    ('\u{017d}', 0x8e), ('\u{2018}', 0x91), ('\u{2019}', 0x92), ('\u{201c}', 0x93),
    ('\u{201d}', 0x94), ('\u{2022}', 0x95), ('\u{2013}', 0x96), ('\u{2014}', 0x97),
    ('\u{02dc}', 0x98), ('\u{2122}', 0x99), ('\u{0161}', 0x9a), ('\u{203a}', 0x9b),
    ('\u{0153}', 0x9c), ('\u{017e}', 0x9e), ('\u{0178}', 0x9f),
];

/// WinAnsi code for `c`, if the encoding has one.
pub fn encode_char(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(c)).ok(),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, code)| *code),
    }
}

/// Bytes drawn for `text` in WinAnsi. Characters outside the encoding
/// (control characters, CJK, most of Latin Extended) become `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars().map(|c| encode_char(c).unwrap_or(b'?')).collect()
}

/// Width in points of `text` set in `font` at `size`.
///
/// ## Example
/// ```rust
/// use cabinet_invoice::metrics::{text_width, Font};
///
/// // Every digit and "$" is 556/1000 em in Helvetica
/// assert!((text_width(Font::Regular, "$10", 10.0) - 16.68).abs() < 0.001);
/// ```
pub fn text_width(font: Font, text: &str, size: f32) -> f32 {
    let widths = font.widths();
    let units: u32 = encode_text(text)
        .iter()
        .map(|b| u32::from(widths[usize::from(*b) - 32]))
        .sum();
    units as f32 * size / 1000.0
}
