//! # Drawing Canvas
//!
//! A small procedural surface: draw text and rules at absolute coordinates,
//! call [`Canvas::show_page`] to start the next page, then hand the finished
//! pages to [`crate::pdf`]. Each page is a list of PDF content operators.
//!
//! Every text run selects its own font, so nothing depends on graphics state
//! carried across operators or pages.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use crate::metrics::{encode_text, text_width, Font};

/// Content operators of one finished page.
pub type PageOps = Vec<Operation>;

#[derive(Debug, Default)]
pub struct Canvas {
    finished: Vec<PageOps>,
    current: PageOps,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `text` with its left edge at `x` and baseline at `y`.
    pub fn draw_text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(font.resource_name().to_vec()), real(size)],
            ),
            Operation::new("Td", vec![real(x), real(y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_text(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Draws `text` with its right edge at `right`.
    pub fn draw_right_text(&mut self, font: Font, size: f32, right: f32, y: f32, text: &str) {
        let x = right - text_width(font, text, size);
        self.draw_text(font, size, x, y, text);
    }

    /// Horizontal rule from `x1` to `x2` at height `y`.
    pub fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.current.extend([
            Operation::new("m", vec![real(x1), real(y)]),
            Operation::new("l", vec![real(x2), real(y)]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Closes the current page and starts a blank one.
    pub fn show_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.finished.push(page);
    }

    /// Pages so far, counting the one being drawn if it has content.
    pub fn page_count(&self) -> usize {
        self.finished.len() + usize::from(!self.current.is_empty())
    }

    /// All pages. A trailing blank page is dropped.
    pub fn finish(mut self) -> Vec<PageOps> {
        if !self.current.is_empty() {
            self.finished.push(self.current);
        }
        self.finished
    }
}

/// Coordinates are kept to 1/100 pt so equal layouts print equal numbers.
fn real(value: f32) -> Object {
    Object::Real((value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_run_shape() {
        let mut canvas = Canvas::new();
        canvas.draw_text(Font::Bold, 14.0, 50.0, 732.0, "Mike Renovations LLC");

        let pages = canvas.finish();
        assert_eq!(pages.len(), 1);
        let operators: Vec<&str> = pages[0].iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, ["BT", "Tf", "Td", "Tj", "ET"]);
    }

    #[test]
    fn test_right_alignment_shifts_left_by_width() {
        let mut canvas = Canvas::new();
        canvas.draw_right_text(Font::Regular, 10.0, 100.0, 700.0, "$10");

        let pages = canvas.finish();
        let td = &pages[0][2];
        assert_eq!(td.operator, "Td");
        match td.operands[0] {
            Object::Real(x) => assert!((x - 83.32).abs() < 0.01),
            ref other => panic!("unexpected operand {other:?}"),
        }
    }

    #[test]
    fn test_page_accounting() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.page_count(), 0);

        canvas.draw_rule(50.0, 570.0, 600.0);
        assert_eq!(canvas.page_count(), 1);

        canvas.show_page();
        assert_eq!(canvas.page_count(), 1);

        canvas.draw_text(Font::Regular, 9.0, 50.0, 742.0, "row");
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.finish().len(), 2);
    }

    #[test]
    fn test_trailing_blank_page_dropped() {
        let mut canvas = Canvas::new();
        canvas.draw_text(Font::Regular, 9.0, 50.0, 742.0, "row");
        canvas.show_page();
        assert_eq!(canvas.finish().len(), 1);
    }
}
