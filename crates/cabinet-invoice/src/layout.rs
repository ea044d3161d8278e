//! # Page Layout Presets
//!
//! The shop prints on US Letter paper in one of two orientations. Everything
//! that depends on orientation (page size, where each column sits, where the
//! totals line up) lives here so the renderer only deals in named positions.
//!
//! ## Portrait Columns (612 x 792 pt)
//! ```text
//!  x=50    x=130          |330     |385          |455  |495    |570
//!  TYPE    ITEM    PRICE W/O DISCOUNT  UNIT $  FINAL PRICE $  QTY  TOTAL $
//!  ◄─ left   ◄─ left             right ─►  right ─► ...                ─►
//! ```
//! Numeric columns are right-aligned on the listed edge.

use serde::{Deserialize, Serialize};

/// Distance from the top edge to the first header baseline.
pub const TOP_MARGIN: f32 = 50.0;

/// Vertical step between line item rows.
pub const ROW_HEIGHT: f32 = 18.0;

/// A new page starts once the row cursor drops below this.
pub const PAGE_BREAK_Y: f32 = 100.0;

/// Nothing is drawn below this.
pub const BOTTOM_MARGIN: f32 = 36.0;

/// Vertical step between totals lines.
pub const TOTALS_LINE_HEIGHT: f32 = 15.0;

/// Gap between the last row and the rule above the totals.
pub const TOTALS_GAP: f32 = 20.0;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    #[default]
    Portrait,
    Landscape,
}

/// Horizontal positions for one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns {
    /// Left edge of the TYPE column (and of the page content).
    pub type_x: f32,
    /// Left edge of the ITEM column.
    pub item_x: f32,
    /// Right edges of the numeric columns.
    pub retail_right: f32,
    pub unit_right: f32,
    pub final_right: f32,
    pub qty_right: f32,
    pub total_right: f32,
    /// Right edge of the totals labels.
    pub label_right: f32,
    /// Left edge of the timestamp.
    pub timestamp_x: f32,
}

impl Columns {
    /// Where horizontal rules start.
    pub fn rule_start(&self) -> f32 {
        self.type_x
    }

    /// Where horizontal rules end.
    pub fn rule_end(&self) -> f32 {
        self.total_right
    }
}

impl PageLayout {
    /// Page size in points (width, height).
    pub const fn page_size(&self) -> (f32, f32) {
        match self {
            PageLayout::Portrait => (612.0, 792.0),
            PageLayout::Landscape => (792.0, 612.0),
        }
    }

    pub const fn columns(&self) -> Columns {
        match self {
            PageLayout::Portrait => Columns {
                type_x: 50.0,
                item_x: 130.0,
                retail_right: 330.0,
                unit_right: 385.0,
                final_right: 455.0,
                qty_right: 495.0,
                total_right: 570.0,
                label_right: 480.0,
                timestamp_x: 450.0,
            },
            PageLayout::Landscape => Columns {
                type_x: 40.0,
                item_x: 150.0,
                retail_right: 440.0,
                unit_right: 520.0,
                final_right: 600.0,
                qty_right: 650.0,
                total_right: 752.0,
                label_right: 650.0,
                timestamp_x: 630.0,
            },
        }
    }

    /// Baseline of the first row on a fresh page.
    pub fn top(&self) -> f32 {
        self.page_size().1 - TOP_MARGIN
    }
}
