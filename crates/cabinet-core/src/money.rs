//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Spreadsheet prices arrive as floats:                                   │
//! │    129.99 * 1.3 = 168.98700000000002                                    │
//! │                                                                         │
//! │  Summing a cart of float line totals drifts by fractions of a cent,     │
//! │  and the invoice shows a total that doesn't match its rows.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Parse once at the boundary, round ONCE per rule, add exactly.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cabinet_core::money::Money;
//!
//! let price = Money::from_cents(12_999); // $129.99
//! let parsed: Money = "$1,299.90".parse().unwrap();
//! assert_eq!(parsed.cents(), 129_990);
//! assert_eq!((price * 2).to_string(), "$259.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{MarkupRate, TaxRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: savings can go negative when markup exceeds discount
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CatalogItem.base_price ──► with_markup() ──► LineItem.final_unit_price │
/// │                                                     │                   │
/// │                                        × quantity ──► LineItem.line_total│
/// │                                                     │                   │
/// │  Σ line_total ──► subtotal ──► calculate_tax() ──► grand_total          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// Fees are configured in whole dollars (`100` = $100.00).
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax on this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::money::Money;
    /// use cabinet_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(26_000); // $260.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(650));
    /// assert_eq!(tax.cents(), 1_690); // $16.90
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money::from_cents(scale_bps(self.0, i128::from(rate.bps())))
    }

    /// Returns this amount raised by a markup, rounded half-up to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::money::Money;
    /// use cabinet_core::types::MarkupRate;
    ///
    /// let base = Money::from_cents(10_000); // $100.00
    /// let marked_up = base.with_markup(MarkupRate::from_bps(3000)); // +30%
    /// assert_eq!(marked_up.cents(), 13_000);
    /// ```
    pub fn with_markup(&self, rate: MarkupRate) -> Money {
        Money::from_cents(scale_bps(self.0, 10_000 + i128::from(rate.bps())))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(13_000);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 26_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// `amount * bps / 10000`, rounded half away from zero.
///
/// i128 keeps large carts from overflowing the intermediate product.
fn scale_bps(amount_cents: i64, bps: i128) -> i64 {
    let product = i128::from(amount_cents) * bps;
    let rounded = if product >= 0 {
        (product + 5000) / 10000
    } else {
        (product - 5000) / 10000
    };
    rounded as i64
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal dollar amount as found in the price spreadsheet.
///
/// Accepts an optional sign, an optional `$`, thousands separators and any
/// number of decimals (rounded half-up to the cent): `129.99`, `$1,299.9`,
/// `168.98700000000002`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("empty amount"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid(&format!("'{}' is not a dollar amount", trimmed)));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|dollars| dollars.checked_mul(100))
                .ok_or_else(|| invalid("amount too large"))?
        };

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().map_or(false, |d| d >= 5);

        let cents = whole_cents + tenths * 10 + hundredths + i64::from(round_up);
        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Invoice format: `$` prefix and exactly two decimals (`$1234.50`, `-$5.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
