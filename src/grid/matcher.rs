//! Content predicates for the four semantic fields.
//!
//! Each predicate answers whether a normalized cell value plausibly belongs
//! to its field. The predicates are independent and a single value may
//! satisfy several at once; exclusivity is never enforced at this layer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// Plausible model year range.
const YEAR_MIN: u32 = 1900;
const YEAR_MAX: u32 = 2100;

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}$").expect("Hardcode regex pattern"));
static VIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{16,}$").expect("Hardcode regex pattern"));
static MAKE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,}$").expect("Hardcode regex pattern"));
static CURRENCY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$?[\d,]+(\.\d+)?$").expect("Hardcode regex pattern"));
static DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("Hardcode regex pattern"));

/// The four semantic fields the engine locates in an input grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Year,
    Make,
    Vin,
    Cost,
}

impl Field {
    /// All fields in resolution order.
    pub(crate) const ALL: [Field; 4] = [Field::Year, Field::Make, Field::Vin, Field::Cost];

    /// Tests whether a normalized cell value plausibly belongs to this field.
    pub fn matches(self, value: &str) -> bool {
        match self {
            Field::Year => is_year(value),
            Field::Make => is_make(value),
            Field::Vin => is_vin(value),
            Field::Cost => is_cost(value),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Year => "Year",
            Field::Make => "Make",
            Field::Vin => "VIN",
            Field::Cost => "Cost",
        };
        write!(f, "{}", label)
    }
}

/// Exactly four decimal digits within the plausible model year range.
pub(crate) fn is_year(value: &str) -> bool {
    YEAR_PATTERN.is_match(value)
        && value
            .parse::<u32>()
            .map_or(false, |year| (YEAR_MIN..=YEAR_MAX).contains(&year))
}

/// At least 16 alphanumeric characters with no spaces or punctuation.
pub(crate) fn is_vin(value: &str) -> bool {
    VIN_PATTERN.is_match(value)
}

/// Alphabetic only, at least two characters (VOLVO, Ford, ...).
pub(crate) fn is_make(value: &str) -> bool {
    MAKE_PATTERN.is_match(value)
}

/// Currency-shaped values ($ sign, thousands commas, decimal fraction), or a
/// bare digit run longer than four characters. A bare digit run is judged by
/// length alone so that short counters and quantities never read as money.
pub(crate) fn is_cost(value: &str) -> bool {
    if DIGITS_PATTERN.is_match(value) {
        return value.len() > 4;
    }
    CURRENCY_PATTERN.is_match(value)
}
