//! Fixed-point place-value arithmetic.
//!
//! Decimal boards cap at three decimal places, so every representable
//! value is an exact number of thousandths. `PlaceValue` stores an `i64`
//! count of thousandths, which keeps decimal sums exact and lets the
//! judge compare with plain `==` - no floating-point drift, no epsilon.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::core::BoardConfig;

/// Scale factor: `PlaceValue` counts thousandths.
const MILLIS_PER_UNIT: i64 = 1000;

/// Exact fixed-point value of a completed hand.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlaceValue(i64);

impl PlaceValue {
    /// Zero, the value of any incomplete hand.
    pub const ZERO: PlaceValue = PlaceValue(0);

    /// Construct from a raw count of thousandths.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw count of thousandths.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Whole-number part.
    #[must_use]
    pub const fn whole_part(self) -> i64 {
        self.0 / MILLIS_PER_UNIT
    }

    /// Fractional part as thousandths, in `0..1000`.
    #[must_use]
    pub const fn frac_millis(self) -> i64 {
        self.0 % MILLIS_PER_UNIT
    }

    /// Lossy conversion for hosts that want a plain number.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / MILLIS_PER_UNIT as f64
    }

    /// Render with exactly `decimal_places` digits after the point
    /// (none when `decimal_places` is 0).
    #[must_use]
    pub fn format(self, decimal_places: usize) -> String {
        if decimal_places == 0 {
            return self.whole_part().to_string();
        }
        let frac = format!("{:03}", self.frac_millis());
        format!("{}.{}", self.whole_part(), &frac[..decimal_places.min(3)])
    }
}

impl std::fmt::Display for PlaceValue {
    /// Shortest exact rendering: fraction shown only when nonzero,
    /// trailing zeros trimmed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.frac_millis() == 0 {
            return write!(f, "{}", self.whole_part());
        }
        let frac = format!("{:03}", self.frac_millis());
        write!(f, "{}.{}", self.whole_part(), frac.trim_end_matches('0'))
    }
}

/// Positional weight of a slot, in thousandths.
///
/// Slot `i` left-to-right: whole slots weigh `10^(w-1-i)`, the first
/// decimal slot weighs a tenth, then hundredths, then thousandths.
#[must_use]
pub fn slot_weight_millis(config: &BoardConfig, slot: usize) -> i64 {
    debug_assert!(slot < config.total_slots(), "slot out of range: {slot}");
    if slot < config.whole_digit_count {
        let power = (config.whole_digit_count - 1 - slot) as u32;
        10i64.pow(power) * MILLIS_PER_UNIT
    } else {
        let depth = (slot - config.whole_digit_count + 1) as u32;
        MILLIS_PER_UNIT / 10i64.pow(depth)
    }
}

/// Numeric value of a hand under the board's place-value weights.
///
/// Only slotted cards contribute; an incomplete hand yields zero by
/// convention (never an error - the host gates calculation on
/// completeness).
#[must_use]
pub fn hand_value(hand: &Hand, config: &BoardConfig) -> PlaceValue {
    if !hand.is_complete(config.total_slots()) {
        return PlaceValue::ZERO;
    }
    let millis = (0..config.total_slots())
        .filter_map(|slot| {
            hand.card_in_slot(slot)
                .map(|card| i64::from(card.digit) * slot_weight_millis(config, slot))
        })
        .sum();
    PlaceValue::from_millis(millis)
}

/// Sum-of-place-values rendering of a hand, e.g. `"500 + 8"` or
/// `"10 + 2 + 0.3 + 0.04"`.
///
/// Zero-value terms are omitted, slot order is preserved, and an
/// all-zero (or incomplete) hand renders `"0"`.
#[must_use]
pub fn expanded_notation(hand: &Hand, config: &BoardConfig) -> String {
    let terms: Vec<String> = (0..config.total_slots())
        .filter_map(|slot| {
            let card = hand.card_in_slot(slot)?;
            if card.digit == 0 {
                return None;
            }
            let term = PlaceValue::from_millis(
                i64::from(card.digit) * slot_weight_millis(config, slot),
            );
            Some(term.to_string())
        })
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

/// Place-name label for each slot, left-to-right, for the host to
/// render under the board.
#[must_use]
pub fn slot_labels(config: &BoardConfig) -> Vec<&'static str> {
    const WHOLE: [&str; 5] = ["ones", "tens", "hundreds", "thousands", "ten thousands"];
    const DECIMAL: [&str; 3] = ["tenths", "hundredths", "thousandths"];

    (0..config.total_slots())
        .map(|slot| {
            if slot < config.whole_digit_count {
                WHOLE[config.whole_digit_count - 1 - slot]
            } else {
                DECIMAL[slot - config.whole_digit_count]
            }
        })
        .collect()
}
