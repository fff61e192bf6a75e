//! Per-category running statistics.
//!
//! Each [`AggregationState`] owns the lines routed to one category plus the
//! running min/max/sum for it. Integers are summed as [`BigInt`], decimals as
//! [`BigDecimal`], so no rounding happens during accumulation. Strings are
//! compared by length and have no sum.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use tracing::warn;

use crate::models::{Category, ParsedLine, StatValue};

// ── Accumulators ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct NumericStats<T> {
    sum: T,
    min: Option<T>,
    max: Option<T>,
    average: Option<BigDecimal>,
}

impl<T: Zero> NumericStats<T> {
    fn new() -> Self {
        Self {
            sum: T::zero(),
            min: None,
            max: None,
            average: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LengthStats {
    min: Option<usize>,
    max: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Accumulator {
    Integer(NumericStats<BigInt>),
    Float(NumericStats<BigDecimal>),
    String(LengthStats),
}

/// Replace `min`/`max` only on strict improvement; the first value seen
/// initialises both. Equal values keep the earlier one.
fn update_extremes<T: Ord + Clone>(min: &mut Option<T>, max: &mut Option<T>, value: &T) {
    if min.as_ref().map_or(true, |current| value < current) {
        *min = Some(value.clone());
    }
    if max.as_ref().map_or(true, |current| value > current) {
        *max = Some(value.clone());
    }
}

/// `floor(sum / count)` kept at the scale of `sum`.
///
/// Rounds toward negative infinity, so `-25 / 2` gives `-13`. Returns `None`
/// for an empty category instead of dividing by zero.
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use sorter_core::statistics::floor_average;
///
/// let avg = floor_average(&BigDecimal::from(25), 2).unwrap();
/// assert_eq!(avg, BigDecimal::from(12));
///
/// let avg = floor_average(&BigDecimal::from_str("10.01").unwrap(), 3).unwrap();
/// assert_eq!(avg, BigDecimal::from_str("3.33").unwrap());
///
/// assert!(floor_average(&BigDecimal::from(0), 0).is_none());
/// ```
pub fn floor_average(sum: &BigDecimal, count: usize) -> Option<BigDecimal> {
    if count == 0 {
        return None;
    }
    let (mantissa, scale) = sum.as_bigint_and_exponent();
    let quotient = mantissa.div_floor(&BigInt::from(count));
    Some(BigDecimal::new(quotient, scale))
}

// ── AggregationState ──────────────────────────────────────────────────────────

/// Lines and statistics collected for one [`Category`].
///
/// Starts out accumulating; [`finalize`](Self::finalize) computes the average
/// once and freezes the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationState {
    category: Category,
    lines: Vec<String>,
    accumulator: Accumulator,
    finalized: bool,
}

impl AggregationState {
    /// Empty state with a zero sum and no min/max.
    pub fn new(category: Category) -> Self {
        let accumulator = match category {
            Category::Integer => Accumulator::Integer(NumericStats::new()),
            Category::Float => Accumulator::Float(NumericStats::new()),
            Category::String => Accumulator::String(LengthStats::default()),
        };
        Self {
            category,
            lines: Vec::new(),
            accumulator,
            finalized: false,
        }
    }

    /// Append `line` and fold `parsed` into the running statistics.
    ///
    /// `parsed` must belong to this state's category and the state must not be
    /// finalized; either violation leaves the state untouched.
    pub fn record(&mut self, line: impl Into<String>, parsed: &ParsedLine) {
        debug_assert!(!self.finalized, "record called after finalize");
        debug_assert_eq!(parsed.category(), self.category, "line routed to wrong category");
        if self.finalized {
            warn!("ignoring line recorded into finalized {} state", self.category);
            return;
        }

        match (&mut self.accumulator, parsed) {
            (Accumulator::Integer(stats), ParsedLine::Integer(value)) => {
                stats.sum = &stats.sum + value;
                update_extremes(&mut stats.min, &mut stats.max, value);
            }
            (Accumulator::Float(stats), ParsedLine::Float(value)) => {
                stats.sum = &stats.sum + value;
                update_extremes(&mut stats.min, &mut stats.max, value);
            }
            (Accumulator::String(stats), ParsedLine::Text(length)) => {
                update_extremes(&mut stats.min, &mut stats.max, length);
            }
            _ => {
                warn!(
                    "ignoring {} line recorded into {} state",
                    parsed.category(),
                    self.category
                );
                return;
            }
        }
        self.lines.push(line.into());
    }

    /// Compute the average for numeric categories. Only the first call has an
    /// effect.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        let count = self.lines.len();
        match &mut self.accumulator {
            Accumulator::Integer(stats) => {
                // Integer averages are reported as decimals.
                let widened = BigDecimal::new(stats.sum.clone(), 0);
                stats.average = floor_average(&widened, count);
            }
            Accumulator::Float(stats) => {
                stats.average = floor_average(&stats.sum, count);
            }
            Accumulator::String(_) => {}
        }
        self.finalized = true;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Lines in the order they were recorded, verbatim.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Smallest value seen; line length for strings.
    pub fn min(&self) -> Option<StatValue> {
        match &self.accumulator {
            Accumulator::Integer(s) => s.min.clone().map(StatValue::Integer),
            Accumulator::Float(s) => s.min.clone().map(StatValue::Decimal),
            Accumulator::String(s) => s.min.map(StatValue::Length),
        }
    }

    /// Largest value seen; line length for strings.
    pub fn max(&self) -> Option<StatValue> {
        match &self.accumulator {
            Accumulator::Integer(s) => s.max.clone().map(StatValue::Integer),
            Accumulator::Float(s) => s.max.clone().map(StatValue::Decimal),
            Accumulator::String(s) => s.max.map(StatValue::Length),
        }
    }

    /// Exact sum for numeric categories (zero when empty), `None` for strings.
    pub fn sum(&self) -> Option<StatValue> {
        match &self.accumulator {
            Accumulator::Integer(s) => Some(StatValue::Integer(s.sum.clone())),
            Accumulator::Float(s) => Some(StatValue::Decimal(s.sum.clone())),
            Accumulator::String(_) => None,
        }
    }

    /// Floor average; `None` before finalize, for empty categories, and for
    /// strings.
    pub fn average(&self) -> Option<&BigDecimal> {
        match &self.accumulator {
            Accumulator::Integer(s) => s.average.as_ref(),
            Accumulator::Float(s) => s.average.as_ref(),
            Accumulator::String(_) => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
