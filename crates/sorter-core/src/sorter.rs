//! The classify-and-aggregate pass.

use tracing::{debug, trace};

use crate::classifier::classify;
use crate::models::Category;
use crate::statistics::AggregationState;

// ── SortingReport ─────────────────────────────────────────────────────────────

/// Finalized statistics for all three categories, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingReport {
    states: [AggregationState; 3],
}

impl SortingReport {
    fn slot(category: Category) -> usize {
        match category {
            Category::Integer => 0,
            Category::Float => 1,
            Category::String => 2,
        }
    }

    pub fn get(&self, category: Category) -> &AggregationState {
        &self.states[Self::slot(category)]
    }

    /// States in output order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = &AggregationState> {
        self.states.iter()
    }

    /// States that received at least one line.
    pub fn non_empty(&self) -> impl Iterator<Item = &AggregationState> {
        self.states.iter().filter(|s| !s.is_empty())
    }

    pub fn total_lines(&self) -> usize {
        self.states.iter().map(AggregationState::count).sum()
    }
}

// ── LineSorter ────────────────────────────────────────────────────────────────

/// Stateless driver for the single linear classification pass.
pub struct LineSorter;

impl LineSorter {
    /// Classify every line, route it to its category and finalize the
    /// statistics once the input is exhausted.
    ///
    /// Lines keep their input order inside each category. Running the pass
    /// twice over the same input yields identical reports.
    pub fn sort<I, S>(lines: I) -> SortingReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut states = Category::ALL.map(AggregationState::new);

        for line in lines {
            let line = line.into();
            let parsed = classify(&line);
            let category = parsed.category();
            trace!("{category}: {line:?}");
            states[SortingReport::slot(category)].record(line, &parsed);
        }

        for state in &mut states {
            state.finalize();
        }

        debug!(
            "Sorted lines: {} integers, {} floats, {} strings",
            states[0].count(),
            states[1].count(),
            states[2].count()
        );

        SortingReport { states }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatValue;
    use bigdecimal::BigDecimal;
    use num_bigint::BigInt;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mixed_input() {
        let report = LineSorter::sort(["42", "-17", "3.14", "hello", "  7  "]);

        let ints = report.get(Category::Integer);
        assert_eq!(ints.lines(), ["42", "-17"]);
        assert_eq!(ints.sum(), Some(StatValue::Integer(BigInt::from(25))));
        assert_eq!(ints.min(), Some(StatValue::Integer(BigInt::from(-17))));
        assert_eq!(ints.max(), Some(StatValue::Integer(BigInt::from(42))));
        assert_eq!(ints.average(), Some(&BigDecimal::from(12)));

        let floats = report.get(Category::Float);
        assert_eq!(floats.lines(), ["3.14"]);
        assert_eq!(floats.sum(), Some(StatValue::Decimal(dec("3.14"))));
        assert_eq!(floats.min(), Some(StatValue::Decimal(dec("3.14"))));
        assert_eq!(floats.max(), Some(StatValue::Decimal(dec("3.14"))));
        assert_eq!(floats.average(), Some(&dec("3.14")));

        let strings = report.get(Category::String);
        assert_eq!(strings.lines(), ["hello", "  7  "]);
        assert_eq!(strings.min(), Some(StatValue::Length(5)));
        assert_eq!(strings.max(), Some(StatValue::Length(5)));
        assert_eq!(strings.sum(), None);
        assert_eq!(strings.average(), None);

        assert_eq!(report.total_lines(), 5);
    }

    #[test]
    fn test_all_integers() {
        let report = LineSorter::sort(["1", "2", "3", "4"]);
        let ints = report.get(Category::Integer);
        assert_eq!(ints.count(), 4);
        assert_eq!(ints.sum(), Some(StatValue::Integer(BigInt::from(10))));
        assert_eq!(ints.min(), Some(StatValue::Integer(BigInt::from(1))));
        assert_eq!(ints.max(), Some(StatValue::Integer(BigInt::from(4))));
        assert_eq!(ints.average(), Some(&BigDecimal::from(2)));

        assert!(report.get(Category::Float).is_empty());
        assert!(report.get(Category::String).is_empty());
        assert_eq!(report.non_empty().count(), 1);
    }

    #[test]
    fn test_empty_input() {
        let report = LineSorter::sort(Vec::<String>::new());
        assert_eq!(report.total_lines(), 0);
        assert_eq!(report.non_empty().count(), 0);
        for state in report.iter() {
            assert!(state.is_finalized());
            assert!(state.min().is_none());
            assert!(state.max().is_none());
            assert!(state.average().is_none());
        }
    }

    #[test]
    fn test_report_order_matches_categories() {
        let report = LineSorter::sort(["x"]);
        let order: Vec<Category> = report.iter().map(AggregationState::category).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let input = ["10", "x", "1.5", "-3", "yy", "2e2", "", "10"];
        assert_eq!(LineSorter::sort(input), LineSorter::sort(input));
    }

    #[test]
    fn test_unicode_digits_and_astral_text() {
        let report = LineSorter::sort(["١٢٣", "😀"]);

        let ints = report.get(Category::Integer);
        assert_eq!(ints.lines(), ["١٢٣"]);
        assert_eq!(ints.sum(), Some(StatValue::Integer(BigInt::from(123))));

        let strings = report.get(Category::String);
        assert_eq!(strings.lines(), ["😀"]);
        assert_eq!(strings.min(), Some(StatValue::Length(2)));
        assert_eq!(strings.max(), Some(StatValue::Length(2)));
    }

    #[test]
    fn test_blank_lines_are_strings() {
        let report = LineSorter::sort(["", "abc"]);
        let strings = report.get(Category::String);
        assert_eq!(strings.lines(), ["", "abc"]);
        assert_eq!(strings.min(), Some(StatValue::Length(0)));
        assert_eq!(strings.max(), Some(StatValue::Length(3)));
    }
}
