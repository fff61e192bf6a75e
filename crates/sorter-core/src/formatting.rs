use crate::models::{Category, StatisticsMode};
use crate::sorter::SortingReport;
use crate::statistics::AggregationState;

/// Format one category's statistics as a single line.
///
/// * Short mode → `"integers: 2"`
/// * Full mode, numeric → `"integers: count=2, min=-17, max=42, sum=25, average=12"`
/// * Full mode, strings → `"strings: count=2, shortest=2, longest=5"`
///
/// An empty category only ever reports its count.
///
/// # Examples
///
/// ```
/// use sorter_core::formatting::format_state;
/// use sorter_core::models::{Category, StatisticsMode};
/// use sorter_core::sorter::LineSorter;
///
/// let report = LineSorter::sort(["42", "-17"]);
/// let ints = report.get(Category::Integer);
/// assert_eq!(format_state(ints, StatisticsMode::Short), "integers: 2");
/// assert_eq!(
///     format_state(ints, StatisticsMode::Full),
///     "integers: count=2, min=-17, max=42, sum=25, average=12"
/// );
/// assert_eq!(
///     format_state(report.get(Category::Float), StatisticsMode::Full),
///     "floats: count=0"
/// );
/// ```
pub fn format_state(state: &AggregationState, mode: StatisticsMode) -> String {
    let label = state.category().label();
    if mode == StatisticsMode::Short {
        return format!("{}: {}", label, state.count());
    }

    let mut fields = vec![format!("count={}", state.count())];
    if state.is_empty() {
        return format!("{}: {}", label, fields.join(", "));
    }

    let (min_key, max_key) = match state.category() {
        Category::String => ("shortest", "longest"),
        _ => ("min", "max"),
    };
    if let Some(min) = state.min() {
        fields.push(format!("{min_key}={min}"));
    }
    if let Some(max) = state.max() {
        fields.push(format!("{max_key}={max}"));
    }
    if let Some(sum) = state.sum() {
        fields.push(format!("sum={sum}"));
    }
    if let Some(average) = state.average() {
        fields.push(format!("average={average}"));
    }

    format!("{}: {}", label, fields.join(", "))
}

/// Format the statistics block for a whole report, one category per line in
/// output order, followed by a trailing newline.
pub fn format_statistics(report: &SortingReport, mode: StatisticsMode) -> String {
    let mut out = String::new();
    for state in report.iter() {
        out.push_str(&format_state(state, mode));
        out.push('\n');
    }
    out
}
