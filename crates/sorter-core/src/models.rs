use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;

/// The three fixed classification outcomes for an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Whole line is a base-10 integer literal of any magnitude.
    Integer,
    /// Whole line is a base-10 decimal literal (fraction and/or exponent).
    Float,
    /// Anything else, including numbers padded with whitespace.
    String,
}

impl Category {
    /// Every category, in the order results are reported and written.
    pub const ALL: [Category; 3] = [Category::Integer, Category::Float, Category::String];

    /// Output file name used when no prefix is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Category::Integer => "integers.txt",
            Category::Float => "floats.txt",
            Category::String => "strings.txt",
        }
    }

    /// Human-readable plural label used in statistics output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Integer => "integers",
            Category::Float => "floats",
            Category::String => "strings",
        }
    }

    /// `true` for categories that carry a sum and an average.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Category::String)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified line together with the value its category compares by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Integer(BigInt),
    Float(BigDecimal),
    /// Plain text; carries the line length in characters.
    Text(usize),
}

impl ParsedLine {
    pub fn category(&self) -> Category {
        match self {
            ParsedLine::Integer(_) => Category::Integer,
            ParsedLine::Float(_) => Category::Float,
            ParsedLine::Text(_) => Category::String,
        }
    }
}

/// How much of the statistics block gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatisticsMode {
    /// Count per category only.
    #[default]
    Short,
    /// Count, min and max; numeric categories add sum and average.
    Full,
}

/// A single statistic value, as exposed to callers that only want to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Integer(BigInt),
    Decimal(BigDecimal),
    /// Line length in characters (String category min/max).
    Length(usize),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(v) => write!(f, "{v}"),
            StatValue::Decimal(v) => write!(f, "{v}"),
            StatValue::Length(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_output_order() {
        assert_eq!(
            Category::ALL,
            [Category::Integer, Category::Float, Category::String]
        );
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(Category::Integer.default_file_name(), "integers.txt");
        assert_eq!(Category::Float.default_file_name(), "floats.txt");
        assert_eq!(Category::String.default_file_name(), "strings.txt");
    }

    #[test]
    fn test_only_string_is_non_numeric() {
        assert!(Category::Integer.is_numeric());
        assert!(Category::Float.is_numeric());
        assert!(!Category::String.is_numeric());
    }

    #[test]
    fn test_parsed_line_category() {
        assert_eq!(ParsedLine::Integer(BigInt::from(3)).category(), Category::Integer);
        assert_eq!(
            ParsedLine::Float(BigDecimal::from(3)).category(),
            Category::Float
        );
        assert_eq!(ParsedLine::Text(5).category(), Category::String);
    }

    #[test]
    fn test_stat_value_display() {
        assert_eq!(StatValue::Integer(BigInt::from(-17)).to_string(), "-17");
        assert_eq!(StatValue::Length(5).to_string(), "5");
    }
}
