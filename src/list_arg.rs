//! Comma-separated numeric list argument for the command line.
//!
//! The validated-input boundary: free-form text is parsed and checked
//! here, so the projectors only ever see numeric lists. Range
//! constraints (positive, finite) are still enforced by the core.

use std::fmt;
use std::str::FromStr;

/// Parse a comma-separated list of reals ("100, 150,200").
///
/// Every entry must parse as a floating-point number; one bad entry
/// rejects the whole list with a diagnostic naming it, mirroring the
/// whole-batch error policy of the projectors.
///
/// # Arguments
/// * `s` - Comma-separated numeric list
///
/// # Returns
/// * `Ok(Vec<f64>)` - Parsed values in their original order
/// * `Err(String)` - Diagnostic naming the offending entry
pub fn parse_value_list(s: &str) -> Result<Vec<f64>, String> {
    if s.trim().is_empty() {
        return Err("value list cannot be empty".to_string());
    }

    s.split(',')
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .map_err(|_| format!("entry {} ('{entry}') is not numeric", index + 1))
        })
        .collect()
}

/// Type-safe wrapper for a comma-separated value list argument.
///
/// Clap-compatible through [`FromStr`]; keeps the caller's entry order,
/// since the projectors sort the batch themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueListArg(Vec<f64>);

impl ValueListArg {
    /// The parsed values, in the order they were written.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Consume the wrapper and take the values.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl FromStr for ValueListArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_value_list(s)?))
    }
}

impl fmt::Display for ValueListArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", rendered.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_value_list("100").unwrap(), vec![100.0]);
    }

    #[test]
    fn test_parse_multiple_values() {
        assert_eq!(
            parse_value_list("100,150,200").unwrap(),
            vec![100.0, 150.0, 200.0]
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(
            parse_value_list(" 2.5 , 1.25,  10 ").unwrap(),
            vec![2.5, 1.25, 10.0]
        );
    }

    #[test]
    fn test_order_preserved() {
        // Sorting is the projectors' job, not the parser's.
        assert_eq!(
            parse_value_list("300,50,120").unwrap(),
            vec![300.0, 50.0, 120.0]
        );
    }

    #[test]
    fn test_non_numeric_entry_rejected() {
        let err = parse_value_list("100,abc,200").unwrap_err();
        assert_eq!(err, "entry 2 ('abc') is not numeric");
    }

    #[test]
    fn test_trailing_comma_rejected() {
        assert!(parse_value_list("100,200,").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(parse_value_list("").is_err());
        assert!(parse_value_list("   ").is_err());
    }

    #[test]
    fn test_value_list_arg_from_str() {
        let arg: ValueListArg = "10,20.5,30".parse().unwrap();
        assert_eq!(arg.values(), &[10.0, 20.5, 30.0]);
        assert_eq!(arg.to_string(), "10,20.5,30");
        assert_eq!(arg.into_vec(), vec![10.0, 20.5, 30.0]);
    }

    #[test]
    fn test_value_list_arg_bad_input() {
        assert!("1.0;2.0".parse::<ValueListArg>().is_err());
    }
}
