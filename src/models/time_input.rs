//! Time input model.

use serde::{Deserialize, Serialize};

/// The work time to bill, as supplied by the caller.
///
/// Every value of every category is summed; order carries no meaning.
/// Month specifiers stay raw until the calculator parses them.
///
/// # Example
///
/// ```
/// use facturator::models::TimeInput;
///
/// let input = TimeInput {
///     days: vec![5, 3],
///     months: vec!["2024-02".to_string()],
///     ..TimeInput::default()
/// };
/// assert!(!input.is_empty());
/// assert!(TimeInput::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeInput {
    /// Loose hours.
    pub hours: Vec<i64>,
    /// Whole days, converted with the configured hours per day.
    pub days: Vec<i64>,
    /// Whole weeks, converted with the configured weekly hours.
    pub weeks: Vec<i64>,
    /// Month specifiers in `MM` or `YYYY-MM` form.
    pub months: Vec<String>,
}

impl TimeInput {
    /// Returns true if no time of any kind was supplied.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.days.is_empty() && self.weeks.is_empty() && self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_input() {
        let json = r#"{ "days": [5, 3], "months": ["2024-01"] }"#;

        let input: TimeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.days, vec![5, 3]);
        assert_eq!(input.months, vec!["2024-01".to_string()]);
        assert!(input.hours.is_empty());
        assert!(input.weeks.is_empty());
    }

    #[test]
    fn test_single_category_is_not_empty() {
        let input = TimeInput {
            weeks: vec![0],
            ..TimeInput::default()
        };
        assert!(!input.is_empty());
    }
}
