//! Field constraint model and the `validate` check.

use std::fmt::{Display, Formatter};

/// Raw value of one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Parses raw numeric input the way a number input reports it.
    ///
    /// Unparseable input becomes `NaN`, which every range check rejects.
    pub fn parse_number(raw: &str) -> Self {
        Self::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One validation request: a value plus the constraints to apply.
///
/// Length bounds apply to text values only and count UTF-16 code units, the
/// length a browser form reports; numeric bounds apply to numbers only.
/// Bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a request with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns whether `input` satisfies every constraint it declares.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.to_string().trim().is_empty();
    }

    if let FieldValue::Text(text) = &input.value {
        let length = text.encode_utf16().count();
        if let Some(bound) = input.min_length {
            is_valid = is_valid && length >= bound;
        }
        // NOTE: this branch uses the same `>=` comparison as `min_length`, so
        // it accepts lengths at or above the bound. Kept until the intended
        // upper-bound semantics are confirmed; no board field sets it.
        if let Some(bound) = input.max_length {
            is_valid = is_valid && length >= bound;
        }
    }

    if let FieldValue::Number(number) = input.value {
        if let Some(bound) = input.min {
            is_valid = is_valid && number >= bound;
        }
        if let Some(bound) = input.max {
            is_valid = is_valid && number <= bound;
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::{validate, FieldValue, Validatable};

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("   ").required()));
        assert!(validate(&Validatable::new(" x ").required()));
    }

    #[test]
    fn min_length_is_inclusive() {
        assert!(!validate(&Validatable::new("ab").min_length(3)));
        assert!(validate(&Validatable::new("abc").min_length(3)));
    }

    #[test]
    fn min_length_counts_utf16_units() {
        assert!(validate(&Validatable::new("ééééé").min_length(5)));
        assert!(!validate(&Validatable::new("éééé").min_length(5)));
        // Each emoji is a surrogate pair, so three of them have length 6.
        assert!(validate(&Validatable::new("😀😀😀").min_length(5)));
        assert!(!validate(&Validatable::new("😀😀").min_length(5)));
    }

    #[test]
    fn numeric_range_is_inclusive() {
        assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
        assert!(validate(&Validatable::new(1.0).min(1.0).max(5.0)));
        assert!(validate(&Validatable::new(5.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(6.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(0.0).min(1.0).max(5.0)));
    }

    #[test]
    fn length_bounds_skip_numbers_and_range_bounds_skip_text() {
        assert!(validate(&Validatable::new(2.0).min_length(10)));
        assert!(validate(&Validatable::new("abc").min(10.0)));
    }

    #[test]
    fn max_length_keeps_at_least_comparison() {
        assert!(validate(&Validatable::new("abcdef").max_length(3)));
        assert!(validate(&Validatable::new("abc").max_length(3)));
        assert!(!validate(&Validatable::new("ab").max_length(3)));
    }

    #[test]
    fn unparseable_number_passes_required_but_fails_range() {
        let value = FieldValue::parse_number("three");
        assert!(value.as_number().is_some_and(f64::is_nan));
        assert!(validate(&Validatable::new(value.clone()).required()));
        assert!(!validate(&Validatable::new(value).required().min(1.0).max(5.0)));
    }

    #[test]
    fn parse_number_trims_and_accepts_decimals() {
        assert_eq!(FieldValue::parse_number(" 3 "), FieldValue::Number(3.0));
        assert_eq!(FieldValue::parse_number("2.5"), FieldValue::Number(2.5));
    }
}
