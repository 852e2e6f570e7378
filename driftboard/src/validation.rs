//! Field validation
//!
//! Pure constraint checks over form field values. A [`Constraints`] set
//! describes what a single field must satisfy; [`validate`] reports whether
//! a value passes. Constraints that do not apply to the value's type are
//! skipped, as are absent constraints. There are no side effects and no
//! error cases.

/// A field value as read from an input control
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Build a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a numeric value
    pub fn number(n: impl Into<f64>) -> Self {
        Self::Number(n.into())
    }
}

/// Optional constraints applied to a single field.
///
/// String-length constraints apply only to [`FieldValue::Text`]; numeric
/// range constraints apply only to [`FieldValue::Number`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Constraints {
    /// No constraints: everything passes
    pub fn none() -> Self {
        Self::default()
    }

    /// A required field
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Set the minimum text length
    pub fn with_min_length(mut self, chars: usize) -> Self {
        self.min_length = Some(chars);
        self
    }

    /// Set the maximum text length
    pub fn with_max_length(mut self, chars: usize) -> Self {
        self.max_length = Some(chars);
        self
    }

    /// Set the numeric lower bound (inclusive)
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the numeric upper bound (inclusive)
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A labeled value paired with its constraints, ready to check
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
    pub constraints: Constraints,
}

impl Field {
    pub fn new(label: &'static str, value: FieldValue, constraints: Constraints) -> Self {
        Self {
            label,
            value,
            constraints,
        }
    }

    /// Check the value against the constraints
    pub fn is_valid(&self) -> bool {
        validate(&self.value, &self.constraints)
    }

    /// Whether the value is missing under the `required` constraint alone
    pub fn is_blank(&self) -> bool {
        self.constraints.required && !validate(&self.value, &Constraints::required())
    }
}

/// True iff every applicable constraint holds for the value
pub fn validate(value: &FieldValue, constraints: &Constraints) -> bool {
    let mut valid = true;

    if constraints.required {
        valid = valid
            && match value {
                // A number always has a non-empty textual form
                FieldValue::Text(s) => !s.trim().is_empty(),
                FieldValue::Number(_) => true,
            };
    }

    if let FieldValue::Text(s) = value {
        let len = s.chars().count();
        if let Some(min_length) = constraints.min_length {
            valid = valid && len >= min_length;
        }
        if let Some(max_length) = constraints.max_length {
            valid = valid && len <= max_length;
        }
    }

    if let FieldValue::Number(n) = value {
        if let Some(min) = constraints.min {
            valid = valid && *n >= min;
        }
        if let Some(max) = constraints.max {
            valid = valid && *n <= max;
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints_always_pass() {
        assert!(validate(&FieldValue::text(""), &Constraints::none()));
        assert!(validate(&FieldValue::number(0), &Constraints::none()));
    }

    #[test]
    fn test_required_text() {
        let required = Constraints::required();
        assert!(validate(&FieldValue::text("x"), &required));
        assert!(!validate(&FieldValue::text(""), &required));
        assert!(!validate(&FieldValue::text("   "), &required));
    }

    #[test]
    fn test_required_number_always_passes() {
        assert!(validate(&FieldValue::number(0), &Constraints::required()));
    }

    #[test]
    fn test_min_length() {
        let constraints = Constraints::required().with_min_length(5);
        assert!(validate(&FieldValue::text("hello"), &constraints));
        assert!(!validate(&FieldValue::text("hi"), &constraints));
    }

    #[test]
    fn test_max_length() {
        let constraints = Constraints::none().with_max_length(3);
        assert!(validate(&FieldValue::text("abc"), &constraints));
        assert!(!validate(&FieldValue::text("abcd"), &constraints));
    }

    #[test]
    fn test_numeric_range() {
        let constraints = Constraints::required().with_min(2.0).with_max(8.0);
        assert!(validate(&FieldValue::number(2), &constraints));
        assert!(validate(&FieldValue::number(8), &constraints));
        assert!(!validate(&FieldValue::number(1), &constraints));
        assert!(!validate(&FieldValue::number(9), &constraints));
    }

    #[test]
    fn test_length_constraints_skip_numbers() {
        let constraints = Constraints::none().with_min_length(5);
        assert!(validate(&FieldValue::number(1), &constraints));
    }

    #[test]
    fn test_range_constraints_skip_text() {
        let constraints = Constraints::none().with_min(2.0).with_max(8.0);
        assert!(validate(&FieldValue::text("1"), &constraints));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let constraints = Constraints::none().with_min_length(5);
        assert!(validate(&FieldValue::text("grüße"), &constraints));
    }

    #[test]
    fn test_field_helpers() {
        let blank = Field::new("title", FieldValue::text("  "), Constraints::required());
        assert!(blank.is_blank());
        assert!(!blank.is_valid());

        let short = Field::new(
            "description",
            FieldValue::text("hi"),
            Constraints::required().with_min_length(5),
        );
        assert!(!short.is_blank());
        assert!(!short.is_valid());
    }
}
