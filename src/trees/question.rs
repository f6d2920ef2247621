//! Split questions
use std::fmt::{self, Display, Formatter};

use crate::data::dataset::{Record, Value, ValueKind};
use crate::errors::CartError;
use crate::trees::params::MissingFeaturePolicy;

/// A test on one feature. String values are compared for equality, numeric
/// values act as a threshold (`record >= value`).
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    feature: String,
    value: Value,
}

impl Question {
    pub fn new(feature: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            feature: feature.into(),
            value: value.into(),
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Evaluates the question against a record.
    ///
    /// The record's value must be of the same kind as the question's value,
    /// otherwise [`CartError::TypeMismatch`] is returned. Questions on boolean
    /// values fail with [`CartError::UnsupportedType`].
    pub fn matches(&self, record: &Record, policy: MissingFeaturePolicy) -> Result<bool, CartError> {
        let Some(target) = record.get(&self.feature) else {
            return match policy {
                MissingFeaturePolicy::NoMatch => Ok(false),
                MissingFeaturePolicy::Error => Err(CartError::MissingFeature(self.feature.clone())),
            };
        };

        match (&self.value, target) {
            (Value::Str(expected), Value::Str(actual)) => Ok(actual == expected),
            (Value::Int(threshold), Value::Int(actual)) => Ok(actual >= threshold),
            (Value::Float(threshold), Value::Float(actual)) => Ok(actual >= threshold),
            (Value::Bool(_), _) => Err(CartError::UnsupportedType(ValueKind::Bool)),
            (expected, actual) => Err(CartError::TypeMismatch {
                feature: self.feature.clone(),
                expected: expected.kind(),
                found: actual.kind(),
            }),
        }
    }

    fn operator(&self) -> &'static str {
        match self.value {
            Value::Str(_) => "==",
            _ => ">=",
        }
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Is {} {} {}?", self.feature, self.operator(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fruit;

    fn must_match(question: &Question, record: &Record) -> bool {
        question.matches(record, MissingFeaturePolicy::NoMatch).unwrap()
    }

    #[test]
    fn test_match_on_string_feature() {
        let question = Question::new("color", "red");
        let matches: Vec<_> = fruit()
            .records()
            .iter()
            .map(|record| must_match(&question, record))
            .collect();
        assert_eq!(matches, vec![false, false, true, true, false]);
    }

    #[test]
    fn test_match_on_int_feature_is_threshold() {
        let question = Question::new("diameter", 3);
        let matches: Vec<_> = fruit()
            .records()
            .iter()
            .map(|record| must_match(&question, record))
            .collect();
        assert_eq!(matches, vec![true, true, false, false, true]);

        let bigger = Record::new("Melon").with("diameter", 12);
        assert!(must_match(&question, &bigger));
    }

    #[test]
    fn test_match_on_float_feature() {
        let question = Question::new("weight", 1.5);
        assert!(must_match(&question, &Record::new("a").with("weight", 1.5)));
        assert!(!must_match(&question, &Record::new("b").with("weight", 1.49)));
    }

    #[test]
    fn test_missing_feature() {
        let question = Question::new("weight", 1.5);
        let record = Record::new("a").with("color", "red");
        assert!(!must_match(&question, &record));
        assert!(matches!(
            question.matches(&record, MissingFeaturePolicy::Error),
            Err(CartError::MissingFeature(feature)) if feature == "weight"
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let record = Record::new("a").with("diameter", 3.0);
        let err = Question::new("diameter", 3)
            .matches(&record, MissingFeaturePolicy::NoMatch)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "question expected feature 'diameter' to be int, but got: float"
        );

        let err = Question::new("diameter", "big")
            .matches(&record, MissingFeaturePolicy::NoMatch)
            .unwrap_err();
        assert!(matches!(
            err,
            CartError::TypeMismatch { expected: ValueKind::Str, found: ValueKind::Float, .. }
        ));
    }

    #[test]
    fn test_unsupported_type() {
        let record = Record::new("a").with("ripe", true);
        let err = Question::new("ripe", true)
            .matches(&record, MissingFeaturePolicy::NoMatch)
            .unwrap_err();
        assert!(matches!(err, CartError::UnsupportedType(ValueKind::Bool)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Question::new("diameter", 3).to_string(), "Is diameter >= 3?");
        assert_eq!(Question::new("color", "red").to_string(), "Is color == red?");
        assert_eq!(Question::new("weight", 0.5).to_string(), "Is weight >= 0.5?");
    }
}
