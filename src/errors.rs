//! Errors
//!
//! Custom error types used throughout the `rusty-cart` crate.
use thiserror::Error;

use crate::data::dataset::ValueKind;

/// Errors that can occur while partitioning data, growing or querying a tree.
#[derive(Debug, Error)]
pub enum CartError {
    /// A record holds a value of a different kind than the question compares against.
    #[error("question expected feature '{feature}' to be {expected}, but got: {found}")]
    TypeMismatch {
        feature: String,
        expected: ValueKind,
        found: ValueKind,
    },
    /// The question was built with a value kind that cannot be compared.
    #[error("unsupported type {0}")]
    UnsupportedType(ValueKind),
    /// Strict policy only: the record does not carry the questioned feature.
    #[error("record has no value for feature '{0}'")]
    MissingFeature(String),
    /// Evaluation failed on the record at `index` while partitioning.
    #[error("element {index}: {source}")]
    Partition {
        index: usize,
        #[source]
        source: Box<CartError>,
    },
    /// Failure attributed to the question rendered in `question`.
    #[error("{question} {source}")]
    Question {
        question: String,
        #[source]
        source: Box<CartError>,
    },
    /// Prediction was requested before `fit`.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// First value is the name of the parameter, second is what was passed.
    #[error("Invalid parameter value passed for {0}: {1}")]
    InvalidParameter(String, String),
    /// True and predicted label sequences differ in length.
    #[error("Predictions and labels are of different sizes: {0} and {1}.")]
    LengthMismatch(usize, usize),
    /// The requested label column is not in the CSV header.
    #[error("Label column '{0}' not found in header")]
    MissingLabelColumn(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CartError {
    /// Strips the positional and question annotations and returns the error
    /// that was originally raised.
    pub fn root_cause(&self) -> &CartError {
        match self {
            CartError::Partition { source, .. } | CartError::Question { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }

    pub(crate) fn at_element(self, index: usize) -> Self {
        CartError::Partition {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn for_question(self, question: impl ToString) -> Self {
        CartError::Question {
            question: question.to_string(),
            source: Box::new(self),
        }
    }
}
