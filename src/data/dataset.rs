use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Display, Formatter};

use crate::errors::CartError;
use crate::trees::params::MissingFeaturePolicy;
use crate::trees::question::Question;

/// Label frequency table, ordered by label.
pub type LabelCounts = BTreeMap<String, usize>;

/// A single attribute value. Features of one dataset may mix kinds freely.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Discriminant of a [`Value`], used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Int,
    Float,
    Bool,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    fn key(&self) -> ValueKey<'_> {
        match self {
            Value::Str(s) => ValueKey::Str(s),
            Value::Int(i) => ValueKey::Int(*i),
            Value::Float(f) => ValueKey::Float(f.to_bits()),
            Value::Bool(b) => ValueKey::Bool(*b),
        }
    }
}

// Hashable view of a value; floats are keyed by their bit pattern.
#[derive(Hash, PartialEq, Eq)]
enum ValueKey<'a> {
    Str(&'a str),
    Int(i64),
    Float(u64),
    Bool(bool),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// One labeled observation. Features are kept sorted by name so that every
/// traversal of a record is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    features: BTreeMap<String, Value>,
    label: String,
}

impl Record {
    /// Creates a record with the given label and no features.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            features: BTreeMap::new(),
            label: label.into(),
        }
    }

    pub fn from_parts(features: BTreeMap<String, Value>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    /// Builder-style setter.
    ///
    /// ```
    /// use rusty_cart::data::dataset::{Record, Value};
    ///
    /// let record = Record::new("Apple").with("color", "green").with("diameter", 3);
    /// assert_eq!(record.get("diameter"), Some(&Value::Int(3)));
    /// ```
    pub fn with(mut self, feature: impl Into<String>, value: impl Into<Value>) -> Self {
        self.features.insert(feature.into(), value.into());
        self
    }

    pub fn get(&self, feature: &str) -> Option<&Value> {
        self.features.get(feature)
    }

    pub fn features(&self) -> &BTreeMap<String, Value> {
        &self.features
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Two halves of a dataset split by a [`Question`].
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    pub matched: Dataset,
    pub unmatched: Dataset,
}

impl Partition {
    /// A partition only splits the data when neither side is empty.
    pub fn is_split(&self) -> bool {
        self.matched.is_not_empty() && self.unmatched.is_not_empty()
    }
}

/// An ordered sequence of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Feature names in first-seen order. Records need not share all features.
    pub fn feature_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for record in &self.records {
            for name in record.features.keys() {
                if seen.insert(name.as_str()) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Distinct values of `feature` in first-seen order. Records without the
    /// feature are skipped.
    pub fn unique_values(&self, feature: &str) -> Vec<Value> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for value in self.records.iter().filter_map(|record| record.get(feature)) {
            if seen.insert(value.key()) {
                values.push(value.clone());
            }
        }
        values
    }

    pub fn label_counts(&self) -> LabelCounts {
        let mut counts = LabelCounts::new();
        for record in &self.records {
            *counts.entry(record.label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Splits the records on `question`, treating absent features as a non-match.
    pub fn partition(&self, question: &Question) -> Result<Partition, CartError> {
        self.partition_with_policy(question, MissingFeaturePolicy::default())
    }

    /// Splits the records on `question`. Fails on the first record that cannot
    /// be evaluated, reporting its position; no partial result is returned.
    pub fn partition_with_policy(
        &self,
        question: &Question,
        policy: MissingFeaturePolicy,
    ) -> Result<Partition, CartError> {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for (index, record) in self.records.iter().enumerate() {
            let is_match = question
                .matches(record, policy)
                .map_err(|err| err.at_element(index))?;
            if is_match {
                matched.push(record.clone());
            } else {
                unmatched.push(record.clone());
            }
        }

        Ok(Partition {
            matched: Self::new(matched),
            unmatched: Self::new(unmatched),
        })
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), CartError> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(CartError::InvalidParameter(
                "train_size".to_string(),
                format!("{} is not between 0.0 and 1.0", train_size),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.records.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.records.len() as f64 * train_size).floor() as usize;

        let train = indices[..train_size]
            .iter()
            .map(|&index| self.records[index].clone())
            .collect();
        let test = indices[train_size..]
            .iter()
            .map(|&index| self.records[index].clone())
            .collect();

        Ok((train, test))
    }
}
