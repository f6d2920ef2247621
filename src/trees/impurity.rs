//! Gini impurity and information gain
use crate::data::dataset::{Dataset, Partition};

/// Computes `1 - Σ p(label)²` over the labels of `dataset`.
///
/// An empty dataset has impurity `0.0`; split search never scores empty sides.
pub fn gini_impurity(dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let total = dataset.len() as f64;
    let sum_sq: f64 = dataset
        .label_counts()
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// Impurity reduction of `partition` relative to its parent, with each side
/// weighted by its share of the records. Returns `0.0` if both sides are empty.
pub fn information_gain(partition: &Partition, parent_impurity: f64) -> f64 {
    let total = partition.matched.len() + partition.unmatched.len();
    if total == 0 {
        return 0.0;
    }
    let weight_matched = partition.matched.len() as f64 / total as f64;

    parent_impurity
        - weight_matched * gini_impurity(&partition.matched)
        - (1.0 - weight_matched) * gini_impurity(&partition.unmatched)
}
