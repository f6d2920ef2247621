//! Decision Tree Classifier
use log::{debug, info};

use super::{node::Node, params::TreeParams, split::find_best_split};
use crate::data::dataset::{Dataset, Record};
use crate::errors::CartError;
use crate::metrics::confusion::ClassificationMetrics;
use crate::trees::params::MissingFeaturePolicy;

/// Grows a tree on `dataset` until no question improves purity.
///
/// Each accepted split leaves two non-empty, strictly smaller subsets, so the
/// recursion depth is bounded by the number of records. Any evaluation error
/// aborts the whole build.
pub fn build_tree(dataset: &Dataset, params: &TreeParams) -> Result<Node, CartError> {
    let best = find_best_split(dataset, params)?;
    let question = match best.question {
        Some(question) if best.gain > 0.0 => question,
        _ => {
            debug!("leaf with {} records", dataset.len());
            return Ok(Node::leaf(dataset.clone()));
        }
    };

    debug!("{} gain={} over {} records", question, best.gain, dataset.len());
    let partition = dataset
        .partition_with_policy(&question, params.missing_feature())
        .map_err(|err| err.for_question(&question))?;
    let true_branch = build_tree(&partition.matched, params)?;
    let false_branch = build_tree(&partition.unmatched, params)?;

    Ok(Node::decision(question, true_branch, false_branch))
}

/// Decision Tree Classifier
#[derive(Clone, Debug, Default)]
pub struct DecisionTreeClassifier {
    root: Option<Node>,
    tree_params: TreeParams,
}

impl ClassificationMetrics for DecisionTreeClassifier {}

impl DecisionTreeClassifier {
    /// Creates a new instance of the decision tree classifier with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new instance of the decision tree classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `missing_feature` - How questions treat records without the questioned feature.
    /// * `parallel` - Whether split candidates are scored on the rayon thread pool.
    pub fn with_params(missing_feature: Option<MissingFeaturePolicy>, parallel: bool) -> Self {
        let mut tree = Self::new();
        tree.set_missing_feature(missing_feature.unwrap_or_default());
        tree.set_parallel(parallel);
        tree
    }

    pub fn set_missing_feature(&mut self, policy: MissingFeaturePolicy) {
        self.tree_params.set_missing_feature(policy);
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.tree_params.set_parallel(parallel);
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// The fitted tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Errors
    ///
    /// Fails if any record cannot be evaluated against a candidate question.
    /// The previously fitted tree, if any, is kept in that case.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<&Node, CartError> {
        info!("Building tree from {} records.", dataset.len());
        let root = build_tree(dataset, &self.tree_params)?;
        info!(
            "Finished building the tree: depth {}, {} leaves.",
            root.depth(),
            root.num_leaves()
        );
        Ok(self.root.insert(root))
    }

    /// Predicts the majority label for each record.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFitted`] if the tree wasn't built yet, or the
    /// evaluation error of the first record that cannot be routed.
    pub fn predict(&self, records: &[Record]) -> Result<Vec<String>, CartError> {
        let root = self.root.as_ref().ok_or(CartError::NotFitted)?;
        records
            .iter()
            .map(|record| -> Result<String, CartError> {
                let label = root.predict(record, self.tree_params.missing_feature())?;
                // leaves produced by build_tree are never empty unless the
                // training set itself was
                Ok(label.unwrap_or_default())
            })
            .collect()
    }

    /// Renders the fitted tree.
    pub fn render(&self) -> Result<String, CartError> {
        self.root
            .as_ref()
            .map(|root| root.render(""))
            .ok_or(CartError::NotFitted)
    }
}
