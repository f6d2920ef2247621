use std::fmt::{self, Display, Formatter};

use crate::data::dataset::{Dataset, LabelCounts, Record};
use crate::errors::CartError;
use crate::trees::params::MissingFeaturePolicy;
use crate::trees::question::Question;

/// Terminal node holding the records that reached it.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    records: Dataset,
}

impl Leaf {
    pub fn new(records: Dataset) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &Dataset {
        &self.records
    }

    pub fn label_counts(&self) -> LabelCounts {
        self.records.label_counts()
    }

    /// Most frequent label; ties go to the smallest label. `None` for an empty leaf.
    pub fn majority_label(&self) -> Option<String> {
        let mut best: Option<(String, usize)> = None;
        for (label, count) in self.label_counts() {
            if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    fn render(&self, indent: &str) -> String {
        let counts = self
            .label_counts()
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}Predict {{{}}}", indent, counts)
    }
}

/// Internal node splitting on a question.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub question: Question,
    pub true_branch: Box<Node>,
    pub false_branch: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Decision(Decision),
}

impl Node {
    pub fn leaf(records: Dataset) -> Self {
        Node::Leaf(Leaf::new(records))
    }

    pub fn decision(question: Question, true_branch: Node, false_branch: Node) -> Self {
        Node::Decision(Decision {
            question,
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Renders the subtree, children indented two spaces deeper than `indent`.
    pub fn render(&self, indent: &str) -> String {
        match self {
            Node::Leaf(leaf) => leaf.render(indent),
            Node::Decision(decision) => {
                let child_indent = format!("{}  ", indent);
                format!(
                    "{indent}{}\n{indent}-->True: \n{}\n{indent}-->False: \n{}",
                    decision.question,
                    decision.true_branch.render(&child_indent),
                    decision.false_branch.render(&child_indent),
                    indent = indent,
                )
            }
        }
    }

    /// Walks from this node to the leaf the record falls into.
    pub fn classify(&self, record: &Record, policy: MissingFeaturePolicy) -> Result<&Leaf, CartError> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return Ok(leaf),
                Node::Decision(decision) => {
                    let is_match = decision
                        .question
                        .matches(record, policy)
                        .map_err(|err| err.for_question(&decision.question))?;
                    node = if is_match {
                        &decision.true_branch
                    } else {
                        &decision.false_branch
                    };
                }
            }
        }
    }

    /// Majority label of the leaf `record` falls into.
    pub fn predict(&self, record: &Record, policy: MissingFeaturePolicy) -> Result<Option<String>, CartError> {
        Ok(self.classify(record, policy)?.majority_label())
    }

    /// Number of decision levels; a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision(decision) => {
                1 + decision.true_branch.depth().max(decision.false_branch.depth())
            }
        }
    }

    pub fn num_leaves(&self) -> usize {
        self.leaves().len()
    }

    /// Leaves from left (true) to right (false).
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(leaf) => leaves.push(leaf),
                Node::Decision(decision) => {
                    stack.push(&decision.false_branch);
                    stack.push(&decision.true_branch);
                }
            }
        }
        leaves
    }

    /// All records held by the leaves, in leaf order.
    pub fn leaf_records(&self) -> Vec<&Record> {
        self.leaves()
            .into_iter()
            .flat_map(|leaf| leaf.records().records())
            .collect()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}
