//! Best split search
use log::trace;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::data::dataset::Dataset;
use crate::errors::CartError;
use crate::trees::impurity::{gini_impurity, information_gain};
use crate::trees::params::TreeParams;
use crate::trees::question::Question;

/// Outcome of a split search. `question` is `None` when no candidate
/// splits the data, in which case `gain` is `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BestSplit {
    pub question: Option<Question>,
    pub gain: f64,
}

impl BestSplit {
    fn none() -> Self {
        Self {
            question: None,
            gain: 0.0,
        }
    }
}

/// Every (feature, value) pair observed in the data, features first.
fn candidates(dataset: &Dataset) -> Vec<Question> {
    dataset
        .feature_names()
        .into_iter()
        .flat_map(|feature| {
            dataset
                .unique_values(&feature)
                .into_iter()
                .map(move |value| Question::new(feature.clone(), value))
        })
        .collect()
}

/// Scores one candidate. `Ok(None)` means it leaves one side empty.
fn score(
    dataset: &Dataset,
    question: &Question,
    parent_impurity: f64,
    params: &TreeParams,
) -> Result<Option<f64>, CartError> {
    let partition = dataset
        .partition_with_policy(question, params.missing_feature())
        .map_err(|err| err.for_question(question))?;
    if !partition.is_split() {
        return Ok(None);
    }
    let gain = information_gain(&partition, parent_impurity);
    trace!("{} gain={}", question, gain);
    Ok(Some(gain))
}

/// Finds the question with the highest information gain.
///
/// Candidates are scanned in enumeration order and a candidate replaces the
/// current best when its gain is greater than or equal to it, so among equal
/// gains the one enumerated last is kept. With `params.parallel` the
/// candidates are scored on the rayon pool and folded in the same order,
/// which gives the same answer and reports the same error.
pub fn find_best_split(dataset: &Dataset, params: &TreeParams) -> Result<BestSplit, CartError> {
    if dataset.len() <= 1 {
        return Ok(BestSplit::none());
    }
    let parent_impurity = gini_impurity(dataset);
    let questions = candidates(dataset);

    let scores: Vec<Result<Option<f64>, CartError>> = if params.parallel() {
        questions
            .as_slice()
            .into_par_iter()
            .map(|question| score(dataset, question, parent_impurity, params))
            .collect()
    } else {
        questions
            .iter()
            .map(|question| score(dataset, question, parent_impurity, params))
            .collect()
    };

    let mut best = BestSplit::none();
    for (question, scored) in questions.into_iter().zip(scores) {
        if let Some(gain) = scored? {
            if gain >= best.gain {
                best = BestSplit {
                    question: Some(question),
                    gain,
                };
            }
        }
    }
    Ok(best)
}
