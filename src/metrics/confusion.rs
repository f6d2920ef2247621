use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::errors::CartError;

/// Confusion counts; rows are true labels, columns predicted labels, both
/// indexed by `classes`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    pub classes: Vec<String>,
    pub counts: DMatrix<usize>,
}

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The confusion matrix, with classes in lexicographic order.
    fn confusion_matrix(
        &self,
        y_true: &[String],
        y_pred: &[String],
    ) -> Result<ConfusionMatrix, CartError> {
        if y_true.len() != y_pred.len() {
            return Err(CartError::LengthMismatch(y_true.len(), y_pred.len()));
        }

        let classes: Vec<String> = y_true
            .iter()
            .chain(y_pred)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let position = |label: &String| classes.binary_search(label).unwrap_or_default();

        let mut counts = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred) {
            counts[(position(y_t), position(y_p))] += 1;
        }

        Ok(ConfusionMatrix { classes, counts })
    }

    /// Share of predictions equal to the true label.
    fn accuracy(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, CartError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Ok(0.0);
        }
        let correct: usize = matrix.counts.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Macro-averaged precision over all classes.
    fn precision(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, CartError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.classes.len();
        if num_classes == 0 {
            return Ok(0.0);
        }

        let mut precision_total = 0.0;
        for class in 0..num_classes {
            let tp = matrix.counts[(class, class)];
            let predicted = matrix.counts.column(class).sum();

            if predicted > 0 {
                precision_total += tp as f64 / predicted as f64;
            }
        }

        Ok(precision_total / num_classes as f64)
    }

    /// Macro-averaged recall over all classes.
    fn recall(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, CartError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.classes.len();
        if num_classes == 0 {
            return Ok(0.0);
        }

        let mut recall_total = 0.0;
        for class in 0..num_classes {
            let tp = matrix.counts[(class, class)];
            let actual = matrix.counts.row(class).sum();

            if actual > 0 {
                recall_total += tp as f64 / actual as f64;
            }
        }

        Ok(recall_total / num_classes as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct MockClassifier;

    impl ClassificationMetrics for MockClassifier {}

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_confusion_matrix() {
        let y_true = labels(&["b", "a", "b", "a", "b"]);
        let y_pred = labels(&["b", "b", "a", "a", "b"]);

        let result = MockClassifier.confusion_matrix(&y_true, &y_pred).unwrap();

        assert_eq!(result.classes, labels(&["a", "b"]));
        assert_eq!(result.counts, DMatrix::from_row_slice(2, 2, &[1, 1, 1, 2]));
    }

    #[test]
    fn test_confusion_matrix_unequal() {
        let y_true = labels(&["a", "b"]);
        let y_pred = labels(&["a"]);

        let result = MockClassifier.confusion_matrix(&y_true, &y_pred);

        assert!(matches!(result, Err(CartError::LengthMismatch(2, 1))));
    }

    #[test]
    fn test_accuracy() {
        let y_true = labels(&["Apple", "Grape", "Lemon", "Grape"]);
        let y_pred = labels(&["Apple", "Grape", "Apple", "Lemon"]);

        assert_relative_eq!(MockClassifier.accuracy(&y_true, &y_pred).unwrap(), 0.5);
        assert_eq!(MockClassifier.accuracy(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_precision_and_recall() {
        let y_true = labels(&["b", "a", "b", "a", "b"]);
        let y_pred = labels(&["b", "b", "a", "a", "b"]);

        // a: 1 of 2 predictions right, 1 of 2 actual found
        // b: 2 of 3 predictions right, 2 of 3 actual found
        let expected = (0.5 + 2.0 / 3.0) / 2.0;
        assert_relative_eq!(MockClassifier.precision(&y_true, &y_pred).unwrap(), expected);
        assert_relative_eq!(MockClassifier.recall(&y_true, &y_pred).unwrap(), expected);
    }
}
