use rusty_cart::data::dataset::{Dataset, Record};
use rusty_cart::data::loader::read_csv_path;
use rusty_cart::metrics::confusion::ClassificationMetrics;
use rusty_cart::trees::classifier::DecisionTreeClassifier;
use std::error::Error;

fn fruit() -> Dataset {
    Dataset::new(vec![
        Record::new("Apple").with("color", "green").with("diameter", 3),
        Record::new("Apple").with("color", "yellow").with("diameter", 3),
        Record::new("Grape").with("color", "red").with("diameter", 1),
        Record::new("Grape").with("color", "red").with("diameter", 1),
        Record::new("Lemon").with("color", "yellow").with("diameter", 3),
    ])
}

fn labels(dataset: &Dataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .map(|record| record.label().to_string())
        .collect()
}

fn test_tree_classifier(
    train_dataset: &Dataset,
    test_dataset: &Dataset,
) -> Result<String, Box<dyn Error>> {
    let mut classifier = DecisionTreeClassifier::with_params(None, true);
    classifier.fit(train_dataset)?;
    println!("{}", classifier.render()?);

    let predictions = classifier.predict(test_dataset.records())?;
    let accuracy = classifier.accuracy(&labels(test_dataset), &predictions)?;
    Ok(format!("Accuracy: {}%", accuracy * 100.0))
}

/// Usage: `grow-tree [<file.csv> <label column>]`. Without arguments the
/// built-in fruit dataset is used and the tree is scored on its own records.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (train_dataset, test_dataset) = match args.as_slice() {
        [] => (fruit(), fruit()),
        [path, label_column] => {
            let dataset = read_csv_path(path, label_column)?;
            println!("Loaded dataset with {} records", dataset.len());
            dataset.train_test_split(0.75, None)?
        }
        _ => return Err("usage: grow-tree [<file.csv> <label column>]".into()),
    };

    println!("{}", test_tree_classifier(&train_dataset, &test_dataset)?);
    Ok(())
}
