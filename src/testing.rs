//! Shared datasets for unit tests.

use crate::data::dataset::{Dataset, Record};

/// Five fruits described by a string and an integer feature.
pub(crate) fn fruit() -> Dataset {
    Dataset::new(vec![
        Record::new("Apple").with("color", "green").with("diameter", 3),
        Record::new("Apple").with("color", "yellow").with("diameter", 3),
        Record::new("Grape").with("color", "red").with("diameter", 1),
        Record::new("Grape").with("color", "red").with("diameter", 1),
        Record::new("Lemon").with("color", "yellow").with("diameter", 3),
    ])
}

fn recipe(label: &str, amounts: [i64; 6]) -> Record {
    let names = ["sugar", "eggs", "flour", "butter", "salt", "chocolate"];
    names
        .iter()
        .zip(amounts)
        .fold(Record::new(label), |record, (name, amount)| record.with(*name, amount))
}

/// Ingredient amounts of a few recipes, integer features only.
pub(crate) fn ingredients() -> Dataset {
    Dataset::new(vec![
        recipe("Cake", [200, 4, 300, 100, 15, 0]),
        recipe("Cake", [50, 4, 200, 0, 5, 200]),
        recipe("Omlette", [0, 4, 0, 50, 15, 0]),
        recipe("Bread Dough", [10, 0, 500, 50, 15, 0]),
        recipe("Bread Dough", [0, 2, 300, 20, 40, 0]),
    ])
}
