//! # Rusty-cart
//!
//! `rusty-cart` grows binary decision trees (CART) from labeled records whose
//! features may be strings, integers or floats. Every node picks the question
//! with the highest Gini information gain, and growth stops once no question
//! improves purity.
//!
//! ## Getting Started
//!
//! To use `rusty-cart`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-cart = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use rusty_cart::data::dataset::{Dataset, Record};
//! use rusty_cart::trees::classifier::DecisionTreeClassifier;
//!
//! let dataset = Dataset::new(vec![
//!     Record::new("Apple").with("color", "green").with("diameter", 3),
//!     Record::new("Apple").with("color", "yellow").with("diameter", 3),
//!     Record::new("Grape").with("color", "red").with("diameter", 1),
//!     Record::new("Grape").with("color", "red").with("diameter", 1),
//!     Record::new("Lemon").with("color", "yellow").with("diameter", 3),
//! ]);
//!
//! let mut model = DecisionTreeClassifier::new();
//! let tree = model.fit(&dataset).unwrap();
//! assert!(tree.to_string().starts_with("Is diameter >= 3?"));
//!
//! let grape = Record::new("?").with("color", "red").with("diameter", 1);
//! assert_eq!(model.predict(&[grape]).unwrap(), vec!["Grape".to_string()]);
//! ```

/// Records, datasets and data loading
pub mod data;
/// Error types
pub mod errors;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

#[cfg(test)]
pub(crate) mod testing;
