use crate::errors::CartError;

/// What a question answers for a record that does not carry its feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingFeaturePolicy {
    /// The record goes to the false branch.
    #[default]
    NoMatch,
    /// Evaluation fails with [`CartError::MissingFeature`].
    Error,
}

impl std::str::FromStr for MissingFeaturePolicy {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-match" => Ok(Self::NoMatch),
            "error" => Ok(Self::Error),
            other => Err(CartError::InvalidParameter(
                "missing_feature".to_string(),
                format!("'{}', expected 'no-match' or 'error'", other),
            )),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TreeParams {
    pub missing_feature: MissingFeaturePolicy,
    pub parallel: bool,
}

impl TreeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_missing_feature(&mut self, policy: MissingFeaturePolicy) {
        self.missing_feature = policy;
    }

    /// Parses the policy name (`no-match` or `error`) before applying it.
    pub fn set_missing_feature_str(&mut self, policy: &str) -> Result<(), CartError> {
        self.missing_feature = policy.parse()?;
        Ok(())
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn missing_feature(&self) -> MissingFeaturePolicy {
        self.missing_feature
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TreeParams::new();
        assert_eq!(params.missing_feature(), MissingFeaturePolicy::NoMatch);
        assert!(!params.parallel());
    }

    #[test]
    fn test_set_missing_feature_str() {
        let mut params = TreeParams::new();
        params.set_missing_feature_str("error").unwrap();
        assert_eq!(params.missing_feature(), MissingFeaturePolicy::Error);

        let err = params.set_missing_feature_str("ignore").unwrap_err();
        assert!(matches!(err, CartError::InvalidParameter(..)));
        assert_eq!(params.missing_feature(), MissingFeaturePolicy::Error);
    }
}
