//! Catalog configuration loaded from TOML.
//!
//! ```toml
//! max_input_bytes = 1048576
//! disabled_categories = ["bruteforcing", "backtracking"]
//! combine_probability = 0.5
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::category::Category;
use crate::error::Result;

/// Default cap on the size of one input instance.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

/// Default probability that a hard selection combines two templates.
pub const DEFAULT_COMBINE_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Inputs longer than this are rejected before parsing.
    pub max_input_bytes: usize,
    /// Categories hidden from listing, selection and `run`.
    pub disabled_categories: Vec<Category>,
    /// Probability that a `Hard` selection pairs two templates.
    pub combine_probability: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            disabled_categories: Vec::new(),
            combine_probability: DEFAULT_COMBINE_PROBABILITY,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: CatalogConfig = toml::from_str(s)?;
        cfg.combine_probability = cfg.combine_probability.clamp(0.0, 1.0);
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn is_disabled(&self, category: Category) -> bool {
        self.disabled_categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let cfg = CatalogConfig::from_toml_str(
            "max_input_bytes = 64\ndisabled_categories = [\"dp\", \"tree\"]\ncombine_probability = 1.5\n",
        )
        .unwrap();
        assert_eq!(cfg.max_input_bytes, 64);
        assert!(cfg.is_disabled(Category::Dp));
        assert!(cfg.is_disabled(Category::Tree));
        assert!(!cfg.is_disabled(Category::Math));
        assert_eq!(cfg.combine_probability, 1.0);
    }

    #[test]
    fn unknown_category_is_a_config_error() {
        let err = CatalogConfig::from_toml_str("disabled_categories = [\"dynamic\"]").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        let err = CatalogConfig::from_toml_str("max_bytes = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_input_bytes = 10").unwrap();
        let cfg = CatalogConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.max_input_bytes, 10);
        assert!(matches!(
            CatalogConfig::from_path("/nonexistent/catalog.toml"),
            Err(CatalogError::Io(_))
        ));
    }
}
