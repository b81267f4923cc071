use crate::category::Category;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::traits::DynTemplate;
use crate::Catalog;

pub struct CatalogBuilder {
    config: CatalogConfig,
    builtins: bool,
    extra: Vec<Box<dyn DynTemplate>>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
            builtins: true,
            extra: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.config.max_input_bytes = limit;
        self
    }

    pub fn disable_category(mut self, category: Category) -> Self {
        if !self.config.disabled_categories.contains(&category) {
            self.config.disabled_categories.push(category);
        }
        self
    }

    /// Add a template next to the built-in ones.
    pub fn register<T: DynTemplate + 'static>(mut self, template: T) -> Self {
        self.extra.push(Box::new(template));
        self
    }

    /// Start from an empty catalog instead of the built-in templates.
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    pub fn build(self) -> Result<Catalog> {
        let mut templates = if self.builtins {
            crate::templates::builtin()
        } else {
            Vec::new()
        };
        templates.extend(self.extra);
        match Catalog::assemble(templates, self.config) {
            (_, Some(id)) => Err(CatalogError::DuplicateTemplate(id)),
            (catalog, None) => Ok(catalog),
        }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
