//! The template registry.
//!
//! [`Catalog`] owns every registered template, indexed by id, and exposes the
//! listing, lookup, execution and selection operations. Templates are
//! stateless, so a catalog can be shared across threads and one template can
//! serve many concurrent invocations.

use std::collections::{BTreeSet, HashMap};

use rand::Rng;

use crate::builder::CatalogBuilder;
use crate::category::Category;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, InputError, Result};
use crate::selection::{self, Selection, Selector};
use crate::traits::DynTemplate;

/// One invocation in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRequest<'a> {
    pub id: &'a str,
    pub input: &'a str,
}

impl<'a> RunRequest<'a> {
    pub fn new(id: &'a str, input: &'a str) -> Self {
        Self { id, input }
    }
}

/// Registry of templates.
///
/// Typical usage:
/// ```
/// use judge_templates::Catalog;
///
/// let catalog = Catalog::new();
/// let out = catalog.run("10816", "5\n3 5 3 2 5\n3\n5 3 7\n").unwrap();
/// assert_eq!(out, "2 2 0\n");
/// ```
pub struct Catalog {
    /// Sorted by numeric id.
    templates: Vec<Box<dyn DynTemplate>>,
    index: HashMap<&'static str, usize>,
    config: CatalogConfig,
}

impl Catalog {
    /// Catalog of every built-in template with the default configuration.
    pub fn new() -> Self {
        Self::assemble(crate::templates::builtin(), CatalogConfig::default()).0
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Index `templates`, keeping the first of any duplicated id.
    ///
    /// Returns the catalog together with the first duplicate seen, if any.
    pub(crate) fn assemble(
        mut templates: Vec<Box<dyn DynTemplate>>,
        config: CatalogConfig,
    ) -> (Self, Option<&'static str>) {
        templates.sort_by_key(|t| (t.info().number(), t.info().id));
        let mut duplicate = None;
        let mut kept: Vec<Box<dyn DynTemplate>> = Vec::with_capacity(templates.len());
        for t in templates {
            let id = t.info().id;
            if kept.iter().any(|k| k.info().id == id) {
                duplicate.get_or_insert(id);
                continue;
            }
            kept.push(t);
        }
        let index = kept
            .iter()
            .enumerate()
            .map(|(i, t)| (t.info().id, i))
            .collect();
        (
            Self {
                templates: kept,
                index,
                config,
            },
            duplicate,
        )
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn is_enabled(&self, t: &dyn DynTemplate) -> bool {
        !self.config.is_disabled(t.info().category)
    }

    /// Enabled templates in id order.
    pub fn templates(&self) -> impl Iterator<Item = &dyn DynTemplate> + '_ {
        self.templates
            .iter()
            .map(|t| &**t)
            .filter(move |t| self.is_enabled(*t))
    }

    /// Number of enabled templates.
    pub fn len(&self) -> usize {
        self.templates().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories that have at least one enabled template.
    pub fn list_categories(&self) -> BTreeSet<Category> {
        self.templates().map(|t| t.info().category).collect()
    }

    /// Template ids of `category`, ascending.
    ///
    /// Fails with [`CatalogError::UnknownCategory`] if the identifier is not
    /// one of the fixed categories or the category is disabled.
    pub fn list_templates(&self, category: &str) -> Result<Vec<&'static str>> {
        let category: Category = category.parse()?;
        if self.config.is_disabled(category) {
            return Err(CatalogError::UnknownCategory(category.to_string()));
        }
        Ok(self
            .templates()
            .filter(|t| t.info().category == category)
            .map(|t| t.info().id)
            .collect())
    }

    /// Look up an enabled template by id.
    pub fn get_template(&self, id: &str) -> Result<&dyn DynTemplate> {
        self.index
            .get(id)
            .map(|&i| &*self.templates[i])
            .filter(|t| self.is_enabled(*t))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Run template `id` on one input instance.
    pub fn run(&self, id: &str, input: &str) -> Result<String> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("template_run", id, input_len = input.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let template = self.get_template(id)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(title = template.info().title, category = %template.info().category, "resolved template");

        let limit = self.config.max_input_bytes;
        let result = if input.len() > limit {
            Err(InputError::TooLarge {
                len: input.len(),
                limit,
            })
        } else {
            template.run(input)
        };

        result.map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%source, "rejected malformed input");
            CatalogError::MalformedInput {
                id: id.to_string(),
                source,
            }
        })
    }

    /// Run a batch of invocations. Results are in request order.
    ///
    /// With the `parallel` feature the invocations are spread over the rayon
    /// pool; the results are the same as running them one by one.
    pub fn run_batch(&self, requests: &[RunRequest<'_>]) -> Vec<Result<String>> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("run_batch", requests = requests.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests
                .par_iter()
                .map(|r| self.run(r.id, r.input))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.run(r.id, r.input)).collect()
        }
    }

    /// Choose a template (or a pair) for a problem request.
    pub fn pick<R: Rng + ?Sized>(&self, selector: &Selector, rng: &mut R) -> Result<Selection> {
        selection::pick(self, selector, rng)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sorted_numerically() {
        let catalog = Catalog::new();
        let ids = catalog.list_templates("binary_search").unwrap();
        let numbers: Vec<u32> = ids.iter().map(|id| id.parse().unwrap()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
        assert!(ids.contains(&"1920"));
    }

    #[test]
    fn every_category_is_populated() {
        let catalog = Catalog::new();
        let cats = catalog.list_categories();
        assert_eq!(cats.len(), Category::ALL.len());
    }

    #[test]
    fn unknown_category_and_missing_id() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.list_templates("geometry"),
            Err(CatalogError::UnknownCategory(_))
        ));
        assert!(matches!(catalog.get_template("99999"), Err(CatalogError::NotFound(_))));
        assert!(matches!(catalog.run("99999", ""), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn oversized_input_is_malformed() {
        let catalog = CatalogBuilder::new().with_max_input_bytes(4).build().unwrap();
        let err = catalog.run("1850", "1 2 3 4").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedInput {
                source: InputError::TooLarge { len: 7, limit: 4 },
                ..
            }
        ));
    }

    #[test]
    fn disabled_category_is_hidden() {
        let catalog = CatalogBuilder::new().disable_category(Category::Math).build().unwrap();
        assert!(!catalog.list_categories().contains(&Category::Math));
        assert!(matches!(
            catalog.list_templates("math"),
            Err(CatalogError::UnknownCategory(_))
        ));
        assert!(matches!(catalog.run("1850", "3 6"), Err(CatalogError::NotFound(_))));
        assert!(catalog.templates().all(|t| t.info().category != Category::Math));
    }

    #[test]
    fn batch_preserves_order() {
        let catalog = Catalog::new();
        let reqs = [
            RunRequest::new("1850", "3 6\n"),
            RunRequest::new("nope", ""),
            RunRequest::new("2839", "18\n"),
        ];
        let out = catalog.run_batch(&reqs);
        assert_eq!(out[0].as_deref().unwrap(), "111\n");
        assert!(matches!(out[1], Err(CatalogError::NotFound(_))));
        assert_eq!(out[2].as_deref().unwrap(), "4\n");
    }
}
