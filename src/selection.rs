//! Random template selection for problem generation.
//!
//! A request names an optional category and a difficulty. The pool is the
//! enabled templates of that category, or every enabled template when the
//! category is absent or has none. Hard requests pair two distinct templates
//! with the configured probability.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::config::DEFAULT_COMBINE_PROBABILITY;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Tutorial,
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Tutorial,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Tutorial => "tutorial",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty `{s}` (expected tutorial, easy, medium or hard)"))
    }
}

/// What to pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub category: Option<Category>,
    pub difficulty: Difficulty,
}

/// Outcome of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Single(&'static str),
    /// Two distinct templates to be combined into one problem.
    Combined(&'static str, &'static str),
}

impl Selection {
    pub fn ids(&self) -> Vec<&'static str> {
        match *self {
            Selection::Single(a) => vec![a],
            Selection::Combined(a, b) => vec![a, b],
        }
    }
}

pub(crate) fn pick<R: Rng + ?Sized>(
    catalog: &Catalog,
    selector: &Selector,
    rng: &mut R,
) -> Result<Selection> {
    let mut pool: Vec<&'static str> = match selector.category {
        Some(c) => catalog
            .templates()
            .filter(|t| t.info().category == c)
            .map(|t| t.info().id)
            .collect(),
        None => Vec::new(),
    };
    if pool.is_empty() {
        pool = catalog.templates().map(|t| t.info().id).collect();
    }
    if pool.is_empty() {
        let wanted = selector.category.map_or("any", Category::as_str);
        return Err(CatalogError::NotFound(format!("no template available for `{wanted}`")));
    }

    let p = catalog.config().combine_probability;
    let p = if (0.0..=1.0).contains(&p) { p } else { DEFAULT_COMBINE_PROBABILITY };
    if selector.difficulty == Difficulty::Hard && pool.len() >= 2 && rng.gen_bool(p) {
        let pair: Vec<_> = pool.choose_multiple(rng, 2).copied().collect();
        if let [a, b] = pair[..] {
            return Ok(Selection::Combined(a, b));
        }
    }
    match pool.choose(rng) {
        Some(&id) => Ok(Selection::Single(id)),
        None => Err(CatalogError::NotFound("any".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_pick() {
        let catalog = Catalog::new();
        let sel = Selector {
            category: Some(Category::Greedy),
            difficulty: Difficulty::Hard,
        };
        let a = catalog.pick(&sel, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = catalog.pick(&sel, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn picks_stay_in_category() {
        let catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(1);
        let sel = Selector {
            category: Some(Category::Tree),
            difficulty: Difficulty::Easy,
        };
        for _ in 0..50 {
            for id in catalog.pick(&sel, &mut rng).unwrap().ids() {
                assert_eq!(catalog.get_template(id).unwrap().info().category, Category::Tree);
            }
        }
    }

    #[test]
    fn hard_always_combines_at_probability_one() {
        let catalog = CatalogBuilder::new()
            .with_config(crate::CatalogConfig {
                combine_probability: 1.0,
                ..Default::default()
            })
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let sel = Selector {
            category: Some(Category::Dp),
            difficulty: Difficulty::Hard,
        };
        for _ in 0..20 {
            match catalog.pick(&sel, &mut rng).unwrap() {
                Selection::Combined(a, b) => assert_ne!(a, b),
                other => panic!("expected a combined pick, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_hard_is_single() {
        let catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(11);
        for d in [Difficulty::Tutorial, Difficulty::Easy, Difficulty::Medium] {
            let sel = Selector { category: None, difficulty: d };
            assert!(matches!(catalog.pick(&sel, &mut rng).unwrap(), Selection::Single(_)));
        }
    }

    #[test]
    fn disabled_category_falls_back_to_everything() {
        let catalog = CatalogBuilder::new().disable_category(Category::Sorting).build().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let sel = Selector {
            category: Some(Category::Sorting),
            difficulty: Difficulty::Medium,
        };
        for _ in 0..30 {
            let id = catalog.pick(&sel, &mut rng).unwrap().ids()[0];
            assert_ne!(catalog.get_template(id).unwrap().info().category, Category::Sorting);
        }
    }

    #[test]
    fn empty_catalog_is_not_found() {
        let catalog = CatalogBuilder::new().without_builtins().build().unwrap();
        let err = catalog
            .pick(&Selector::default(), &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn difficulty_parses() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
