//! Judge Templates
//!
//! A catalog of self-contained solvers for competitive-programming judge
//! problems, grouped by algorithmic category and served through a small
//! registry API.
//!
//! ## Core idea
//! 1. Each judge problem is a [`Template`]: it parses a positional text input
//!    into a typed instance, solves it with one classical algorithm, and
//!    renders the answer in the judge's output format.
//! 2. Templates are stateless unit structs. All working storage is allocated
//!    per invocation, so templates can run concurrently.
//! 3. A [`Catalog`] indexes templates by id and category and runs them,
//!    turning schema violations into [`CatalogError::MalformedInput`].
//!
//! ## Quick start
//! ```
//! use judge_templates::Catalog;
//!
//! let catalog = Catalog::new();
//! assert!(catalog.list_templates("tree").unwrap().contains(&"1967"));
//!
//! let out = catalog.run("4949", "([])\n([)]\n(((\n.\n").unwrap();
//! assert_eq!(out, "yes\nno\nno\n");
//!
//! let err = catalog.run("1920", "3\n1 2\n").unwrap_err();
//! assert!(err.is_caller_error());
//! ```
//!
//! ## Built-in templates
//! The `templates` module contains one sub-module per category:
//! - searching: binary search, parametric search
//! - graphs: traversal, shortest paths, trees
//! - dynamic programming, greedy, sorting, prefix sums
//! - number theory (sieve, gcd), strings, bit masks
//! - exhaustive search: brute force, backtracking, divide and conquer
//! - plain implementation/simulation problems
//!
//! Every template carries its input and output schema, its documented input
//! domain and at least one sample instance.

pub mod builder;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
mod graph;
pub mod grid;
pub mod scanner;
pub mod selection;
pub mod sieve;
pub mod templates;
pub mod traits;
pub mod utils;

pub use crate::builder::CatalogBuilder;
pub use crate::catalog::{Catalog, RunRequest};
pub use crate::category::Category;
pub use crate::config::CatalogConfig;
pub use crate::error::{CatalogError, InputError, Result};
pub use crate::scanner::Scanner;
pub use crate::selection::{Difficulty, Selection, Selector};
pub use crate::traits::{DynTemplate, Template, TemplateInfo};
