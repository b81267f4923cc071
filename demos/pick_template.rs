//! Example: choose templates for generated problems.
//!
//! Run with:
//! `cargo run --example pick_template`

use judge_templates::{CatalogBuilder, CatalogConfig, Category, Difficulty, Selection, Selector};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> judge_templates::Result<()> {
    let config = CatalogConfig::from_toml_str(
        r#"
        disabled_categories = ["bruteforcing"]
        combine_probability = 0.5
        "#,
    )?;
    let catalog = CatalogBuilder::new().with_config(config).build()?;
    let mut rng = StdRng::seed_from_u64(2024);

    let requests = [
        Selector {
            category: Some(Category::Tree),
            difficulty: Difficulty::Easy,
        },
        Selector {
            category: Some(Category::Dp),
            difficulty: Difficulty::Hard,
        },
        Selector {
            category: Some(Category::Bruteforcing),
            difficulty: Difficulty::Medium,
        },
        Selector {
            category: None,
            difficulty: Difficulty::Hard,
        },
    ];

    for selector in &requests {
        let wanted = selector.category.map_or("any", Category::as_str);
        match catalog.pick(selector, &mut rng)? {
            Selection::Single(id) => {
                let info = catalog.get_template(id)?.info();
                println!("{wanted}/{}: {id} {}", selector.difficulty, info.title);
            }
            Selection::Combined(a, b) => {
                let ta = catalog.get_template(a)?.info().title;
                let tb = catalog.get_template(b)?.info().title;
                println!("{wanted}/{}: {a} {ta} + {b} {tb}", selector.difficulty);
            }
        }
    }
    Ok(())
}
