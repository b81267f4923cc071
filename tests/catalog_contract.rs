use judge_templates::traits::{Field, Sample};
use judge_templates::{
    Catalog, CatalogBuilder, CatalogConfig, CatalogError, Category, InputError, Scanner, Template,
    TemplateInfo,
};

struct Doubler;

static DOUBLER: TemplateInfo = TemplateInfo {
    id: "99001",
    title: "Doubler",
    category: Category::Math,
    input: &[Field::int("x")],
    output: &[Field::int("y")],
    constraints: &["0 <= x <= 1000"],
    samples: &[Sample {
        input: "21\n",
        output: "42\n",
    }],
};

impl Template for Doubler {
    type Input = u32;
    type Output = u32;

    fn info(&self) -> &'static TemplateInfo {
        &DOUBLER
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<u32, InputError> {
        sc.next_in("x", 0..=1000u32)
    }

    fn solve(&self, x: &u32) -> u32 {
        x * 2
    }

    fn render(&self, y: &u32, out: &mut String) {
        out.push_str(&format!("{y}\n"));
    }
}

#[test]
fn lists_every_category_with_templates() {
    let catalog = Catalog::new();
    for category in Category::ALL {
        let ids = catalog.list_templates(category.as_str()).unwrap();
        assert!(!ids.is_empty(), "{category} has no templates");
        for id in ids {
            assert_eq!(catalog.get_template(id).unwrap().info().category, category);
        }
    }
}

#[test]
fn unknown_category_is_rejected() {
    let catalog = Catalog::new();
    let err = catalog.list_templates("geometry").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory(ref c) if c == "geometry"));
    assert!(err.is_caller_error());
}

#[test]
fn unknown_id_is_not_found() {
    let catalog = Catalog::new();
    assert!(matches!(catalog.get_template("0"), Err(CatalogError::NotFound(_))));
    let err = catalog.run("0", "1\n").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(ref id) if id == "0"));
}

#[test]
fn runs_by_identifier() {
    let catalog = Catalog::new();
    assert_eq!(catalog.run("1850", "3 6\n").unwrap(), "111\n");
    assert_eq!(catalog.run("2839", "18\n").unwrap(), "4\n");
    assert_eq!(catalog.run("1929", "3 16\n").unwrap(), "3\n5\n7\n11\n13\n");
}

#[test]
fn malformed_input_taxonomy() {
    let catalog = Catalog::new();
    let source = |id: &str, input: &str| match catalog.run(id, input) {
        Err(CatalogError::MalformedInput { id: got, source }) => {
            assert_eq!(got, id);
            source
        }
        other => panic!("expected malformed input, got {other:?}"),
    };

    assert!(matches!(source("2839", ""), InputError::Missing { field: "n" }));
    assert!(matches!(source("2839", "abc"), InputError::Invalid { field: "n", .. }));
    assert!(matches!(source("2839", "2"), InputError::OutOfRange { field: "n", .. }));
    assert!(matches!(source("2839", "18 19"), InputError::Trailing { .. }));
    assert!(matches!(source("2178", "2 2\n1a\n11\n"), InputError::Constraint { field: "row", .. }));
}

#[test]
fn structural_constraints_are_rejected() {
    let catalog = Catalog::new();
    let cases = [
        // repeated tree edges
        ("11437", "3\n1 2\n1 2\n1\n3 2\n"),
        ("11725", "3\n1 2\n1 2\n"),
        ("1240", "3 1\n1 2 5\n1 2 5\n1 3\n"),
        ("1967", "3\n1 2 1\n1 2 1\n"),
        // loop leaves vertex 3 cut off
        ("1167", "3\n1 2 1 -1\n2 1 1 -1\n3 3 1 -1\n"),
        // town 3 has no roads
        ("1238", "3 2 1\n1 2 4\n2 1 4\n"),
        ("1389", "3 1\n1 2\n"),
        // duplicates where values must be distinct
        ("3273", "3\n1 1 1\n2\n"),
        ("5639", "5\n3\n5\n"),
        ("16165", "1 1\nx\n2\ny\ny\ny\n1\n"),
        // no prime in range
        ("1929", "24 28\n"),
    ];
    for (id, input) in cases {
        match catalog.run(id, input) {
            Err(CatalogError::MalformedInput {
                id: got,
                source: InputError::Constraint { .. },
            }) => assert_eq!(got, id),
            other => panic!("{id} accepted {input:?}: {other:?}"),
        }
    }
}

#[test]
fn failed_run_produces_no_output() {
    let catalog = Catalog::new();
    // every query is read before anything is rendered
    let err = catalog.run("10816", "5\n3 5 3 2 5\n3\n5 3\n").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::MalformedInput {
            source: InputError::Missing { .. },
            ..
        }
    ));
}

#[test]
fn custom_template_registration() {
    let catalog = CatalogBuilder::new().register(Doubler).build().unwrap();
    assert_eq!(catalog.run("99001", "21").unwrap(), "42\n");
    assert!(catalog.list_templates("math").unwrap().contains(&"99001"));
    assert_eq!(catalog.len(), Catalog::new().len() + 1);

    let only = CatalogBuilder::new()
        .without_builtins()
        .register(Doubler)
        .build()
        .unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only.list_categories().into_iter().collect::<Vec<_>>(), vec![Category::Math]);
}

#[test]
fn duplicate_registration_fails() {
    let err = CatalogBuilder::new()
        .without_builtins()
        .register(Doubler)
        .register(Doubler)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CatalogError::DuplicateTemplate("99001")));
    assert!(!err.is_caller_error());
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        "max_input_bytes = 16\ndisabled_categories = [\"greedy\"]\ncombine_probability = 2.5\n",
    )
    .unwrap();

    let config = CatalogConfig::from_path(&path).unwrap();
    assert_eq!(config.max_input_bytes, 16);
    assert_eq!(config.combine_probability, 1.0);

    let catalog = CatalogBuilder::new().with_config(config).build().unwrap();
    assert!(matches!(catalog.run("2839", "18"), Err(CatalogError::NotFound(_))));
    assert!(matches!(
        catalog.run("1850", &format!("3 6{}", " ".repeat(20))),
        Err(CatalogError::MalformedInput {
            source: InputError::TooLarge { limit: 16, .. },
            ..
        })
    ));
}

#[test]
fn bad_config_is_reported() {
    assert!(matches!(
        CatalogConfig::from_toml_str("max_input_bytes = \"lots\""),
        Err(CatalogError::Config(_))
    ));
    assert!(matches!(
        CatalogConfig::from_toml_str("unknown_key = 1"),
        Err(CatalogError::Config(_))
    ));
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        CatalogConfig::from_path(dir.path().join("missing.toml")),
        Err(CatalogError::Io(_))
    ));
}

#[test]
fn schema_is_serializable() {
    let catalog = Catalog::new();
    let info = catalog.get_template("1967").unwrap().info();
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["id"], "1967");
    assert_eq!(json["category"], "tree");
    assert!(json["samples"].as_array().is_some_and(|s| !s.is_empty()));
}
