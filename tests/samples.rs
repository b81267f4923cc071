use judge_templates::Catalog;

#[test]
fn every_sample_reproduces_its_output() {
    let catalog = Catalog::new();
    let mut failures = Vec::new();
    let mut checked = 0usize;
    for template in catalog.templates() {
        let info = template.info();
        assert!(!info.samples.is_empty(), "{} has no samples", info.id);
        for (idx, sample) in info.samples.iter().enumerate() {
            checked += 1;
            match catalog.run(info.id, sample.input) {
                Ok(out) if out == sample.output => {}
                Ok(out) => failures.push(format!(
                    "{} sample {}: expected {:?}, got {:?}",
                    info.id,
                    idx + 1,
                    sample.output,
                    out
                )),
                Err(err) => failures.push(format!("{} sample {}: {err}", info.id, idx + 1)),
            }
        }
    }
    assert!(checked >= catalog.len());
    assert!(failures.is_empty(), "sample mismatches:\n{}", failures.join("\n"));
}

#[test]
fn outputs_end_with_newline() {
    let catalog = Catalog::new();
    for template in catalog.templates() {
        let info = template.info();
        for sample in info.samples {
            assert!(
                sample.output.is_empty() || sample.output.ends_with('\n'),
                "{} sample output lacks a trailing newline",
                info.id
            );
        }
    }
}

#[test]
fn schemas_are_described() {
    let catalog = Catalog::new();
    for template in catalog.templates() {
        let info = template.info();
        assert!(!info.title.is_empty(), "{} has no title", info.id);
        assert!(!info.input.is_empty(), "{} has no input fields", info.id);
        assert!(!info.output.is_empty(), "{} has no output fields", info.id);
        assert!(info.id.parse::<u32>().is_ok(), "{} is not numeric", info.id);
    }
}
