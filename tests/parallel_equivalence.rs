#![cfg(feature = "parallel")]

use judge_templates::{Catalog, RunRequest};
use proptest::prelude::*;

fn sample_requests(catalog: &Catalog) -> Vec<RunRequest<'static>> {
    catalog
        .templates()
        .flat_map(|t| {
            let info = t.info();
            info.samples.iter().map(move |s| RunRequest::new(info.id, s.input))
        })
        .collect()
}

#[test]
fn batch_matches_sequential_runs() {
    let catalog = Catalog::new();
    let requests = sample_requests(&catalog);
    let batch = catalog.run_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (req, got) in requests.iter().zip(&batch) {
        let sequential = catalog.run(req.id, req.input).unwrap();
        assert_eq!(got.as_deref().unwrap(), sequential, "template {}", req.id);
    }
}

#[test]
fn shared_catalog_across_threads() {
    let catalog = Catalog::new();
    let requests = sample_requests(&catalog);
    let expected: Vec<String> = requests
        .iter()
        .map(|r| catalog.run(r.id, r.input).unwrap())
        .collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (req, want) in requests.iter().zip(&expected) {
                    assert_eq!(&catalog.run(req.id, req.input).unwrap(), want);
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn batch_order_is_request_order(queries in prop::collection::vec(1u32..=100_000, 1..50)) {
        let inputs: Vec<String> = queries.iter().map(|&k| format!("{}\n", k.max(3).min(5000))).collect();
        let catalog = Catalog::new();
        let requests: Vec<_> = inputs.iter().map(|i| RunRequest::new("2839", i)).collect();
        let batch = catalog.run_batch(&requests);
        for (req, got) in requests.iter().zip(batch) {
            prop_assert_eq!(got.unwrap(), catalog.run(req.id, req.input).unwrap());
        }
    }
}
