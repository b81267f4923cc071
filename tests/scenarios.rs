use judge_templates::Catalog;

fn run(id: &str, input: &str) -> String {
    Catalog::new().run(id, input).unwrap()
}

#[test]
fn duplicate_card_counts() {
    assert_eq!(run("10816", "5\n3 5 3 2 5\n3\n5 3 7\n"), "2 2 0\n");
}

#[test]
fn weighted_path_diameter() {
    assert_eq!(run("1967", "4\n1 2 1\n2 3 2\n3 4 3\n"), "6\n");
    assert_eq!(run("1167", "4\n1 2 1 -1\n2 1 1 3 2 -1\n3 2 2 4 3 -1\n4 3 3 -1\n"), "6\n");
}

#[test]
fn bracket_balance() {
    assert_eq!(run("4949", "([])\n([)]\n(((\n.\n"), "yes\nno\nno\n");
}

#[test]
fn full_grid_rectangle_sum() {
    assert_eq!(run("11660", "2 1\n1 1\n1 1\n1 1 2 2\n"), "4\n");
}

#[test]
fn compression_keeps_relative_order() {
    assert_eq!(run("18870", "5\n2 4 -10 4 -9\n"), "2 3 0 3 1\n");
    assert_eq!(run("18870", "6\n1000 999 1000 999 1000 999\n"), "1 0 1 0 1 0\n");
}

#[test]
fn bfs_reports_unreachable_sentinel() {
    assert_eq!(run("2178", "2 2\n10\n01\n"), "-1\n");
    assert_eq!(run("1916", "3\n1\n1 2 5\n1 3\n"), "-1\n");
}

#[test]
fn sentinel_terminated_inputs() {
    // trailing tokens after the sentinel are rejected
    let catalog = Catalog::new();
    assert!(catalog.run("4949", "()\n.\n()\n").is_err());
}
