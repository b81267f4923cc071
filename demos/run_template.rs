//! Example: look up a template, show its schema and run it.
//!
//! Run with:
//! `cargo run --example run_template`

use judge_templates::Catalog;

fn main() {
    let catalog = Catalog::new();

    let template = match catalog.get_template("11437") {
        Ok(t) => t,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let info = template.info();
    println!("{} {} ({})", info.id, info.title, info.category);
    for field in info.input {
        println!("  input  {:<8} {:?}", field.name, field.arity);
    }
    for constraint in info.constraints {
        println!("  - {constraint}");
    }

    // Lowest common ancestors in a tree rooted at 1.
    let input = "7\n1 2\n1 3\n2 4\n2 5\n3 6\n3 7\n3\n4 5\n4 6\n6 7\n";
    match catalog.run("11437", input) {
        Ok(out) => print!("{out}"),
        Err(err) => eprintln!("{err}"),
    }

    // A malformed instance is rejected as a whole.
    if let Err(err) = catalog.run("11437", "3\n1 2\n") {
        println!("rejected: {err}");
    }
}
