//! Command-line front end for the template catalog.
//!
//! Usage:
//!   cargo run --features cli --bin templates -- categories
//!   cargo run --features cli --bin templates -- list tree
//!   cargo run --features cli --bin templates -- show 1967 --json
//!   cargo run --features cli --bin templates -- run 1850 --input instance.txt
//!   cargo run --features cli --bin templates -- pick --difficulty hard --seed 7
//!   cargo run --features cli --bin templates -- probe --format table
//!
//! `RUST_LOG=judge_templates=debug` turns on the catalog's spans.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use judge_templates::{Catalog, CatalogBuilder, CatalogConfig, Category, Difficulty, Selector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

#[derive(Parser, Debug)]
#[command(name = "templates")]
#[command(about = "Browse, run and select competitive-programming solver templates")]
struct Args {
    /// TOML file with catalog settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the enabled categories
    Categories,
    /// List the templates of one category
    List { category: String },
    /// Show a template's schema, constraints and samples
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Run a template on one input instance
    Run {
        id: String,
        /// Read the instance from this file instead of stdin
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
    /// Pick a template (or a pair of templates) for a new problem
    Pick {
        #[arg(long, short = 'c')]
        category: Option<Category>,
        #[arg(long, short = 'd', default_value = "medium")]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run every sample of every template and report timings
    Probe {
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let catalog = match load_catalog(args.config.as_ref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("templates: {err}");
            return ExitCode::from(1);
        }
    };

    match execute(&catalog, args.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("templates: {err}");
            if err.is_caller_error() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn load_catalog(path: Option<&PathBuf>) -> judge_templates::Result<Catalog> {
    let config = match path {
        Some(path) => CatalogConfig::from_path(path)?,
        None => CatalogConfig::default(),
    };
    CatalogBuilder::new().with_config(config).build()
}

fn execute(catalog: &Catalog, command: Command) -> judge_templates::Result<ExitCode> {
    match command {
        Command::Categories => {
            for category in catalog.list_categories() {
                println!("{category}");
            }
        }
        Command::List { category } => {
            for id in catalog.list_templates(&category)? {
                let info = catalog.get_template(id)?.info();
                println!("{id}\t{}", info.title);
            }
        }
        Command::Show { id, json } => {
            let info = catalog.get_template(&id)?.info();
            if json {
                match serde_json::to_string_pretty(info) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("templates: {err}");
                        return Ok(ExitCode::from(1));
                    }
                }
            } else {
                print_info(info);
            }
        }
        Command::Run { id, input } => {
            let text = match input {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print!("{}", catalog.run(&id, &text)?);
        }
        Command::Pick {
            category,
            difficulty,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let selector = Selector { category, difficulty };
            let selection = catalog.pick(&selector, &mut rng)?;
            for id in selection.ids() {
                let info = catalog.get_template(id)?.info();
                println!("{id}\t{}\t{}", info.category, info.title);
            }
        }
        Command::Probe { format } => {
            let measurements = probe(catalog);
            print_summary(&measurements);
            format.write(&measurements);
            if measurements
                .iter()
                .any(|m| matches!(m.verification_status, VerificationStatus::Failed))
            {
                return Ok(ExitCode::from(1));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_info(info: &judge_templates::TemplateInfo) {
    println!("{} {} [{}]", info.id, info.title, info.category);
    println!("input:");
    for field in info.input {
        println!("  {:<12} {:?} {:?}", field.name, field.kind, field.arity);
    }
    println!("output:");
    for field in info.output {
        println!("  {:<12} {:?} {:?}", field.name, field.kind, field.arity);
    }
    if !info.constraints.is_empty() {
        println!("constraints:");
        for c in info.constraints {
            println!("  {c}");
        }
    }
    for (idx, sample) in info.samples.iter().enumerate() {
        println!("sample {}:", idx + 1);
        println!("{}", sample.input.trim_end());
        println!("---");
        println!("{}", sample.output.trim_end());
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    template: &'static str,
    sample: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn probe(catalog: &Catalog) -> Vec<Measurement> {
    let mut sys = System::new();
    let total = catalog.len();
    let mut measurements = Vec::new();
    for (idx, template) in catalog.templates().enumerate() {
        let info = template.info();
        eprint!("[{}/{}] {} {}... ", idx + 1, total, info.id, info.title);
        let before = measurements.len();
        for (n, sample) in info.samples.iter().enumerate() {
            let m = measure(info.id, n + 1, &mut sys, || match catalog.run(info.id, sample.input) {
                Ok(out) if out == sample.output => (VerificationStatus::Passed, None),
                Ok(out) => (
                    VerificationStatus::Failed,
                    Some(format!("expected {:?}, got {:?}", sample.output, out)),
                ),
                Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
            });
            measurements.push(m);
        }
        let failed = measurements[before..]
            .iter()
            .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
            .count();
        let icon = if failed == 0 { "✓" } else { "✗" };
        eprintln!("{icon} {} sample(s), {failed} failed", measurements.len() - before);
    }
    measurements
}

fn measure<F>(template: &'static str, sample: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        template,
        sample,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[Measurement]) {
    let total = measurements.len();
    let failed: Vec<_> = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .collect();
    let wall: f64 = measurements.iter().map(|m| m.wall_s).sum();

    eprintln!();
    eprintln!("Samples: {total}, passed: {}, failed: {}", total - failed.len(), failed.len());
    eprintln!("Total wall time: {wall:.3}s");
    if let Some(slowest) = measurements
        .iter()
        .max_by(|a, b| a.wall_s.total_cmp(&b.wall_s))
    {
        eprintln!("Slowest: {} sample {} ({:.3}s)", slowest.template, slowest.sample, slowest.wall_s);
    }
    for m in failed {
        eprintln!("  ✗ {} sample {}", m.template, m.sample);
        if let Some(ref detail) = m.verification_detail {
            eprintln!("     Error: {detail}");
        }
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) {
    println!("template,sample,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.6},{},{},\"{}\"",
            m.template,
            m.sample,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let col1 = measurements
        .iter()
        .map(|m| m.template.len())
        .max()
        .unwrap_or(0)
        .max("template".len());

    println!(
        "{:<col1$}  {:>6}  {:>10}  {:>14}  {:>8}  {}",
        "template", "sample", "wall_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<6}  {:-<10}  {:-<14}  {:-<8}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>6}  {:>10.6}  {:>14}  {:>8}  {}",
            m.template,
            m.sample,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    let rows: Vec<_> = measurements
        .iter()
        .map(|m| {
            serde_json::json!({
                "template": m.template,
                "sample": m.sample,
                "wall_s": m.wall_s,
                "rss_delta_kib": m.rss_delta_kib,
                "verification": {
                    "status": m.verification_status.label(),
                    "detail": m.verification_detail,
                },
            })
        })
        .collect();
    match serde_json::to_string_pretty(&rows) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("templates: {err}"),
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_json_prints_schema() {
        let catalog = Catalog::new();
        let code = execute(
            &catalog,
            Command::Show {
                id: "1967".into(),
                json: true,
            },
        );
        assert!(matches!(code, Ok(c) if c == ExitCode::SUCCESS));
    }

    #[test]
    fn show_unknown_id_is_caller_error() {
        let catalog = Catalog::new();
        let err = execute(
            &catalog,
            Command::Show {
                id: "00000".into(),
                json: true,
            },
        )
        .unwrap_err();
        assert!(err.is_caller_error());
    }
}
