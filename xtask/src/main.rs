use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use likewise::profile::{forward, forward_like, like, CvQualifiers, QualifiedType, QualifierProfile, ValueCategory};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "likewise workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transfer and forwarding tables
    Tables {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Md)]
        format: Format,

        /// Target base type the models are transferred onto
        #[arg(long, default_value = "int")]
        base: String,
    },
    /// Run the chain benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Md,
    Json,
}

#[derive(Serialize)]
struct LikeRow {
    model: String,
    target: String,
    result: String,
}

#[derive(Serialize)]
struct ForwardRow {
    model: String,
    argument: String,
    forward_like: Option<String>,
    forward: Option<String>,
}

#[derive(Serialize)]
struct Tables {
    like: Vec<LikeRow>,
    forward: Vec<ForwardRow>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tables { format, base } => {
            let tables = build_tables(&base)?;
            match format {
                Format::Md => print_markdown(&tables)?,
                Format::Json => println!("{}", serde_json::to_string_pretty(&tables)?),
            }
        }
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn build_tables(base: &str) -> Result<Tables> {
    // Reject bases the parser would not read back.
    let probe: QualifiedType = base.parse().with_context(|| format!("invalid base type `{base}`"))?;
    let base = probe.base;

    let mut like_rows = Vec::new();
    for model in QualifierProfile::ALL {
        for target in QualifierProfile::ALL {
            let target = QualifiedType::new(base.clone(), target);
            like_rows.push(LikeRow {
                model: model.to_string(),
                target: target.to_string(),
                result: like(model, &target).to_string(),
            });
        }
    }

    let mut forward_rows = Vec::new();
    for model in QualifierProfile::ALL {
        for category in [ValueCategory::Lvalue, ValueCategory::Rvalue] {
            for cv in CvQualifiers::ALL {
                let arg = QualifiedType::new(base.clone(), QualifierProfile::new(category, cv));
                let native_model = QualifiedType::new(base.clone(), model);
                forward_rows.push(ForwardRow {
                    model: model.to_string(),
                    argument: arg.to_string(),
                    forward_like: forward_like(model, &arg).ok().map(|t| t.to_string()),
                    forward: forward(&native_model, &arg).ok().map(|t| t.to_string()),
                });
            }
        }
    }

    Ok(Tables {
        like: like_rows,
        forward: forward_rows,
    })
}

fn print_markdown(tables: &Tables) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "## like")?;
    writeln!(out)?;
    writeln!(out, "| Model | Target | Result |")?;
    writeln!(out, "|---|---|---|")?;
    for row in &tables.like {
        writeln!(out, "| `{}` | `{}` | `{}` |", row.model, row.target, row.result)?;
    }

    writeln!(out)?;
    writeln!(out, "## forward_like vs forward")?;
    writeln!(out)?;
    writeln!(out, "| Model | Argument | forward_like | forward |")?;
    writeln!(out, "|---|---|---|---|")?;
    let cell = |v: &Option<String>| v.as_ref().map_or_else(|| "rejected".to_owned(), |s| format!("`{s}`"));
    for row in &tables.forward {
        writeln!(
            out,
            "| `{}` | `{}` | {} | {} |",
            row.model,
            row.argument,
            cell(&row.forward_like),
            cell(&row.forward)
        )?;
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running chain benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "-p", "likewise", "--bench", "tee_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run tee_benchmark")?;
    if !status.success() {
        anyhow::bail!("tee_benchmark failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, f64> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(report_path)?;
    writeln!(file, "# Chain Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean |")?;
    writeln!(file, "|---|---|")?;
    for (name, time_ns) in &results {
        let time_str = if *time_ns > 1_000_000.0 {
            format!("{:.2} ms", time_ns / 1_000_000.0)
        } else if *time_ns > 1_000.0 {
            format!("{:.2} µs", time_ns / 1_000.0)
        } else {
            format!("{time_ns:.0} ns")
        };
        writeln!(file, "| {name} | {time_str} |")?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        // Structure: <group>/<bench>[/<input>]/new/estimates.json
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(name) = bench_dir.strip_prefix(root) else { continue };
        if name.components().any(|c| c.as_os_str() == "report") {
            continue;
        }

        let mean = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64());
        if let Some(time_ns) = mean.filter(|t| *t > 0.0) {
            results.insert(name.display().to_string(), time_ns);
        }
    }
}
