// attest/src/main.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Infrastructure (Config & Adapters)
use attest_core::infrastructure::adapters::DataFusionLoader;
use attest_core::infrastructure::config::load_check_file;

// Domain (Registry)
use attest_core::domain::metrics::MetricRegistry;

// Application (Use Cases)
use attest_core::application::{run_check, run_diagnostics};
use attest_core::ports::BatchLoader;

#[derive(Parser)]
#[command(name = "attest")]
#[command(about = "Expectation-based data quality checks for tabular batches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 🧪 Runs the expectations of a check file against its dataset
    Check {
        /// Path to the YAML check file
        #[arg(long, default_value = "checks.yaml")]
        check_file: PathBuf,
    },

    /// 🩺 Executes the declared example fixtures and prints the JSON report
    Diagnostics,

    /// 🔍 Inspects a dataset (schema + sample rows)
    Inspect {
        /// Path to the CSV dataset
        dataset: PathBuf,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug attest check ... to see metric intermediates
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: RUN CHECK FILE ---
        Commands::Check { check_file } => {
            let start = std::time::Instant::now();

            println!("⚙️  Loading check file...");
            let check = match load_check_file(&check_file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("❌ Could not load '{}': {}", check_file.display(), e);
                    std::process::exit(1);
                }
            };
            println!(
                "   Dataset: {} ({} expectations)",
                check.dataset.display(),
                check.expectations.len()
            );

            let loader = DataFusionLoader::new();
            let registry = MetricRegistry::builtin();

            let run = match run_check(&loader, &registry, &check.dataset, &check.expectations).await
            {
                Ok(run) => run,
                Err(e) => {
                    eprintln!("\n💥 CHECK RUN FAILED: {}", e);
                    std::process::exit(1);
                }
            };

            for result in &run.results {
                let mark = if result.success { "✅" } else { "❌" };
                println!(
                    "  {} {} (reported: {}, observed metric outcome: {})",
                    mark, result.expectation, result.success, result.observed_outcome
                );
            }

            if run.all_succeeded() {
                println!("\n✨ SUCCESS! Check finished in {:.2?}", start.elapsed());
            } else {
                eprintln!("\n❌ FAILURE. Some expectations did not hold.");
                std::process::exit(1);
            }
        }

        // --- USE CASE: SELF-TEST DIAGNOSTICS ---
        Commands::Diagnostics => {
            let registry = MetricRegistry::builtin();
            match run_diagnostics(&registry) {
                Ok(report) => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Err(e) => {
                    eprintln!("❌ Diagnostics failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: INSPECT DATASET ---
        Commands::Inspect { dataset, limit } => {
            let loader = DataFusionLoader::new();
            let batch = match loader.load(&dataset).await {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("❌ Could not load '{}': {}", dataset.display(), e);
                    std::process::exit(1);
                }
            };

            let mut schema_table = comfy_table::Table::new();
            schema_table.set_header(vec!["Column", "Type"]);
            for name in batch.column_names() {
                schema_table.add_row(vec![name, batch.column_type(name).unwrap_or("?")]);
            }
            println!("{schema_table}");
            println!("{} rows", batch.num_rows());

            if batch.num_rows() > 0 && limit > 0 {
                let names: Vec<String> = batch.column_names().map(String::from).collect();
                let mut sample = comfy_table::Table::new();
                sample.set_header(names.clone());
                for row in 0..batch.num_rows().min(limit) {
                    let cells: Vec<String> = names
                        .iter()
                        .filter_map(|n| batch.column(n).ok())
                        .map(|col| col[row].to_string())
                        .collect();
                    sample.add_row(cells);
                }
                println!("{sample}");
            }
        }
    }

    Ok(())
}
