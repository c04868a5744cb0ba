#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use officedir_calc::{estimate, SpaceKind, SpaceProgram};
use officedir_store::{seed_data_root, DirectoryStore, JsonCollection, MarkerSource};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Command as ProcessCommand;
use std::process::ExitCode as ProcessExitCode;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    DependencyFailure = 4,
}

#[derive(Parser)]
#[command(name = "officedir")]
#[command(about = "officedir directory operations CLI")]
#[command(version)]
struct Cli {
    /// Emit machine-readable JSON instead of human output.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and maintain the flat-file data root.
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },
    /// Price a space program from the command line.
    Estimate {
        /// Comma-separated kind=count pairs, e.g. ceoOffice=1,standardCubicle=6
        #[arg(long)]
        counts: String,
    },
    /// Map markers for one collection.
    Markers {
        #[arg(long, default_value = "data")]
        root: PathBuf,
        #[arg(long, default_value = "buildings")]
        source: String,
    },
    /// Run the HTTP server binary.
    Serve,
}

#[derive(Subcommand)]
enum DataCommand {
    /// Strict-parse every collection and report failures.
    Validate {
        #[arg(long, default_value = "data")]
        root: PathBuf,
    },
    /// Write the bundled starter fixtures.
    Seed {
        #[arg(long, default_value = "data")]
        root: PathBuf,
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Show one collection.
    List {
        #[arg(long, default_value = "data")]
        root: PathBuf,
        #[arg(long)]
        collection: String,
    },
}

struct CliError {
    exit_code: ExitCode,
    message: String,
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            message: message.into(),
        }
    }

    fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    fn dependency(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::DependencyFailure,
            message: message.into(),
        }
    }
}

struct OutputMode {
    json: bool,
    quiet: bool,
}

impl OutputMode {
    fn emit(&self, human: &str, machine: &Value) {
        if self.json {
            println!("{machine}");
        } else if !self.quiet {
            println!("{human}");
        }
    }
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    let output = OutputMode {
        json: cli.json,
        quiet: cli.quiet,
    };
    match run(cli.command, &output) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(e) => {
            if output.json {
                eprintln!("{}", json!({"error": e.message}));
            } else {
                eprintln!("error: {}", e.message);
            }
            ProcessExitCode::from(e.exit_code as u8)
        }
    }
}

fn run(command: Commands, output: &OutputMode) -> Result<(), CliError> {
    match command {
        Commands::Data { command } => match command {
            DataCommand::Validate { root } => validate_data(&root, output),
            DataCommand::Seed { root, force } => seed_data(&root, force, output),
            DataCommand::List { root, collection } => list_collection(&root, &collection, output),
        },
        Commands::Estimate { counts } => run_estimate(&counts, output),
        Commands::Markers { root, source } => run_markers(&root, &source, output),
        Commands::Serve => run_serve(),
    }
}

fn validate_data(root: &std::path::Path, output: &OutputMode) -> Result<(), CliError> {
    let store = DirectoryStore::new(root);
    let mut counts = serde_json::Map::new();
    let mut errors: Vec<String> = Vec::new();

    macro_rules! check {
        ($name:expr, $ty:ty) => {{
            let collection = store.collection($name);
            match collection.read_strict::<$ty>() {
                Ok(records) => {
                    for record in &records {
                        if let Err(e) = record.validate() {
                            errors.push(format!("{}: {e}", $name));
                        }
                    }
                    counts.insert($name.to_string(), json!(records.len()));
                }
                Err(e) => errors.push(e.to_string()),
            }
        }};
    }

    check!("submarkets", officedir_model::Submarket);
    check!("buildings", officedir_model::Building);
    check!("coworking", officedir_model::CoworkingSpace);
    check!("companies", officedir_model::Company);

    let posts = store.collection("blog-posts");
    match posts.read_strict::<officedir_model::BlogPost>() {
        Ok(records) => {
            counts.insert("blog-posts".to_string(), json!(records.len()));
        }
        Err(e) => errors.push(e.to_string()),
    }
    let references = store.collection("references");
    match references.read_object_strict::<officedir_model::ReferenceBook>() {
        Ok(book) => {
            counts.insert(
                "references".to_string(),
                json!(book.values().map(Vec::len).sum::<usize>()),
            );
        }
        Err(e) => errors.push(e.to_string()),
    }
    counts.insert("insights".to_string(), json!(store.insights().all().len()));

    let machine = json!({"root": root.display().to_string(), "counts": counts, "errors": errors});
    let mut human = format!("validated data root {}", root.display());
    for (name, count) in &counts {
        human.push_str(&format!("\n  {name}: {count} records"));
    }
    for error in &errors {
        human.push_str(&format!("\n  error: {error}"));
    }
    output.emit(&human, &machine);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::validation(format!(
            "{} validation failure(s)",
            errors.len()
        )))
    }
}

fn seed_data(root: &std::path::Path, force: bool, output: &OutputMode) -> Result<(), CliError> {
    let outcome = seed_data_root(root, force).map_err(|e| CliError::dependency(e.to_string()))?;
    let machine = json!({
        "root": root.display().to_string(),
        "written": outcome.written,
        "skipped": outcome.skipped,
    });
    let human = format!(
        "seeded {} ({} written, {} skipped)",
        root.display(),
        outcome.written.len(),
        outcome.skipped.len()
    );
    output.emit(&human, &machine);
    Ok(())
}

fn list_collection(
    root: &std::path::Path,
    collection: &str,
    output: &OutputMode,
) -> Result<(), CliError> {
    let records: Vec<Value> = JsonCollection::new(root, collection)
        .read_strict()
        .map_err(|e| CliError::validation(e.to_string()))?;
    let ids: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_str))
        .collect();
    let mut human = format!("{collection}: {} records", records.len());
    for id in &ids {
        human.push_str(&format!("\n  {id}"));
    }
    output.emit(&human, &json!({"collection": collection, "records": records}));
    Ok(())
}

fn run_estimate(counts: &str, output: &OutputMode) -> Result<(), CliError> {
    let mut program = SpaceProgram::new();
    for pair in counts.split(',').filter(|p| !p.trim().is_empty()) {
        let (kind, count) = pair
            .split_once('=')
            .ok_or_else(|| CliError::usage(format!("invalid count pair: {pair}")))?;
        let kind: SpaceKind = serde_json::from_value(Value::String(kind.trim().to_string()))
            .map_err(|_| CliError::usage(format!("unknown space kind: {}", kind.trim())))?;
        let count: i64 = count
            .trim()
            .parse()
            .map_err(|_| CliError::usage(format!("invalid count: {}", count.trim())))?;
        program.set(kind, count);
    }

    let est = estimate(&program);
    let mut human = format!(
        "subtotal {} ft2\ncirculation allowance {} ft2\nusable area {} ft2\ngross up {} ft2\nrentable area {} ft2",
        est.subtotal, est.circulation_allowance, est.usable_area, est.gross_up, est.rentable_area
    );
    for cost in &est.costs {
        human.push_str(&format!(
            "\n{} (${}/RSF): ${}/yr (${}/mo)",
            cost.class.label(),
            cost.rate_per_rsf,
            cost.annual,
            cost.monthly
        ));
    }
    output.emit(&human, &json!({"program": program, "estimate": est}));
    Ok(())
}

fn run_markers(root: &std::path::Path, source: &str, output: &OutputMode) -> Result<(), CliError> {
    let source = MarkerSource::parse(source).map_err(|e| CliError::usage(e.to_string()))?;
    let markers = DirectoryStore::new(root).markers(source);
    let mut human = format!("{}: {} markers", source.as_str(), markers.len());
    for marker in &markers {
        human.push_str(&format!(
            "\n  {} ({:.4}, {:.4})",
            marker.label, marker.lat, marker.lng
        ));
    }
    output.emit(&human, &json!(markers));
    Ok(())
}

/// Hand the terminal to the server binary that ships next to this one.
fn run_serve() -> Result<(), CliError> {
    let current_exe = std::env::current_exe()
        .map_err(|e| CliError::dependency(format!("failed to determine executable path: {e}")))?;
    let bin_dir = current_exe
        .parent()
        .ok_or_else(|| CliError::dependency("failed to resolve executable directory"))?;
    let server_bin = bin_dir.join("officedir-server");

    let status = ProcessCommand::new(&server_bin).status().map_err(|e| {
        CliError::dependency(format!(
            "failed to start officedir-server at {}: {e}",
            server_bin.display()
        ))
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::dependency(format!(
            "officedir-server exited with {status}"
        )))
    }
}
