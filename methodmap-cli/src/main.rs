//! MethodMap CLI — step listings, content export and validation.
//!
//! Commands:
//! - `steps` — print the numbered step listing for one or both processes
//! - `export` — serialize the built-in content library as JSON or TOML
//! - `validate` — parse and validate an external TOML content file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use methodmap_core::{ContentLibrary, Process, ProcessId, StepNavigator};

#[derive(Parser)]
#[command(
    name = "methodmap",
    about = "MethodMap CLI — scientific method vs engineering design process"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the numbered step listing.
    Steps {
        /// Process: engineering or scientific. Both when omitted.
        #[arg(long)]
        process: Option<String>,

        /// Include the per-step progress percentage column.
        #[arg(long, default_value_t = false)]
        progress: bool,
    },
    /// Serialize the built-in content library.
    Export {
        /// Output format: json or toml.
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Parse and validate an external TOML content file.
    Validate {
        /// Path to a content TOML file.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Steps { process, progress } => cmd_steps(process.as_deref(), progress),
        Commands::Export { format } => cmd_export(&format),
        Commands::Validate { file } => cmd_validate(&file),
    }
}

fn cmd_steps(process: Option<&str>, progress: bool) -> Result<()> {
    let library = ContentLibrary::default();

    let ids: Vec<ProcessId> = match process {
        Some(name) => {
            let id = name
                .parse::<ProcessId>()
                .map_err(|e| anyhow::anyhow!(e))?;
            vec![id]
        }
        None => ProcessId::ALL.to_vec(),
    };

    for id in ids {
        print_process(library.process(id), id, progress);
        println!();
    }
    Ok(())
}

fn print_process(process: &Process, id: ProcessId, progress: bool) {
    println!("{} {}  ⟨{}⟩", process.icon.glyph(), process.label, process.badge);
    println!("{}", process.intro);
    println!();

    // Walk a navigator so the printed percentages are the ones the UI shows.
    let mut nav = StepNavigator::with_defaults();
    nav.select_process(id);

    for (index, step) in process.steps.iter().enumerate() {
        nav.jump_to(index);
        if progress {
            println!(
                "  {:>2}. [{:>3}%] {} {} — {}",
                index + 1,
                nav.progress_percent(),
                step.icon.glyph(),
                step.title,
                step.detail
            );
        } else {
            println!(
                "  {:>2}. {} {} — {}",
                index + 1,
                step.icon.glyph(),
                step.title,
                step.detail
            );
        }
    }
    println!();
    println!("Note: {}", process.note);
}

fn cmd_export(format: &str) -> Result<()> {
    let library = ContentLibrary::default();
    match format {
        "json" => {
            let text = serde_json::to_string_pretty(&library)
                .context("serialize content library to JSON")?;
            println!("{text}");
        }
        "toml" => {
            let text =
                toml::to_string_pretty(&library).context("serialize content library to TOML")?;
            println!("{text}");
        }
        other => bail!("unknown format '{other}' (expected 'json' or 'toml')"),
    }
    Ok(())
}

fn cmd_validate(file: &PathBuf) -> Result<()> {
    let library = ContentLibrary::from_file(file)
        .with_context(|| format!("validate {}", file.display()))?;
    println!(
        "OK: {} processes, {} total steps",
        ProcessId::ALL.len(),
        library.total_step_count()
    );
    Ok(())
}
