use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use module_carver::commands::{
    extract_command, reconcile_command, resolve_config, show_command, table_command,
};
use module_carver::init_tracing;

/// Function extraction and module-layout reconciliation CLI.
///
/// This CLI is a thin wrapper around `carve-core` (exposed in code as `carve_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "module-carver",
    version,
    about = "Split a monolithic source file into functions and map them onto a module layout",
    long_about = None
)]
struct Cli {
    /// Log extraction details to stderr (overridden by CARVE_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command that extracts from a source file.
#[derive(Args, Debug)]
struct ExtractArgs {
    /// Path to the monolithic source file.
    #[arg(long)]
    source: String,

    /// Boundary strategy: next-start (default) or balanced.
    #[arg(long)]
    mode: Option<String>,

    /// Declaration keyword to recognize; repeat to add more. Defaults to const and function.
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Optional JSON config file (boundary, keywords, table).
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the functions found in a source file.
    Extract {
        #[command(flatten)]
        args: ExtractArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Reconcile the functions found in a source file against a category table.
    ///
    /// Reports, per target module, which planned functions were found or are
    /// missing, then lists functions no module claims.
    Reconcile {
        #[command(flatten)]
        args: ExtractArgs,

        /// Category table file (.json, .yaml, .yml). Defaults to the built-in table.
        #[arg(long)]
        table: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the effective category table.
    Table {
        /// Category table file (.json, .yaml, .yml). Defaults to the built-in table.
        #[arg(long)]
        table: Option<String>,

        /// Optional JSON config file (its `table` entry is used when --table is absent).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the extracted body of one function.
    Show {
        #[command(flatten)]
        args: ExtractArgs,

        /// Function name.
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Extract { args, json } => {
            let config = resolve_config(
                args.config.as_deref(),
                args.mode.as_deref(),
                &args.keywords,
                None,
            )?;
            extract_command(&args.source, &config, json)?
        }
        Command::Reconcile { args, table, json } => {
            let config = resolve_config(
                args.config.as_deref(),
                args.mode.as_deref(),
                &args.keywords,
                table.as_deref(),
            )?;
            reconcile_command(&args.source, &config, json)?
        }
        Command::Table { table, config, json } => {
            let config = resolve_config(config.as_deref(), None, &[], table.as_deref())?;
            table_command(&config, json)?
        }
        Command::Show { args, name } => {
            let config = resolve_config(
                args.config.as_deref(),
                args.mode.as_deref(),
                &args.keywords,
                None,
            )?;
            show_command(&args.source, &config, &name)?
        }
    }

    Ok(())
}
