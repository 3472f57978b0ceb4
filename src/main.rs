use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use dispositions::models::ReportFormat;
use dispositions::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dispositions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and aggregate review disposition tables", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the disposition tables in one markdown file
    Validate {
        /// Markdown file to validate
        file: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Aggregate disposition statistics across a directory of plan documents
    Aggregate {
        /// Directory to search recursively
        directory: PathBuf,

        /// Report format (defaults to the config file, then markdown)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Config file (default: <directory>/.dispositions.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8, no_color: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.no_color);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    }
}

/// Dispatch a command; `Ok(false)` means the command ran but failed its check
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Validate { file, json } => dispositions::cli::validate::run(&file, json),

        Commands::Aggregate {
            directory,
            format,
            config,
        } => {
            dispositions::cli::aggregate::run(&directory, format, config.as_deref())?;
            Ok(true)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(true)
        }
    }
}
