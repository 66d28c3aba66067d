mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quelle",
    version,
    about = "Mineral water label analysis and profile-based scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse label text into structured values (without scoring)
    Parse {
        /// Path to a text file with OCR output (stdin when omitted)
        input_file: Option<PathBuf>,

        /// Label text given directly on the command line
        #[arg(short, long)]
        text: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed values to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run the full pipeline: parse, validate, score, derive insights
    Scan {
        /// Path to a text file with OCR output (stdin when omitted)
        input_file: Option<PathBuf>,

        /// Label text given directly on the command line
        #[arg(short, long)]
        text: Option<String>,

        /// JSON file with values overriding whatever the text yields
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,

        /// Profile to score against: standard, baby, sport, blood_pressure, coffee, kidney
        #[arg(short, long, default_value = "standard")]
        profile: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the available consumer profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List all profiles
    List,
    /// Show the target ranges of one profile
    Show {
        /// Profile name (e.g., "baby")
        profile: String,
    },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            text,
            output,
            out,
        } => commands::parse::run(input_file, text, &output, out),
        Commands::Scan {
            input_file,
            text,
            values,
            profile,
            output,
        } => commands::scan::run(input_file, text, values, &profile, &output),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { profile } => commands::profiles::show(&profile),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
