use clap::{Parser, Subcommand};

mod chime;
mod commands;
mod render;

#[derive(Parser)]
#[command(name = "focusring", version, about = "Pomodoro timer for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive timer
    Run {
        /// Five-second sessions, for trying the timer out
        #[arg(long)]
        fast: bool,
        /// Start the next session automatically when one ends
        #[arg(long)]
        auto_start: bool,
    },
    /// Print the timer state as JSON
    Status,
    /// Today's completed pomodoros
    Stats {
        /// Print the raw daily record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle the session-end sound
    Mute,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { fast, auto_start } => commands::run::run(fast, auto_start),
        Commands::Status => commands::status::run(),
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Mute => commands::mute::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
