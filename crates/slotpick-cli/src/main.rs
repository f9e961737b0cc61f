use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slotpick", version, about = "Slotpick CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest meeting times from live provider availability
    Suggest(commands::suggest::SuggestArgs),
    /// Run selection over slots from a JSON file or stdin
    Select(commands::select::SelectArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Select(args) => commands::select::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
