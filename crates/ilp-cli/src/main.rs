use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "ilp", version, about = "ILP tracker CLI")]
struct Cli {
    /// Treat this local date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    date: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the practice catalog
    Practice {
        #[command(subcommand)]
        action: commands::practice::PracticeAction,
    },
    /// Manage your practice stack
    Stack {
        #[command(subcommand)]
        action: commands::stack::StackAction,
    },
    /// Toggle today's completion for a practice
    Done {
        /// Practice ID
        id: String,
    },
    /// Show today's checklist
    Today,
    /// Show streaks for the stack, or one practice
    Streak {
        /// Practice ID
        id: Option<String>,
    },
    /// Practice notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Toggle a practice as favorite
    Favorite {
        /// Practice ID
        id: String,
    },
    /// Rule-based recommendations for the current stack
    Recommend,
    /// Write a JSON backup
    Export {
        /// Output file
        path: std::path::PathBuf,
    },
    /// Restore from a JSON backup
    Import {
        /// Backup file
        path: std::path::PathBuf,
    },
    /// Delete all tracker data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    if cli.verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = match Context::new(cli.date.as_deref(), cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Practice { action } => commands::practice::run(action, &ctx),
        Commands::Stack { action } => commands::stack::run(action, &ctx),
        Commands::Done { id } => commands::track::done(&id, &ctx),
        Commands::Today => commands::track::today(&ctx),
        Commands::Streak { id } => commands::track::streak(id.as_deref(), &ctx),
        Commands::Note { action } => commands::note::run(action, &ctx),
        Commands::Favorite { id } => commands::note::favorite(&id, &ctx),
        Commands::Recommend => commands::stack::recommend(&ctx),
        Commands::Export { path } => commands::backup::export(&path, &ctx),
        Commands::Import { path } => commands::backup::import(&path, &ctx),
        Commands::Reset { yes } => commands::backup::reset(yes),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
