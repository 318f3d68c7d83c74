mod completions;
mod destinations;
mod markup;
mod tree;
mod view;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use destinations::DestinationsCommand;
use eyre::Result;
use markup::MarkupCommand;
use tree::TreeCommand;
use view::ViewCommand;
use viewgen_core::{CONFIG_FILE, Config, Destination};

/// Extension trait for exiting on viewgen errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for viewgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "viewgen")]
#[command(version)]
#[command(about = "Render SwiftUI, Jetpack Compose and markup documents from a builder DSL")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::View(cmd) => cmd.run(),
            Commands::Markup(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
            Commands::Destinations(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sample poetry page
    View(ViewCommand),

    /// Render the sample HTML page
    Markup(MarkupCommand),

    /// Print the sample poetry page's node tree as JSON
    Tree(TreeCommand),

    /// List the supported destinations
    Destinations(DestinationsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Destination selection shared by rendering commands.
#[derive(Args)]
pub(crate) struct TargetArgs {
    /// Output dialect (swiftui or compose), overrides the config file
    #[arg(short, long)]
    pub destination: Option<Destination>,

    /// Path to viewgen.toml (ignored when missing)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl TargetArgs {
    /// Flag first, then config file, then the default destination.
    pub fn resolve(&self) -> viewgen_core::Result<Destination> {
        if let Some(destination) = self.destination {
            return Ok(destination);
        }
        let config = Config::load_or_default(&self.config)?;
        Ok(config.destination)
    }
}
