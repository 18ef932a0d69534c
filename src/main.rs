//! Dokupub - NovelDokusha release artifact publisher.
//!
//! CI helper that locates a built APK, derives version and build flavor
//! from its filename, renames the file to the canonical release name and
//! appends the derived metadata to the CI environment file.

use anyhow::Result;
use clap::{Parser, Subcommand};

use dokupub::commands;
use dokupub::config::Config;

#[derive(Parser)]
#[command(name = "dokupub")]
#[command(about = "NovelDokusha release artifact publisher")]
#[command(
    after_help = "QUICK START:\n  dokupub publish apk      Publish the flavored build APK\n  dokupub publish release  Publish the release APK\n  dokupub show config      Show resolved configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a build artifact (rename + emit CI metadata)
    Publish {
        #[command(subcommand)]
        what: PublishTarget,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum PublishTarget {
    /// Flavored APK from the Gradle build output directory
    Apk,
    /// Release APK from the release staging directory
    Release,
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let base_dir = std::env::current_dir()?;
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Publish { what } => {
            let target = match what {
                PublishTarget::Apk => commands::publish::PublishTarget::Apk,
                PublishTarget::Release => commands::publish::PublishTarget::Release,
            };
            commands::cmd_publish(target, &config)?;
        }

        Commands::Show { what } => {
            let target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
            };
            commands::cmd_show(target, &config)?;
        }
    }

    Ok(())
}
