//! Fitness Lookup - Main Entry Point

use anyhow::Context;
use clap::{Parser, Subcommand};
use lookup::{
    lookup_profile, lookup_routines, lookup_workouts, DEFAULT_PROFILE_DB, DEFAULT_ROUTINE_PDF,
    DEFAULT_WORKOUT_CSV,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Query the workout and profile datasets
#[derive(Debug, Parser)]
#[command(name = "fitness-lookup", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List a user's completed workouts
    Workouts {
        /// User id
        #[arg(long)]
        user: u32,
        /// Workout history CSV
        #[arg(long, default_value = DEFAULT_WORKOUT_CSV)]
        csv: PathBuf,
    },
    /// Show a user's profile
    Profile {
        /// User id
        #[arg(long)]
        user: u32,
        /// Profile database
        #[arg(long, default_value = DEFAULT_PROFILE_DB)]
        db: PathBuf,
    },
    /// Show the opening of the workout routines document
    Routines {
        /// Routine PDF
        #[arg(long, default_value = DEFAULT_ROUTINE_PDF)]
        pdf: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reports go to stdout; keep logs quiet on stderr unless asked
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = match Args::parse().command {
        Command::Workouts { user, csv } => lookup_workouts(&csv, user)
            .with_context(|| format!("reading workouts from {}", csv.display()))?,
        Command::Profile { user, db } => lookup_profile(&db, user)
            .await
            .with_context(|| format!("reading profile from {}", db.display()))?,
        Command::Routines { pdf } => lookup_routines(&pdf)
            .with_context(|| format!("reading routines from {}", pdf.display()))?,
    };

    println!("{report}");
    Ok(())
}
