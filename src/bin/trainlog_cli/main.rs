// ABOUTME: trainlog CLI - command-line front end for the training-load analytics engine
// ABOUTME: Summarizes sessions, reports CTL/ATL/TSB, classifies compliance, and manages pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize a recorded session with a 250 W cycling FTP
//! trainlog-cli summarize --samples ride.json --laps laps.json --ftp-ride 250
//!
//! # Training load for a date from a {"YYYY-MM-DD": tss} file
//! trainlog-cli load --stress stress.json --date 2025-03-01
//!
//! # Compliance of a planned workout against a completed activity
//! trainlog-cli classify --planned plan.json --completed ride.json
//!
//! # Pair a planned workout with an activity, updating the pairs file
//! trainlog-cli pair --pairs pairs.json --planned plan-1 --completed ride-9
//!
//! # Weekly rollup and per-workout compliance from calendar and activity files
//! trainlog-cli week --calendar calendar.json --activities activities.json \
//!     --pairs pairs.json --start 2025-03-03
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use trainlog::config::TrainlogConfig;
use trainlog::input::parse_date_key;
use trainlog::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "trainlog-cli",
    about = "Training load and compliance analytics",
    long_about = "Command-line front end for session summaries, CTL/ATL/TSB, plan compliance, and workout pairing."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// FTP overrides shared by the commands that compute stress
#[derive(Args, Debug, Default)]
struct FtpArgs {
    /// Cycling FTP in watts
    #[arg(long)]
    ftp_ride: Option<f64>,

    /// Running FTP in watts
    #[arg(long)]
    ftp_run: Option<f64>,

    /// Swimming FTP in watts
    #[arg(long)]
    ftp_swim: Option<f64>,

    /// Rowing FTP in watts
    #[arg(long)]
    ftp_row: Option<f64>,

    /// Strength FTP in watts
    #[arg(long)]
    ftp_strength: Option<f64>,

    /// Fallback FTP for other sports
    #[arg(long)]
    ftp_other: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a session from a JSON sample stream
    Summarize {
        /// Samples file (JSON array)
        #[arg(long)]
        samples: PathBuf,

        /// Laps file (JSON array)
        #[arg(long)]
        laps: Option<PathBuf>,

        /// Device totals file (JSON object)
        #[arg(long)]
        totals: Option<PathBuf>,

        /// Sport label, overriding the device totals
        #[arg(long)]
        sport: Option<String>,

        #[command(flatten)]
        ftp: FtpArgs,
    },

    /// CTL, ATL, and TSB for a date
    Load {
        /// Daily stress file (`{"YYYY-MM-DD": tss}`)
        #[arg(long)]
        stress: PathBuf,

        /// Query date (defaults to today)
        #[arg(long, value_parser = parse_date_key)]
        date: Option<NaiveDate>,

        /// Stress after this date is ignored (defaults to today)
        #[arg(long, value_parser = parse_date_key)]
        today: Option<NaiveDate>,
    },

    /// Compliance band of a planned workout
    Classify {
        /// Planned workout file
        #[arg(long)]
        planned: PathBuf,

        /// Completed activity file (defaults to the workout's manual completion)
        #[arg(long)]
        completed: Option<PathBuf>,

        /// Calendar date (defaults to the workout's date)
        #[arg(long, value_parser = parse_date_key)]
        date: Option<NaiveDate>,

        /// Today's date (defaults to the local date)
        #[arg(long, value_parser = parse_date_key)]
        today: Option<NaiveDate>,

        #[command(flatten)]
        ftp: FtpArgs,
    },

    /// Pair a planned workout with a completed activity
    Pair {
        /// Pairs file, created if missing and rewritten in place
        #[arg(long)]
        pairs: PathBuf,

        /// Planned workout id
        #[arg(long)]
        planned: String,

        /// Completed activity id
        #[arg(long)]
        completed: String,
    },

    /// Weekly totals, load, and compliance for seven days
    Week {
        /// Calendar items file (JSON array)
        #[arg(long)]
        calendar: PathBuf,

        /// Completed activities file (JSON array)
        #[arg(long)]
        activities: PathBuf,

        /// Pairs file
        #[arg(long)]
        pairs: Option<PathBuf>,

        /// First day of the week
        #[arg(long, value_parser = parse_date_key)]
        start: NaiveDate,

        /// Today's date (defaults to the local date)
        #[arg(long, value_parser = parse_date_key)]
        today: Option<NaiveDate>,

        #[command(flatten)]
        ftp: FtpArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = TrainlogConfig::from_env()?;

    let output = match cli.command {
        Command::Summarize {
            samples,
            laps,
            totals,
            sport,
            ftp,
        } => {
            commands::summarize(
                config.analytics,
                &samples,
                laps.as_deref(),
                totals.as_deref(),
                sport,
                &ftp,
            )
            .await?
        }
        Command::Load {
            stress,
            date,
            today,
        } => commands::load(config.analytics, &stress, date, today).await?,
        Command::Classify {
            planned,
            completed,
            date,
            today,
            ftp,
        } => {
            commands::classify(
                config.analytics,
                &planned,
                completed.as_deref(),
                date,
                today,
                &ftp,
            )
            .await?
        }
        Command::Pair {
            pairs,
            planned,
            completed,
        } => commands::pair(&pairs, &planned, &completed).await?,
        Command::Week {
            calendar,
            activities,
            pairs,
            start,
            today,
            ftp,
        } => {
            commands::week(
                config.analytics,
                &calendar,
                &activities,
                pairs.as_deref(),
                start,
                today,
                &ftp,
            )
            .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sport_has_an_ftp_flag() {
        let cli = Cli::try_parse_from([
            "trainlog-cli",
            "summarize",
            "--samples",
            "session.json",
            "--ftp-ride",
            "250",
            "--ftp-run",
            "310",
            "--ftp-swim",
            "120",
            "--ftp-row",
            "220",
            "--ftp-strength",
            "180",
            "--ftp-other",
            "200",
        ])
        .unwrap();

        let Command::Summarize { ftp, .. } = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(ftp.ftp_ride, Some(250.0));
        assert_eq!(ftp.ftp_run, Some(310.0));
        assert_eq!(ftp.ftp_swim, Some(120.0));
        assert_eq!(ftp.ftp_row, Some(220.0));
        assert_eq!(ftp.ftp_strength, Some(180.0));
        assert_eq!(ftp.ftp_other, Some(200.0));
    }

    #[test]
    fn test_week_parses_dates() {
        let cli = Cli::try_parse_from([
            "trainlog-cli",
            "week",
            "--calendar",
            "calendar.json",
            "--activities",
            "activities.json",
            "--start",
            "2025-03-03",
            "--ftp-strength",
            "150",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Week { start, pairs, ftp, .. } = cli.command else {
            panic!("expected week");
        };
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert!(pairs.is_none());
        assert_eq!(ftp.ftp_strength, Some(150.0));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(Cli::try_parse_from([
            "trainlog-cli",
            "load",
            "--stress",
            "stress.json",
            "--date",
            "03/01/2025",
        ])
        .is_err());
    }
}
