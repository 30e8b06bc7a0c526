use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::fetch::DEFAULT_URL;
use crate::tree::Markers;

/// CLI arguments for airdates
#[derive(Parser)]
#[command(name = "airdates")]
#[command(about = "List upcoming TV air dates from an airdates.tv snapshot")]
#[command(version)]
pub struct Cli {
    /// Path to the cached airdates.tv HTML snapshot
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the next air date of every upcoming show
    #[command(name = "list_shows", alias = "list-shows")]
    ListShows(ListArgs),

    /// Download the listings page and overwrite the snapshot
    Refresh(RefreshArgs),
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Alfred)]
    pub format: Format,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD format)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Timezone used to determine today (IANA timezone, e.g., "Europe/London"); local time if omitted
    #[arg(long, value_parser = parse_tz)]
    pub tz: Option<Tz>,

    /// CSS selector of a day block
    #[arg(long, default_value = ".day")]
    pub day_selector: String,

    /// CSS selector of the date label inside a day block
    #[arg(long, default_value = ".date")]
    pub date_selector: String,

    /// CSS selector of a show title inside a day block
    #[arg(long, default_value = ".title")]
    pub title_selector: String,
}

impl ListArgs {
    pub fn markers(&self) -> Markers {
        Markers {
            day: self.day_selector.clone(),
            date: self.date_selector.clone(),
            title: self.title_selector.clone(),
        }
    }
}

#[derive(clap::Args)]
pub struct RefreshArgs {
    /// Listings page to download
    #[arg(long, env = "AIRDATES_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Alfred,
    Md,
    Html,
}

/// Parse date (YYYY-MM-DD)
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}': {e}. Use YYYY-MM-DD format"))
}

fn parse_tz(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|e| format!("Invalid timezone '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shows_defaults() {
        let cli = Cli::try_parse_from(["airdates", "page.html", "list_shows"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("page.html"));
        match cli.command {
            Command::ListShows(args) => {
                assert_eq!(args.format, Format::Alfred);
                assert!(args.date.is_none());
                assert_eq!(args.markers(), Markers::default());
            }
            Command::Refresh(_) => panic!("expected list_shows"),
        }
    }

    #[test]
    fn test_list_shows_alias_and_date() {
        let cli = Cli::try_parse_from([
            "airdates",
            "page.html",
            "list-shows",
            "--date",
            "2023-01-01",
            "--format",
            "md",
        ])
        .unwrap();
        match cli.command {
            Command::ListShows(args) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2023, 1, 1));
                assert_eq!(args.format, Format::Md);
            }
            Command::Refresh(_) => panic!("expected list_shows"),
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = Cli::try_parse_from(["airdates", "page.html", "list_shows", "--date", "01/02/2023"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_tz_rejected() {
        let result = Cli::try_parse_from(["airdates", "page.html", "list_shows", "--tz", "Mars/Olympus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_timeout() {
        let cli = Cli::try_parse_from(["airdates", "page.html", "refresh", "--timeout-secs", "5"]).unwrap();
        match cli.command {
            Command::Refresh(args) => assert_eq!(args.timeout_secs, 5),
            Command::ListShows(_) => panic!("expected refresh"),
        }
    }

    #[test]
    fn test_requires_command() {
        assert!(Cli::try_parse_from(["airdates", "page.html"]).is_err());
    }
}
