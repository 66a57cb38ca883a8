//! Command line configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiConfig, logging::LoggingConfig},
};

pub(crate) mod api;
pub(crate) mod logging;

/// Hotel inventory management
#[derive(Debug, Parser)]
#[command(name = "hotelier", about = "Hotel inventory management", long_about = None, version)]
pub struct Cli {
    /// Hotels store settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::Duration};

    use hotelier::{filter::RoomTypeFilter, hotels::RoomType};
    use hotelier_app::context::Backend;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn global_flags_follow_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "hotelier",
            "list",
            "--room-type",
            "Suite",
            "--seed-file",
            "seed.yml",
        ])?;

        let args = match cli.command {
            Command::List(args) => Some(args),
            _ => None,
        }
        .ok_or("expected list")?;

        assert_eq!(args.room_type, RoomTypeFilter::Only(RoomType::Suite));
        assert_eq!(
            cli.api.backend(),
            Backend::Local {
                seed_file: Some(PathBuf::from("seed.yml"))
            }
        );

        Ok(())
    }

    #[test]
    fn http_backend_uses_url_and_timeout() -> TestResult {
        let cli = Cli::try_parse_from([
            "hotelier",
            "--api-url",
            "http://hotels.internal:8080",
            "--timeout-seconds",
            "3",
            "stats",
        ])?;

        assert_eq!(
            cli.api.backend(),
            Backend::Http {
                base_url: "http://hotels.internal:8080".to_string(),
                timeout: Duration::from_secs(3),
            }
        );

        Ok(())
    }

    #[test]
    fn rejects_unknown_room_type() {
        let result = Cli::try_parse_from(["hotelier", "list", "--room-type", "Penthouse"]);

        assert!(result.is_err());
    }

    fn add_with_amenity(amenity: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from([
            "hotelier",
            "add",
            "--name",
            "Harbour Inn",
            "--location",
            "Portland, ME",
            "--price",
            "120",
            "--rooms",
            "4",
            "--rating",
            "3.9",
            "--check-in",
            "2099-01-15",
            "--amenity",
            amenity,
        ])
    }

    #[test]
    fn amenity_flags_accept_listed_options_only() -> TestResult {
        let cli = add_with_amenity("Room Service")?;

        let args = match cli.command {
            Command::Add(args) => Some(args),
            _ => None,
        }
        .ok_or("expected add")?;

        assert_eq!(args.amenities, ["Room Service"]);
        assert!(add_with_amenity("Sauna").is_err());
        assert!(
            Cli::try_parse_from(["hotelier", "edit", "abc", "--toggle-amenity", "Sauna"]).is_err()
        );

        Ok(())
    }

    #[test]
    fn add_requires_core_fields() {
        let result = Cli::try_parse_from(["hotelier", "add", "--name", "Harbour Inn"]);

        assert!(result.is_err());
    }
}
