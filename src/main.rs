use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use travel_guide::{
    sdk::config::GuideConfig,
    sdk::form::{run_form, write_report},
    sdk::guide::{Guide, Report},
    sdk::routing::{Category, GuideError, RemoteProvider},
    sdk::util::log::init_logging,
};

/// Look up places and driving directions using OpenStreetMap services
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Without a subcommand, an interactive form is started
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show restaurants, hotels and stations around a city
    Info {
        /// The city name (e.g., "Paris")
        city: String,

        /// Only list this category (restaurant, hotel, station); repeatable
        #[arg(short, long = "category", value_name = "CATEGORY", value_parser = parse_category)]
        categories: Vec<Category>,
    },
    /// Show driving directions between two places
    Directions {
        /// Where the trip starts
        from: String,
        /// Where the trip ends
        to: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging("warn");

    let cli = Cli::parse();

    let config = GuideConfig::from_env().context("Failed to read configuration")?;
    let provider = RemoteProvider::new(config).context("Failed to set up HTTP client")?;
    let guide = Guide::new(provider);
    let endpoints = guide.provider().config();
    log::debug!(
        "Using Nominatim at {}, Overpass at {}, ORS at {}",
        endpoints.nominatim_url,
        endpoints.overpass_url,
        endpoints.ors_url
    );

    match cli.command {
        None => {
            let stdin = io::stdin();
            run_form(&guide, stdin.lock(), io::stdout().lock())
                .context("Interactive form failed")?;
        }
        Some(Command::Info { city, categories }) => {
            if !cli.json {
                println!("Fetching data, please wait...");
            }
            let report = if categories.is_empty() {
                guide.place_info(&city)
            } else {
                guide.place_info_in(&city, &categories)
            };
            let lines = report.outcome.render();
            emit(&report, lines, cli.json)?;
        }
        Some(Command::Directions { from, to }) => {
            if !cli.json {
                println!("Fetching directions, please wait...");
            }
            let report = guide.directions(&from, &to);
            let lines = report.outcome.render();
            emit(&report, lines, cli.json)?;
        }
    }

    Ok(())
}

fn parse_category(raw: &str) -> Result<Category, GuideError> {
    raw.parse()
}

/// Errors go to stderr and results to stdout, or everything as one JSON document.
fn emit<T: Serialize>(report: &Report<T>, lines: Vec<String>, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        writeln!(stdout, "{json_output}")?;
    } else {
        write_report(&mut io::stderr().lock(), &report.errors, Vec::new())?;
        write_report(&mut stdout, &[], lines)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_accepts_repeated_categories() {
        let cli = Cli::try_parse_from(["travel-guide", "info", "Paris", "-c", "hotel", "--category", "Station"])
            .unwrap();
        match cli.command {
            Some(Command::Info { city, categories }) => {
                assert_eq!(city, "Paris");
                assert_eq!(categories, vec![Category::Hotel, Category::Station]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected_on_the_command_line() {
        let err = Cli::try_parse_from(["travel-guide", "info", "Paris", "--category", "museum"])
            .unwrap_err();
        assert!(err.to_string().contains("Unknown place category: museum"));
    }

    #[test]
    fn no_subcommand_means_interactive_form() {
        let cli = Cli::try_parse_from(["travel-guide", "--json"]).unwrap();
        assert!(cli.json);
        assert!(cli.command.is_none());
    }
}
