use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use numerology_engine::{
    calculate_compatibility, calculate_profile, telemetry, BirthInput, CompatibilityInput,
    ReferenceDate, Settings,
};

#[derive(Parser)]
#[command(name = "numerology", version, about = "Pythagorean numerology profiles and compatibility")]
struct Cli {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full profile for one person
    Profile {
        /// Full birth name (accents allowed)
        name: String,
        #[arg(long)]
        day: u32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: u32,
        /// Reference year for personal periods (default: today, UTC)
        #[arg(long)]
        current_year: Option<u32>,
        #[arg(long)]
        current_month: Option<u32>,
        #[arg(long)]
        current_day: Option<u32>,
    },
    /// Compatibility between two people
    Compatibility {
        name1: String,
        day1: u32,
        month1: u32,
        year1: u32,
        name2: String,
        day2: u32,
        month2: u32,
        year2: u32,
    },
}

fn main() -> Result<()> {
    let settings = Settings::from_env().context("Failed to read settings")?;
    telemetry::init(&settings.log_level);

    let cli = Cli::parse();

    match cli.command {
        Command::Profile {
            name,
            day,
            month,
            year,
            current_year,
            current_month,
            current_day,
        } => {
            let input = BirthInput {
                full_name: name,
                birth_day: day,
                birth_month: month,
                birth_year: year,
                current_year,
                current_month,
                current_day,
            };
            run_profile(&input, cli.pretty)
        }
        Command::Compatibility {
            name1,
            day1,
            month1,
            year1,
            name2,
            day2,
            month2,
            year2,
        } => {
            let input = CompatibilityInput {
                person1_name: name1,
                person1_day: day1,
                person1_month: month1,
                person1_year: year1,
                person2_name: name2,
                person2_day: day2,
                person2_month: month2,
                person2_year: year2,
            };
            run_compatibility(&input, cli.pretty)
        }
    }
}

fn run_profile(input: &BirthInput, pretty: bool) -> Result<()> {
    input.validate().context("Invalid profile input")?;

    let reference = ReferenceDate::with_defaults(
        input.current_year,
        input.current_month,
        input.current_day,
        ReferenceDate::today_utc(),
    );

    info!(name = %input.full_name, "calculating numerology profile");
    let profile = calculate_profile(
        &input.full_name,
        input.birth_day,
        input.birth_month,
        input.birth_year,
        reference,
    );

    print_json(&profile, pretty)
}

fn run_compatibility(input: &CompatibilityInput, pretty: bool) -> Result<()> {
    input.validate().context("Invalid compatibility input")?;

    info!(
        person1 = %input.person1_name,
        person2 = %input.person2_name,
        "calculating numerology compatibility"
    );
    let result = calculate_compatibility(
        &input.person1_name,
        input.person1_day,
        input.person1_month,
        input.person1_year,
        &input.person2_name,
        input.person2_day,
        input.person2_month,
        input.person2_year,
        ReferenceDate::today_utc(),
    );

    print_json(&result, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize result")?;

    println!("{}", json);
    Ok(())
}
