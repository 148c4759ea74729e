use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use saju_base::Ganji;
use saju_engine::{
    BirthMoment, PillarOutcome, day_pillar, four_pillars, hour_pillar, year_pillar,
};
use saju_terms::SolarTermIndex;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cycle pairing at a position
    Ganji {
        /// 0-based cycle position (0-59)
        index: u8,
    },
    /// Day pillar for a calendar date
    Day {
        /// Calendar date (YYYY-MM-DD)
        date: String,
    },
    /// Hour pillar for a date and civil time
    Hour {
        /// Calendar date (YYYY-MM-DD)
        date: String,
        /// Civil time of day (HH:MM)
        time: String,
    },
    /// Year pillar for a birth instant
    Year {
        /// Calendar date (YYYY-MM-DD)
        date: String,
        /// Civil time of day (HH:MM)
        time: String,
        /// Path to the solar-term table (JSON)
        #[arg(long)]
        terms: PathBuf,
    },
    /// All four pillars for a birth instant
    Pillars {
        /// Calendar date (YYYY-MM-DD)
        date: String,
        /// Civil time of day (HH:MM)
        time: String,
        /// Path to the solar-term table (JSON)
        #[arg(long)]
        terms: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ganji { index } => match Ganji::from_index(index) {
            Some(g) => print_ganji("Ganji", &g),
            None => {
                eprintln!("Invalid cycle position: {index}. Use 0-59.");
                std::process::exit(1);
            }
        },

        Commands::Day { date } => {
            let g = day_pillar(require_date(&date));
            print_ganji("Day", &g);
        }

        Commands::Hour { date, time } => {
            let moment = require_moment(&date, &time);
            let day = day_pillar(moment.date());
            let g = hour_pillar(moment.instant(), day);
            print_ganji("Day", &day);
            print_ganji("Hour", &g);
        }

        Commands::Year { date, time, terms } => {
            let moment = require_moment(&date, &time);
            let index = require_index(&terms);
            match year_pillar(moment.instant(), &index) {
                Ok(g) => print_ganji("Year", &g),
                Err(e) => {
                    eprintln!("Year pillar unresolved: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Pillars { date, time, terms } => {
            let moment = require_moment(&date, &time);
            let index = require_index(&terms);
            let p = four_pillars(&moment, &index);
            print_slot("Year ", &p.year);
            print_slot("Month", &p.month);
            print_slot("Day  ", &p.day);
            print_slot("Hour ", &p.hour);
        }
    }
}

fn print_ganji(label: &str, g: &Ganji) {
    println!(
        "{label}: {} ({}{}, {}-{})",
        g,
        g.stem().korean(),
        g.branch().korean(),
        g.stem().name(),
        g.branch().name()
    );
}

fn print_slot(label: &str, outcome: &PillarOutcome) {
    match outcome {
        Ok(g) => print_ganji(label, g),
        Err(e) => println!("{label}: unresolved ({e})"),
    }
}

fn require_date(s: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            eprintln!("Invalid date '{s}'. Use YYYY-MM-DD.");
            std::process::exit(1);
        }
    }
}

fn require_time(s: &str) -> NaiveTime {
    match NaiveTime::parse_from_str(s, "%H:%M") {
        Ok(t) => t,
        Err(_) => {
            eprintln!("Invalid time '{s}'. Use HH:MM.");
            std::process::exit(1);
        }
    }
}

fn require_moment(date: &str, time: &str) -> BirthMoment {
    BirthMoment::new(require_date(date), require_time(time))
}

fn require_index(path: &Path) -> SolarTermIndex {
    match SolarTermIndex::load(path) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Cannot load solar-term table {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
