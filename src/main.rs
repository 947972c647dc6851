#[macro_use]
extern crate log;

use std::env::current_dir;
use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::{crate_description, crate_version, App, Arg, ArgMatches, SubCommand};
use colored::*;

use linecost::config::Settings;
use linecost::linebreak::constants::SETTINGS_FILE_NAME;
use linecost::linebreak::Candidate;
use linecost::timings::Timings;
use linecost::Error as LError;

macro_rules! unwrap {
    ($e: expr, $error: expr) => {
        match $e {
            Some(e) => e,
            None => return Err(Box::new($error)),
        }
    };
}

fn main() {
    beautylog::init(log::LevelFilter::Info).ok();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

/// Parses a numeric argument, accepting `inf` and `-inf`.
fn number(matches: &ArgMatches, name: &str) -> Result<Option<f64>, LError> {
    match matches.value_of(name) {
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| LError::InvalidArgument {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        None => Ok(None),
    }
}

/// Parses a numeric argument that must be present.
fn required_number(matches: &ArgMatches, name: &str) -> Result<f64, LError> {
    number(matches, name)?.ok_or_else(|| LError::InvalidArgument {
        name: name.to_owned(),
        value: String::new(),
    })
}

/// Reads the settings given on the command line, or the nearest settings
/// file, or falls back to the defaults.
fn settings(matches: &ArgMatches) -> Result<Settings, LError> {
    if let Some(path) = matches.value_of("config") {
        return Settings::load(path);
    }

    let current_dir = current_dir().map_err(|_| LError::CannotReadCurrentDir)?;

    match Settings::find(&current_dir) {
        Ok(path) => Settings::load(path),
        Err(LError::NoConfigFile) => {
            warn!("no {} was found, using default settings", SETTINGS_FILE_NAME);
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

fn init(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut current_dir =
        PathBuf::from(unwrap!(current_dir().ok(), LError::CannotReadCurrentDir));

    if let Some(dir) = matches.value_of("DIR") {
        current_dir.push(dir);
    }

    create_dir_all(&current_dir)?;

    let toml = Settings::default().to_toml()?;

    current_dir.push(SETTINGS_FILE_NAME);
    let mut file = File::create(&current_dir)?;
    file.write_all(toml.as_bytes())?;

    info!("wrote {}", current_dir.display());

    Ok(())
}

fn score(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut settings = settings(matches)?;
    if matches.is_present("debug") {
        settings.debug = true;
    }

    let words = unwrap!(matches.value_of("words"), LError::InvalidArgument {
        name: "words".to_owned(),
        value: String::new(),
    });
    let word_count = words.parse::<usize>().map_err(|_| LError::InvalidArgument {
        name: "words".to_owned(),
        value: words.to_owned(),
    })?;

    let candidate = Candidate::new(
        required_number(matches, "ideal")?,
        required_number(matches, "actual")?,
        word_count,
        required_number(matches, "shrink")?,
        required_number(matches, "stretch")?,
    )
    .with_penalty(number(matches, "penalty")?.unwrap_or(0.0))
    .flagged(matches.is_present("flag"))
    .hyphenated(matches.is_present("hyphen"))
    .skipping(matches.is_present("skip-fitness"));

    let looseness = number(matches, "looseness")?.unwrap_or(settings.looseness);

    let mut timings = Timings::from_settings(&settings);
    let score = candidate.score_timed(&settings, looseness, &mut timings);
    timings.log(format!("score: {}", timings.diff("score")));

    let verdict = if score.feasible {
        "feasible".bold().green()
    } else {
        "infeasible".bold().red()
    };

    println!("{} {}", "alignment:".bold(), settings.alignment);
    println!("{} {}", "ratio:".bold(), score.ratio);
    println!("{} {}", "badness:".bold(), score.badness);
    println!("{} {}", "demerits:".bold(), score.demerits);
    println!(
        "{} {} (#{})",
        "fitness class:".bold(),
        score.fitness_class,
        score.fitness_tier
    );
    println!("{} {}", "breakpoint:".bold(), verdict);

    Ok(())
}

/// Describes the command line interface.
fn app() -> App<'static, 'static> {
    App::new("linecost")
        .version(crate_version!())
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("init")
                .about("Writes the default settings to linecost.toml")
                .arg(Arg::with_name("DIR").required(false)),
        )
        .subcommand(
            SubCommand::with_name("score")
                .about("Scores a candidate line")
                .arg(
                    Arg::with_name("ideal")
                        .long("ideal")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true)
                        .help("The width the line should have"),
                )
                .arg(
                    Arg::with_name("actual")
                        .long("actual")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true)
                        .help("The width of the line with natural spacing"),
                )
                .arg(
                    Arg::with_name("words")
                        .long("words")
                        .takes_value(true)
                        .required(true)
                        .help("The number of words on the line"),
                )
                .arg(
                    Arg::with_name("shrink")
                        .long("shrink")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true)
                        .help("How much each space can shrink"),
                )
                .arg(
                    Arg::with_name("stretch")
                        .long("stretch")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true)
                        .help("How much each space can stretch"),
                )
                .arg(
                    Arg::with_name("penalty")
                        .long("penalty")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .help("The penalty of the breakpoint, -inf forces it"),
                )
                .arg(
                    Arg::with_name("looseness")
                        .long("looseness")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .help("Slack added to the maximal adjustment ratio"),
                )
                .arg(
                    Arg::with_name("config")
                        .long("config")
                        .takes_value(true)
                        .help("The settings file to use"),
                )
                .arg(Arg::with_name("flag").long("flag").help("The breakpoint is flagged"))
                .arg(Arg::with_name("hyphen").long("hyphen").help("The line ends with a hyphen"))
                .arg(
                    Arg::with_name("skip-fitness")
                        .long("skip-fitness")
                        .help("The line skips a fitness class"),
                )
                .arg(Arg::with_name("debug").long("debug").help("Logs timings")),
        )
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = app().get_matches();

    if let Some(matches) = matches.subcommand_matches("init") {
        init(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("score") {
        score(matches)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use test_case::test_case;

    use crate::{app, number};

    /// Returns the arguments of a `score` call, with one value replaced.
    fn score_args(name: &'static str, value: &'static str) -> Vec<&'static str> {
        let mut args = vec!["linecost", "score"];
        let defaults = [
            ("ideal", "100"),
            ("actual", "80"),
            ("words", "5"),
            ("shrink", "2"),
            ("stretch", "5"),
            ("penalty", "0"),
            ("looseness", "0"),
        ];

        for (arg, default) in defaults.iter() {
            args.push(match *arg {
                "ideal" => "--ideal",
                "actual" => "--actual",
                "words" => "--words",
                "shrink" => "--shrink",
                "stretch" => "--stretch",
                "penalty" => "--penalty",
                _ => "--looseness",
            });
            args.push(if *arg == name { value } else { *default });
        }

        args
    }

    #[test_case("looseness", "-0.25", -0.25 ; "negative looseness")]
    #[test_case("penalty", "-inf", f64::NEG_INFINITY ; "forced break")]
    #[test_case("ideal", "-10", -10.0 ; "negative ideal width")]
    #[test_case("actual", "-10", -10.0 ; "negative actual width")]
    #[test_case("shrink", "-1", -1.0 ; "negative shrink")]
    #[test_case("stretch", "-1", -1.0 ; "negative stretch")]
    fn test_negative_values_are_parsed(name: &'static str, value: &'static str, expected: f64) {
        let matches = app().get_matches_from_safe(score_args(name, value)).unwrap();
        let score = matches.subcommand_matches("score").unwrap();
        assert_eq!(number(score, name).unwrap(), Some(expected));
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let matches = app()
            .get_matches_from_safe(score_args("looseness", "loose"))
            .unwrap();
        let score = matches.subcommand_matches("score").unwrap();
        assert!(number(score, "looseness").is_err());
    }

    #[test]
    fn test_missing_width_is_rejected() {
        assert!(app()
            .get_matches_from_safe(vec!["linecost", "score", "--ideal", "100"])
            .is_err());
    }
}
