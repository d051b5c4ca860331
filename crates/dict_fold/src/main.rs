// crates/dict_fold/src/main.rs

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

use dict_fold::{AppConfig, OutputFormat};

fn main() -> Result<()> {
    let matches = Command::new("dict_fold")
        .version("0.1.0")
        .about("Finds large dictionary blocks in the sample Python module and prints how they are folded")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the fold plan as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show_source")
                .long("show-source")
                .help("Print the numbered sample before the plan")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("open_pattern")
                .long("open-pattern")
                .num_args(1)
                .value_name("REGEX")
                .help("Regex for lines that open a block (default: a '{' anywhere)"),
        )
        .arg(
            Arg::new("close_pattern")
                .long("close-pattern")
                .num_args(1)
                .value_name("REGEX")
                .help("Regex for lines that close a block (default: a '}' anywhere)"),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .num_args(1)
                .value_name("LINE_INDEX")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("Only print the end column of the given 0-based line"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = AppConfig {
        format: if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        show_source: matches.get_flag("show_source"),
        open_pattern: matches.get_one::<String>("open_pattern").cloned(),
        close_pattern: matches.get_one::<String>("close_pattern").cloned(),
        column_of: matches.get_one::<i64>("column").copied(),
        verbose: matches.get_flag("verbose"),
    }
    .with_env();

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let output = dict_fold::run(&config)?;
    println!("{}", output);

    Ok(())
}
