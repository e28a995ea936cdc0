mod cli;
mod commands;
mod error;
mod logging;


use std::error::Error as _;

use cli::{ConvertParams, GenerateParams, InspectParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));

    let result = match name {
        "generate" => commands::generate::run(GenerateParams::from_matches(m).into()),
        "inspect" => commands::inspect::run(InspectParams::from_matches(m).into()),
        "convert" => commands::convert::run(ConvertParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        let mut cause = err.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
        std::process::exit(1);
    }
}
