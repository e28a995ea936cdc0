//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::convert::ConvertArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::inspect::InspectArgs;

pub struct GenerateParams {
    pub metadata: PathBuf,
    pub input: Option<PathBuf>,
    pub identifiers: Vec<String>,
    pub output: PathBuf,
    pub package: String,
    pub force_clean: bool,
    pub strict: bool,
    pub single_types_file: bool,
    pub no_header: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: required_path(m, "metadata"),
            input: m.get_one::<PathBuf>("input").cloned(),
            identifiers: identifiers(m),
            output: required_path(m, "output"),
            package: m
                .get_one::<String>("package")
                .cloned()
                .unwrap_or_else(|| "PInvoke".to_owned()),
            force_clean: m.get_flag("force_clean"),
            strict: m.get_flag("strict"),
            single_types_file: m.get_flag("single_types_file"),
            no_header: m.get_flag("no_header"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            metadata: p.metadata,
            input: p.input,
            identifiers: p.identifiers,
            output: p.output,
            package: p.package,
            force_clean: p.force_clean,
            strict: p.strict,
            single_types_file: p.single_types_file,
            header: !p.no_header,
        }
    }
}

pub struct InspectParams {
    pub metadata: PathBuf,
    pub input: Option<PathBuf>,
    pub identifiers: Vec<String>,
    pub json: bool,
    pub color: ColorChoice,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: required_path(m, "metadata"),
            input: m.get_one::<PathBuf>("input").cloned(),
            identifiers: identifiers(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        Self {
            metadata: p.metadata,
            input: p.input,
            identifiers: p.identifiers,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ConvertParams {
    pub snapshot: PathBuf,
    pub output: PathBuf,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot: required_path(m, "snapshot"),
            output: required_path(m, "output"),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            snapshot: p.snapshot,
            output: p.output,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Path arg that is required or defaulted, so clap always supplies it.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn identifiers(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("identifiers")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
