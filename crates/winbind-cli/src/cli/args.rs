//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Metadata snapshot, JSON or binary (--metadata).
pub fn metadata_arg() -> Arg {
    Arg::new("metadata")
        .short('m')
        .long("metadata")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Metadata snapshot (JSON or binary)")
}

/// Identifiers file, `-` for stdin (--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File with one identifier per line ('-' reads stdin)")
}

/// Identifiers given on the command line (positional).
pub fn identifiers_arg() -> Arg {
    Arg::new("identifiers")
        .value_name("IDENT")
        .num_args(0..)
        .help("Method or type names to resolve")
}

/// Output directory for generated sources (--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value("output")
        .help("Directory for generated Go files")
}

/// Go package name (--package).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .short('p')
        .long("package")
        .value_name("NAME")
        .default_value("PInvoke")
        .help("Go package name")
}

/// Clear a non-empty output directory without asking (--force-clean).
pub fn force_clean_arg() -> Arg {
    Arg::new("force_clean")
        .long("force-clean")
        .action(ArgAction::SetTrue)
        .help("Clear a non-empty output directory without confirmation")
}

/// Fail on unresolved identifiers (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat unresolved identifiers as errors")
}

/// Put every aggregate in types.go (--single-types-file).
pub fn single_types_file_arg() -> Arg {
    Arg::new("single_types_file")
        .long("single-types-file")
        .action(ArgAction::SetTrue)
        .help("Write all struct declarations to types.go")
}

/// Omit the generated-code marker (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the 'Code generated' header")
}

/// Print JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the resolved model as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON snapshot to convert (positional).
pub fn snapshot_path_arg() -> Arg {
    Arg::new("snapshot")
        .value_name("SNAPSHOT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON metadata snapshot")
}

/// Binary snapshot destination (-o/--output).
pub fn binary_output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Where to write the binary snapshot")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Raise log verbosity (-v info, -vv debug, -vvv trace)")
}
