//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("winbind")
        .about("Generate Go bindings for native Windows APIs from metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(inspect_command())
        .subcommand(convert_command())
}

/// Resolve identifiers and write Go sources.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Go bindings for methods and types")
        .override_usage(
            "\
  winbind generate -m <FILE> -i <FILE> [-o <DIR>] [-p <NAME>]
  winbind generate -m <FILE> [IDENT]...",
        )
        .after_help(
            r#"EXAMPLES:
  winbind generate -m win32.json -i idents.txt          # write ./output
  winbind generate -m win32.bin -i - -o pinvoke         # identifiers on stdin
  winbind generate -m win32.json GetCursorPos Beep      # inline identifiers
  winbind generate -m win32.json -i idents.txt --strict # fail on unknown names"#,
        )
        .arg(metadata_arg())
        .arg(input_arg())
        .arg(identifiers_arg())
        .arg(output_dir_arg())
        .arg(package_arg())
        .arg(force_clean_arg())
        .arg(strict_arg())
        .arg(single_types_file_arg())
        .arg(no_header_arg())
}

/// Print the resolved model.
pub fn inspect_command() -> Command {
    Command::new("inspect")
        .about("Show the resolved methods and types")
        .after_help(
            r#"EXAMPLES:
  winbind inspect -m win32.json GetCursorPos     # text listing
  winbind inspect -m win32.json -i idents.txt    # identifiers from a file
  winbind inspect -m win32.json RECT --json      # JSON model"#,
        )
        .arg(metadata_arg())
        .arg(input_arg())
        .arg(identifiers_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Encode a JSON snapshot in the binary format.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert a JSON metadata snapshot to the binary format")
        .after_help(
            r#"EXAMPLES:
  winbind convert win32.json -o win32.bin"#,
        )
        .arg(snapshot_path_arg())
        .arg(binary_output_arg())
}
