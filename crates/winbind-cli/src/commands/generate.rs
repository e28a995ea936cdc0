use std::path::PathBuf;

use tracing::{info, warn};
use winbind_compiler::typegen::golang::{self, Config, TypeLayout};
use winbind_compiler::{DirectorySink, OutputSink, resolve_identifiers};

use super::identifiers;
use super::metadata_loader::load_store;
use super::output_dir;
use crate::error::CliError;

pub struct GenerateArgs {
    pub metadata: PathBuf,
    pub input: Option<PathBuf>,
    pub identifiers: Vec<String>,
    pub output: PathBuf,
    pub package: String,
    pub force_clean: bool,
    pub strict: bool,
    pub single_types_file: bool,
    pub header: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let store = load_store(&args.metadata)?;
    let identifiers = identifiers::collect(args.input.as_deref(), &args.identifiers)?;
    let resolution = resolve_identifiers(&store, &identifiers)?;

    let unresolved = resolution.unresolved();
    if !unresolved.is_empty() {
        if args.strict {
            return Err(CliError::Unresolved(
                unresolved.into_iter().map(str::to_owned).collect(),
            ));
        }
        warn!(
            count = unresolved.len(),
            names = %unresolved.join(", "),
            "skipping unresolved identifiers"
        );
    }

    let layout = if args.single_types_file {
        TypeLayout::SingleFile
    } else {
        TypeLayout::FilePerType
    };
    let config = Config::new()
        .package(args.package)
        .layout(layout)
        .header(args.header);
    let files = golang::emit(&resolution.registry, config)?;

    // Only touch the output once everything resolved and rendered.
    output_dir::prepare(
        &args.output,
        args.force_clean,
        output_dir::confirm_on_terminal,
    )?;
    DirectorySink::new(&args.output).write_all(&files)?;
    info!(
        files = files.len(),
        path = %args.output.display(),
        "generated bindings"
    );
    Ok(())
}
