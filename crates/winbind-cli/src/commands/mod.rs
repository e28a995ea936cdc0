pub mod convert;
pub mod generate;
pub mod identifiers;
pub mod inspect;
pub mod metadata_loader;
pub mod output_dir;
