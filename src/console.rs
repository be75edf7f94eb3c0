//! Handling the `rgp` CLI
//!
//! This module handles the command line parsing as well as basic information (help dialog, version information).
use crate::{
    error::{GeoError, GeoResult},
    get_version,
};
use clap::{builder::Str, Parser};
use std::path::{Path, PathBuf};

/// Command line arguments for the `rgp` application.
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// file path of the job document, which should be read in
    pub file_path: PathBuf,

    /// file path of the CSV output. if not defined, the file path of the job document with a `.csv` extension is used
    pub output: PathBuf,

    /// random seed overriding the one of the job document
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Default)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// filepath of the job document (.yaml / .yml) to read in
    #[arg(short, long)]
    file_path: Option<String>,

    /// filepath of the CSV output. if not defined, the job document path with a .csv extension is used
    #[arg(short, long)]
    output: Option<String>,

    /// random seed. overrides the seed given in the job document
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Checks if the passed file path points to an existing YAML file.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Evaluates the output path. Its parent directory must exist.
fn eval_output_input(output: &str) -> Option<PathBuf> {
    let path = PathBuf::from(output);
    if output.is_empty() || path.is_dir() {
        return None;
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Some(path),
        _ => None,
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = GeoError;

    fn try_from(part_args: PartialArgs) -> GeoResult<Self> {
        let file_path = part_args
            .file_path
            .ok_or_else(|| GeoError::Console("no job document given (use --file-path)".into()))?;
        let file_path = PathBuf::from(file_path);
        if !file_path_is_valid(&file_path) {
            return Err(GeoError::Console(format!(
                "invalid job document {}: must be an existing .yaml or .yml file",
                file_path.display()
            )));
        }
        let output = match part_args.output.as_deref() {
            Some(output) => eval_output_input(output).ok_or_else(|| {
                GeoError::Console(format!("invalid output file path {output}"))
            })?,
            None => file_path.with_extension("csv"),
        };
        Ok(Self {
            file_path,
            output,
            seed: part_args.seed,
        })
    }
}

/// Creates the intro text of the CLI.
#[must_use]
fn create_intro() -> String {
    format!(
        "{: ^80}\n{: ^80}\n",
        "rgp - random points on geometric surfaces",
        format!("version {}", get_version())
    )
}

/// Show the CLI intro and version information on the console.
pub fn show_intro() {
    println!("{}", create_intro());
}
