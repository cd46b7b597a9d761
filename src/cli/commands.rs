use clap::Args;
use std::path::PathBuf;

/// Arguments for `provenance-cli generate`.
///
/// Parsing is clap's job; the mutual-exclusivity and requiredness of the
/// subject inputs are enforced by `subject::subject_from_inputs`, so error
/// messages are identical whether the tool is driven from the CLI or as a
/// library.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Subject file to generate a statement for
    #[arg(value_name = "SUBJECT_PATH")]
    pub subject_path: Option<PathBuf>,

    /// Subject name to use in the statement
    #[arg(long = "subject-name")]
    pub subject_name: Option<String>,

    /// Subject digest to use in the statement ("sha256:<hex-digest>")
    #[arg(long = "subject-digest")]
    pub subject_digest: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        visible_aliases = ["output", "out"]
    )]
    pub output_file: Option<PathBuf>,
}
