use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "End-to-end alignment with affine gap costs")]
    Global(AlignArgs),
    #[command(about = "Best-substring alignment with a linear gap cost")]
    Local(AlignArgs),
}

#[derive(Parser, Debug)]
#[command(name = "pairwise")]
#[command(about = "Optimal pairwise alignment of two sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Debug, Args, Clone)]
pub struct AlignArgs {
    /// The first sequence
    #[arg(value_name = "SEQ1.fasta")]
    pub seq_1_path: PathBuf,

    /// The second sequence
    #[arg(value_name = "SEQ2.fasta")]
    pub seq_2_path: PathBuf,

    /// Scoring file: a header line, then "match mismatch gap-extend [gap-open]"
    #[arg(value_name = "SCORING")]
    pub scoring_path: PathBuf,

    /// Upper-case both sequences before aligning
    #[arg(long = "fold-case", action)]
    pub fold_case: bool,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The score, a heading, and the two aligned rows
    #[default]
    Standard,
    /// Blocks of 80 columns with coordinates and a match line
    Pretty,
    /// One row of alignment fields under a column header
    Tabular,
    /// The full alignment record as JSON
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// The output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Standard)]
    pub format: OutputFormat,

    /// Where to place the output (default: stdout)
    #[arg(short = 'O', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow the output file to be overwritten
    #[arg(long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}
