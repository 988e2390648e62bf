use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use libpairwise::align::align;
use libpairwise::align::structs::Alignment;
use libpairwise::output::output_json::write_json_output;
use libpairwise::output::output_standard::{write_pretty_output, write_standard_output};
use libpairwise::output::output_tabular::{write_tabular_output, TableFormat};
use libpairwise::structs::{AlignmentMode, ScoringModel, Sequence};
use log::info;

use crate::args::{AlignArgs, OutputArgs, OutputFormat};
use crate::stats::{RunStats, RunStatsBuilder};
use crate::util::output_writer;

/// Render an alignment in the requested format.
pub fn write_alignment(
    alignment: &Alignment,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Standard => write_standard_output(alignment, out),
        OutputFormat::Pretty => write_pretty_output(alignment, out),
        OutputFormat::Tabular => write_tabular_output(
            std::slice::from_ref(alignment),
            &mut TableFormat::all()?,
            out,
        ),
        OutputFormat::Json => write_json_output(alignment, out),
    }
}

fn read_inputs(
    args: &AlignArgs,
    mode: AlignmentMode,
) -> anyhow::Result<(Sequence, Sequence, ScoringModel)> {
    let mut seq_1 =
        Sequence::from_fasta(&args.seq_1_path).context("failed to read the first sequence")?;
    let mut seq_2 =
        Sequence::from_fasta(&args.seq_2_path).context("failed to read the second sequence")?;

    if args.fold_case {
        seq_1.fold_case();
        seq_2.fold_case();
    }

    let scoring = ScoringModel::from_path(&args.scoring_path, mode)?;

    Ok((seq_1, seq_2, scoring))
}

fn write_output(alignment: &Alignment, args: &OutputArgs) -> anyhow::Result<()> {
    let mut out = output_writer(&args.output_path, args.allow_overwrite)?;
    write_alignment(alignment, args.format, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Read both sequences and the scoring file, align, and write the result.
pub fn run(args: &AlignArgs, mode: AlignmentMode) -> anyhow::Result<RunStats> {
    let mut stats = RunStatsBuilder::default();

    let now = Instant::now();
    let (seq_1, seq_2, scoring) = read_inputs(args, mode)?;
    stats.read_time(now.elapsed());
    stats.dimensions(seq_1.length, seq_2.length);

    info!(
        "{mode} alignment of {} ({} residues) against {} ({} residues)",
        seq_1.name_or("seq_1"),
        seq_1.length,
        seq_2.name_or("seq_2"),
        seq_2.length
    );

    let now = Instant::now();
    let alignment = align(&seq_1, &seq_2, &scoring, mode);
    stats.align_time(now.elapsed());
    stats.score(alignment.score);

    let now = Instant::now();
    write_output(&alignment, &args.output_args)?;
    stats.write_time(now.elapsed());

    let stats = stats.build()?;
    info!("{stats}");

    Ok(stats)
}
