use log::debug;

use crate::align::structs::{Alignment, DpMatrix, MoveTag, TraceMatrix};
use crate::align::{trace_matrices, traceback};
use crate::structs::{AlignmentMode, ScoringModel, Sequence};

/// Fill the linear-gap local matrix and its move tags.
///
/// Row 0 and column 0 stay at 0 with no incoming move, and any cell
/// whose best predecessor would go negative restarts at 0.
pub fn fill_local(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringModel,
) -> (DpMatrix, TraceMatrix) {
    let seq_1_length = seq_1.length;
    let seq_2_length = seq_2.length;

    debug!("local fill: {seq_1_length} x {seq_2_length}");

    let mut score_matrix = DpMatrix::new(seq_1_length, seq_2_length, 0);
    let mut trace_matrix = TraceMatrix::new(seq_1_length, seq_2_length);

    let gap_extend = scoring.gap_extend;

    for seq_1_idx in 1..=seq_1_length {
        let seq_1_residue = seq_1.utf8_bytes[seq_1_idx];

        for seq_2_idx in 1..=seq_2_length {
            let seq_2_residue = seq_2.utf8_bytes[seq_2_idx];

            let diag_score = score_matrix
                .get(seq_1_idx - 1, seq_2_idx - 1)
                .saturating_add(scoring.substitution(seq_1_residue, seq_2_residue));
            let vert_score = score_matrix
                .get(seq_1_idx - 1, seq_2_idx)
                .saturating_add(gap_extend);
            let hori_score = score_matrix
                .get(seq_1_idx, seq_2_idx - 1)
                .saturating_add(gap_extend);

            // ties: diagonal, then vertical, then horizontal
            let (score, tag) =
                if diag_score >= vert_score && diag_score >= hori_score && diag_score >= 0 {
                    (diag_score, MoveTag::Diagonal)
                } else if vert_score >= diag_score && vert_score >= hori_score && vert_score >= 0 {
                    (vert_score, MoveTag::Vertical)
                } else if hori_score >= diag_score && hori_score >= vert_score && hori_score >= 0 {
                    (hori_score, MoveTag::Horizontal)
                } else {
                    (0, MoveTag::None)
                };

            score_matrix.set(seq_1_idx, seq_2_idx, score);
            trace_matrix.set(seq_1_idx, seq_2_idx, tag);
        }
    }

    (score_matrix, trace_matrix)
}

/// The highest scoring alignment between any substring of `seq_1`
/// and any substring of `seq_2`, using a per-symbol gap cost.
///
/// The `gap_open` field of the scoring model is not used. When nothing
/// scores above zero the alignment is empty with a score of 0.
pub fn local_linear(seq_1: &Sequence, seq_2: &Sequence, scoring: &ScoringModel) -> Alignment {
    let (score_matrix, trace_matrix) = fill_local(seq_1, seq_2, scoring);
    trace_matrices("local", &score_matrix, &trace_matrix);

    let (last, score) = score_matrix.first_max();

    let trace = traceback(&trace_matrix, last, seq_1, seq_2);

    debug!(
        "local alignment: score {score}, cell ({}, {}), {} columns",
        last.seq_1_idx,
        last.seq_2_idx,
        trace.len()
    );

    Alignment::from_traceback(AlignmentMode::Local, score, &trace, seq_1, seq_2)
}
