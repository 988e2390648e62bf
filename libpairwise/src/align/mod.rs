pub mod structs;

mod global;
pub use global::{global_affine, sentinel_score, SENTINEL_FLOOR};

mod local;
pub use local::{fill_local, local_linear};

mod traceback;
pub use traceback::{traceback, Traceback};

use log::{log_enabled, trace, Level};

use crate::align::structs::{Alignment, DpMatrix, TraceMatrix};
use crate::structs::{AlignmentMode, ScoringModel, Sequence};

/// Dump a filled score grid and its move tags at trace level.
fn trace_matrices(label: &str, score_matrix: &DpMatrix, trace_matrix: &TraceMatrix) {
    if !log_enabled!(Level::Trace) {
        return;
    }

    let mut dump: Vec<u8> = vec![];
    if score_matrix.dump(&mut dump).is_ok() && trace_matrix.dump(&mut dump).is_ok() {
        trace!("{label} matrices:\n{}", String::from_utf8_lossy(&dump));
    }
}

/// Align two sequences under the given regime.
pub fn align(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringModel,
    mode: AlignmentMode,
) -> Alignment {
    match mode {
        AlignmentMode::Global => global_affine(seq_1, seq_2, scoring),
        AlignmentMode::Local => local_linear(seq_1, seq_2, scoring),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_align_dispatches_on_mode() {
        let seq_1 = Sequence::from_utf8(b"TTACGCC");
        let seq_2 = Sequence::from_utf8(b"GGACGTT");
        let scoring = ScoringModel::new(2, -1, -2, -3);

        let global = align(&seq_1, &seq_2, &scoring, AlignmentMode::Global);
        check!(global == global_affine(&seq_1, &seq_2, &scoring));
        check!(global.seq_1_start == 1);
        check!(global.seq_1_end == 7);

        let local = align(&seq_1, &seq_2, &scoring, AlignmentMode::Local);
        check!(local == local_linear(&seq_1, &seq_2, &scoring));
        check!(local.score == 6);
        check!(local.aligned_pair() == ("ACG", "ACG"));
    }
}
