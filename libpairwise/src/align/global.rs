use log::debug;

use crate::align::structs::{Alignment, Coordinate, DpMatrix, MoveTag, TraceMatrix};
use crate::align::{trace_matrices, traceback};
use crate::structs::{AlignmentMode, ScoringModel, Sequence};

/// The most negative value a sentinel is allowed to take.
///
/// It is far enough from `i32::MIN` that the recurrence can keep
/// adding gap costs to it without saturating into real scores.
pub const SENTINEL_FLOOR: i32 = i32::MIN / 4;

/// The value that every cell holds before it is computed.
///
/// This is `(gap_open + gap_extend) * len(seq_1) * len(seq_2)`, which sits
/// below every attainable score when gap costs are negative. When either
/// sequence is empty, or the gap costs are not negative, the product
/// degenerates, and [`SENTINEL_FLOOR`] is used instead.
pub fn sentinel_score(seq_1_length: usize, seq_2_length: usize, scoring: &ScoringModel) -> i32 {
    let product = (scoring.gap_open as i64 + scoring.gap_extend as i64)
        .saturating_mul(seq_1_length as i64)
        .saturating_mul(seq_2_length as i64);

    if product < 0 && product >= SENTINEL_FLOOR as i64 {
        product as i32
    } else {
        SENTINEL_FLOOR
    }
}

/// The four coupled score grids of the affine recurrence.
struct AffineMatrices {
    /// Paths that end in a substitution
    g: DpMatrix,
    /// Paths that end with a gap in seq_1 (a horizontal move)
    e: DpMatrix,
    /// Paths that end with a gap in seq_2 (a vertical move)
    f: DpMatrix,
    /// The best of the three
    s: DpMatrix,
}

impl AffineMatrices {
    fn new(seq_1_length: usize, seq_2_length: usize, fill: i32) -> Self {
        Self {
            g: DpMatrix::new(seq_1_length, seq_2_length, fill),
            e: DpMatrix::new(seq_1_length, seq_2_length, fill),
            f: DpMatrix::new(seq_1_length, seq_2_length, fill),
            s: DpMatrix::new(seq_1_length, seq_2_length, fill),
        }
    }
}

/// Fill the affine-gap global matrices, returning the best-overall grid and the move tags.
fn fill_global(
    seq_1: &Sequence,
    seq_2: &Sequence,
    scoring: &ScoringModel,
) -> (DpMatrix, TraceMatrix) {
    let seq_1_length = seq_1.length;
    let seq_2_length = seq_2.length;

    let min_score = sentinel_score(seq_1_length, seq_2_length, scoring);
    debug!("global fill: {seq_1_length} x {seq_2_length}, sentinel {min_score}");

    let mut matrices = AffineMatrices::new(seq_1_length, seq_2_length, min_score);
    let mut trace_matrix = TraceMatrix::new(seq_1_length, seq_2_length);

    matrices.s.set(0, 0, 0);
    matrices.g.set(0, 0, 0);

    for seq_1_idx in 1..=seq_1_length {
        let gap_run = scoring.affine_gap_run(seq_1_idx);
        matrices.f.set(seq_1_idx, 0, gap_run);
        matrices.s.set(seq_1_idx, 0, gap_run);
        trace_matrix.set(seq_1_idx, 0, MoveTag::Vertical);
    }

    for seq_2_idx in 1..=seq_2_length {
        let gap_run = scoring.affine_gap_run(seq_2_idx);
        matrices.e.set(0, seq_2_idx, gap_run);
        matrices.s.set(0, seq_2_idx, gap_run);
        trace_matrix.set(0, seq_2_idx, MoveTag::Horizontal);
    }

    let gap_first = scoring.gap_first();
    let gap_extend = scoring.gap_extend;

    for seq_1_idx in 1..=seq_1_length {
        let seq_1_residue = seq_1.utf8_bytes[seq_1_idx];

        for seq_2_idx in 1..=seq_2_length {
            let seq_2_residue = seq_2.utf8_bytes[seq_2_idx];
            let substitution = scoring.substitution(seq_1_residue, seq_2_residue);

            let diag_score = matrices
                .s
                .get(seq_1_idx - 1, seq_2_idx - 1)
                .saturating_add(substitution);

            let hori_score = matrices
                .e
                .get(seq_1_idx, seq_2_idx - 1)
                .saturating_add(gap_extend)
                .max(
                    matrices
                        .s
                        .get(seq_1_idx, seq_2_idx - 1)
                        .saturating_add(gap_first),
                );

            let vert_score = matrices
                .f
                .get(seq_1_idx - 1, seq_2_idx)
                .saturating_add(gap_extend)
                .max(
                    matrices
                        .s
                        .get(seq_1_idx - 1, seq_2_idx)
                        .saturating_add(gap_first),
                );

            matrices.g.set(seq_1_idx, seq_2_idx, diag_score);
            matrices.e.set(seq_1_idx, seq_2_idx, hori_score);
            matrices.f.set(seq_1_idx, seq_2_idx, vert_score);

            // ties: horizontal beats both, then diagonal beats vertical
            let (best_score, tag) = if hori_score >= diag_score && hori_score >= vert_score {
                (hori_score, MoveTag::Horizontal)
            } else if diag_score >= vert_score {
                (diag_score, MoveTag::Diagonal)
            } else {
                (vert_score, MoveTag::Vertical)
            };

            matrices.s.set(seq_1_idx, seq_2_idx, best_score);
            trace_matrix.set(seq_1_idx, seq_2_idx, tag);
        }
    }

    (matrices.s, trace_matrix)
}

/// Optimal end-to-end alignment of two sequences with affine gap costs.
///
/// A gap run of length `k` costs `gap_open + k * gap_extend`.
pub fn global_affine(seq_1: &Sequence, seq_2: &Sequence, scoring: &ScoringModel) -> Alignment {
    let (score_matrix, trace_matrix) = fill_global(seq_1, seq_2, scoring);
    trace_matrices("global", &score_matrix, &trace_matrix);

    let last = Coordinate::new(seq_1.length, seq_2.length);
    let score = score_matrix.get(last.seq_1_idx, last.seq_2_idx);

    let trace = traceback(&trace_matrix, last, seq_1, seq_2);
    debug_assert_eq!(trace.origin, Coordinate::new(0, 0));

    debug!("global alignment: score {score}, {} columns", trace.len());

    Alignment::from_traceback(AlignmentMode::Global, score, &trace, seq_1, seq_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::GAP_SYMBOL;
    use assert2::check;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn align(seq_1: &str, seq_2: &str, scoring: &ScoringModel) -> Alignment {
        global_affine(
            &Sequence::from_utf8(seq_1.as_bytes()),
            &Sequence::from_utf8(seq_2.as_bytes()),
            scoring,
        )
    }

    fn ungapped(aligned: &str) -> String {
        aligned.chars().filter(|&c| c != GAP_SYMBOL as char).collect()
    }

    fn random_sequence(rng: &mut Pcg64, alphabet: &[u8], max_length: usize) -> Vec<u8> {
        let length = rng.gen_range(0..=max_length);
        (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }

    #[test]
    fn test_gap_at_the_front() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("AAA", "AA", &scoring);
        check!(ali.score == -1);
        check!(ali.aligned_pair() == ("AAA", "-AA"));
    }

    #[test]
    fn test_identical_sequences() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("ACGT", "ACGT", &scoring);
        check!(ali.score == 4);
        check!(ali.aligned_pair() == ("ACGT", "ACGT"));
        check!(ali.seq_1_start == 1);
        check!(ali.seq_1_end == 4);
        check!(ali.mode == AlignmentMode::Global);
    }

    #[test]
    fn test_affine_gap_prefers_one_long_run() {
        // two separate gaps would cost 2 * (open + extend) = -10,
        // one gap of length 2 costs open + 2 * extend = -7
        let scoring = ScoringModel::new(2, -3, -1, -5);
        let ali = align("ACGTTGCA", "ACGCA", &scoring);
        let (aligned_1, aligned_2) = ali.aligned_pair();
        check!(aligned_1 == "ACGTTGCA");
        check!(aligned_2.matches("---").count() == 1);
        check!(ali.score == 5 * 2 + (-5 + 3 * -1));
    }

    #[test]
    fn test_empty_first_sequence() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("", "ACG", &scoring);
        check!(ali.score == -2 + 3 * -1);
        check!(ali.aligned_pair() == ("---", "ACG"));
        check!(ali.seq_1_start == 0);
        check!(ali.seq_1_end == 0);
        check!(ali.seq_2_start == 1);
        check!(ali.seq_2_end == 3);
    }

    #[test]
    fn test_empty_second_sequence() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("AC", "", &scoring);
        check!(ali.score == -2 + 2 * -1);
        check!(ali.aligned_pair() == ("AC", "--"));
    }

    #[test]
    fn test_both_empty() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("", "", &scoring);
        check!(ali.score == 0);
        check!(ali.aligned_pair() == ("", ""));
        check!(ali.length == 0);
    }

    #[test]
    fn test_horizontal_wins_ties() {
        // with free gaps and a zero mismatch every move ties
        let scoring = ScoringModel::new(0, 0, 0, 0);
        let ali = align("AB", "CD", &scoring);
        check!(ali.score == 0);
        check!(ali.aligned_pair() == ("AB--", "--CD"));
    }

    #[test]
    fn test_case_sensitive() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        let ali = align("acgt", "ACGT", &scoring);
        check!(ali.score == -4);

        let mut seq_1 = Sequence::from_utf8(b"acgt");
        seq_1.fold_case();
        let ali = global_affine(&seq_1, &Sequence::from_utf8(b"ACGT"), &scoring);
        check!(ali.score == 4);
    }

    #[test]
    fn test_positive_gap_costs() {
        // the product sentinel would be positive here, so the floor is used
        let scoring = ScoringModel::new(1, -1, 1, 0);
        check!(sentinel_score(2, 2, &scoring) == SENTINEL_FLOOR);

        let ali = align("A", "A", &scoring);
        // gapping both residues (+2) beats matching them (+1)
        check!(ali.score == 2);
        check!(ali.aligned_pair() == ("A-", "-A"));
    }

    #[test]
    fn test_zero_net_gap_open() {
        // open + extend == 0 makes the size-scaled sentinel 0, so the floor is used
        let scoring = ScoringModel::new(-2, -2, -1, 1);
        check!(sentinel_score(2, 2, &scoring) == SENTINEL_FLOOR);

        // substitutions cost 2, a one-symbol gap run costs nothing,
        // so the gaps alternate between the rows
        let ali = align("AC", "GT", &scoring);
        check!(ali.score == 0);
        check!(ali.aligned_pair() == ("A-C-", "-G-T"));
    }

    #[test]
    fn test_sentinel_score() {
        let scoring = ScoringModel::new(1, -1, -1, -2);
        check!(sentinel_score(3, 2, &scoring) == -18);
        check!(sentinel_score(0, 2, &scoring) == SENTINEL_FLOOR);
        check!(sentinel_score(2, 0, &scoring) == SENTINEL_FLOOR);
        check!(sentinel_score(1_000_000, 1_000_000, &scoring) == SENTINEL_FLOOR);
    }

    #[test]
    fn test_global_properties_on_random_pairs() {
        let mut rng = Pcg64::seed_from_u64(0);
        let scorings = [
            ScoringModel::new(1, -1, -1, -2),
            ScoringModel::new(2, -3, -1, -5),
            ScoringModel::new(5, -4, -2, -10),
            ScoringModel::new(1, 0, 0, 0),
        ];

        for _ in 0..200 {
            let seq_1 = Sequence::from_utf8(&random_sequence(&mut rng, b"ACGT", 30));
            let seq_2 = Sequence::from_utf8(&random_sequence(&mut rng, b"ACGT", 30));
            let scoring = scorings[rng.gen_range(0..scorings.len())];

            let ali = global_affine(&seq_1, &seq_2, &scoring);
            let (aligned_1, aligned_2) = ali.aligned_pair();

            // both rows cover every column
            assert_eq!(aligned_1.len(), aligned_2.len());

            // the gaps come out to reproduce both inputs exactly
            assert_eq!(ungapped(aligned_1).as_bytes(), seq_1.residues());
            assert_eq!(ungapped(aligned_2).as_bytes(), seq_2.residues());

            // no column pairs two gaps
            assert!(aligned_1
                .bytes()
                .zip(aligned_2.bytes())
                .all(|(a, b)| a != GAP_SYMBOL || b != GAP_SYMBOL));

            // re-running yields the exact same alignment
            assert_eq!(global_affine(&seq_1, &seq_2, &scoring), ali);
        }
    }
}
