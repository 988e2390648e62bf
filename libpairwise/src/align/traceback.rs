use crate::align::structs::{Coordinate, MoveTag, TraceMatrix};
use crate::alphabet::GAP_SYMBOL;
use crate::structs::Sequence;

/// The two gapped rows of an alignment, along with where the walk began and ended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Traceback {
    pub aligned_1: Vec<u8>,
    pub aligned_2: Vec<u8>,
    /// The cell the walk started from, i.e. the last aligned column
    pub last: Coordinate,
    /// The [`MoveTag::None`] cell the walk stopped on; it is not part of the alignment
    pub origin: Coordinate,
}

impl Traceback {
    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_1.is_empty()
    }
}

/// Walk the move tags back from `last` until a [`MoveTag::None`] cell is reached.
///
/// The tag grid must be well formed: every tag has to point at a cell
/// inside the matrix, which both aligners guarantee by tagging row 0
/// and column 0 with either `None` or a move that stays on the boundary.
pub fn traceback(
    trace_matrix: &TraceMatrix,
    last: Coordinate,
    seq_1: &Sequence,
    seq_2: &Sequence,
) -> Traceback {
    let mut aligned_1: Vec<u8> = vec![];
    let mut aligned_2: Vec<u8> = vec![];

    let mut seq_1_idx = last.seq_1_idx;
    let mut seq_2_idx = last.seq_2_idx;

    // the rows are built back to front, then reversed once at the end
    loop {
        match trace_matrix.get(seq_1_idx, seq_2_idx) {
            MoveTag::Vertical => {
                debug_assert!(seq_1_idx > 0);
                aligned_1.push(seq_1.utf8_bytes[seq_1_idx]);
                aligned_2.push(GAP_SYMBOL);
                seq_1_idx -= 1;
            }
            MoveTag::Horizontal => {
                debug_assert!(seq_2_idx > 0);
                aligned_1.push(GAP_SYMBOL);
                aligned_2.push(seq_2.utf8_bytes[seq_2_idx]);
                seq_2_idx -= 1;
            }
            MoveTag::Diagonal => {
                debug_assert!(seq_1_idx > 0 && seq_2_idx > 0);
                aligned_1.push(seq_1.utf8_bytes[seq_1_idx]);
                aligned_2.push(seq_2.utf8_bytes[seq_2_idx]);
                seq_1_idx -= 1;
                seq_2_idx -= 1;
            }
            MoveTag::None => break,
        }
    }

    aligned_1.reverse();
    aligned_2.reverse();

    Traceback {
        aligned_1,
        aligned_2,
        last,
        origin: Coordinate::new(seq_1_idx, seq_2_idx),
    }
}
