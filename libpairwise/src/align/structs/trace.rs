use std::io::Write;

/// The predecessor that produced the optimal score of a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MoveTag {
    /// No incoming edge: the alignment origin, or a local restart
    #[default]
    None,
    /// Came from (i - 1, j - 1): both sequences advance
    Diagonal,
    /// Came from (i - 1, j): only seq_1 advances
    Vertical,
    /// Came from (i, j - 1): only seq_2 advances
    Horizontal,
}

impl MoveTag {
    pub fn symbol(&self) -> char {
        match self {
            MoveTag::None => '.',
            MoveTag::Diagonal => '\\',
            MoveTag::Vertical => '|',
            MoveTag::Horizontal => '-',
        }
    }
}

/// A cell position in a DP matrix: `seq_1_idx` is the row, `seq_2_idx` the column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub seq_1_idx: usize,
    pub seq_2_idx: usize,
}

impl Coordinate {
    pub fn new(seq_1_idx: usize, seq_2_idx: usize) -> Self {
        Self {
            seq_1_idx,
            seq_2_idx,
        }
    }
}

/// The move tags that parallel a [`DpMatrix`](super::DpMatrix).
#[derive(Default, Clone)]
pub struct TraceMatrix {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    pub data: Vec<MoveTag>,
}

impl TraceMatrix {
    /// Allocate a matrix with every cell tagged [`MoveTag::None`].
    pub fn new(seq_1_length: usize, seq_2_length: usize) -> Self {
        TraceMatrix {
            seq_1_length,
            seq_2_length,
            data: vec![MoveTag::None; (seq_1_length + 1) * (seq_2_length + 1)],
        }
    }

    #[inline]
    fn idx(&self, seq_1_idx: usize, seq_2_idx: usize) -> usize {
        debug_assert!(seq_1_idx <= self.seq_1_length);
        debug_assert!(seq_2_idx <= self.seq_2_length);
        seq_1_idx * (self.seq_2_length + 1) + seq_2_idx
    }

    #[inline]
    pub fn get(&self, seq_1_idx: usize, seq_2_idx: usize) -> MoveTag {
        self.data[self.idx(seq_1_idx, seq_2_idx)]
    }

    #[inline]
    pub fn set(&mut self, seq_1_idx: usize, seq_2_idx: usize, tag: MoveTag) {
        let idx = self.idx(seq_1_idx, seq_2_idx);
        self.data[idx] = tag;
    }

    pub fn dump(&self, out: &mut impl Write) -> anyhow::Result<()> {
        for seq_1_idx in 0..=self.seq_1_length {
            let row: String = (0..=self.seq_2_length)
                .map(|seq_2_idx| self.get(seq_1_idx, seq_2_idx).symbol())
                .collect();
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}
