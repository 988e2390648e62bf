use std::io::Write;

use anyhow::Result;

use super::Coordinate;

/// A dense (seq_1_length + 1) x (seq_2_length + 1) grid of integer scores.
#[derive(Default, Clone)]
pub struct DpMatrix {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    /// The DP matrix cells as a flat vector.
    //
    // the data is stored row-major:
    //     [
    //         s_(0, 0), s_(0, 1), ..., s_(0, N),
    //         s_(1, 0), s_(1, 1), ..., s_(1, N),
    //         ...
    //         s_(M, 0), s_(M, 1), ..., s_(M, N),
    //     ]
    //
    // where:
    //
    //     M:        <seq_1_length>
    //     N:        <seq_2_length>
    //     s_(i, j): the score at cell (i, j)
    //
    pub data: Vec<i32>,
}

impl DpMatrix {
    /// Allocate a matrix with every cell set to `fill`.
    pub fn new(seq_1_length: usize, seq_2_length: usize, fill: i32) -> Self {
        DpMatrix {
            seq_1_length,
            seq_2_length,
            data: vec![fill; (seq_1_length + 1) * (seq_2_length + 1)],
        }
    }

    #[inline]
    fn idx(&self, seq_1_idx: usize, seq_2_idx: usize) -> usize {
        debug_assert!(seq_1_idx <= self.seq_1_length);
        debug_assert!(seq_2_idx <= self.seq_2_length);
        seq_1_idx * (self.seq_2_length + 1) + seq_2_idx
    }

    #[inline]
    pub fn get(&self, seq_1_idx: usize, seq_2_idx: usize) -> i32 {
        self.data[self.idx(seq_1_idx, seq_2_idx)]
    }

    #[inline]
    pub fn set(&mut self, seq_1_idx: usize, seq_2_idx: usize, value: i32) {
        let idx = self.idx(seq_1_idx, seq_2_idx);
        self.data[idx] = value;
    }

    /// Find the highest scoring cell.
    ///
    /// Cells are scanned row-major, and a cell only replaces the
    /// current best if it is strictly greater, so ties go to the
    /// first cell in scan order.
    pub fn first_max(&self) -> (Coordinate, i32) {
        let mut best: Option<(Coordinate, i32)> = None;

        for seq_1_idx in 0..=self.seq_1_length {
            for seq_2_idx in 0..=self.seq_2_length {
                let score = self.get(seq_1_idx, seq_2_idx);
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((Coordinate::new(seq_1_idx, seq_2_idx), score)),
                }
            }
        }

        // the matrix always has at least the (0, 0) cell
        best.unwrap_or((Coordinate::new(0, 0), self.data[0]))
    }

    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let row_idx_width = self.seq_1_length.to_string().len();
        let column_width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1)
            .max(self.seq_2_length.to_string().len())
            + 1;

        // write the seq_2 indices
        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for seq_2_idx in 0..=self.seq_2_length {
            write!(out, "{:>w$}", seq_2_idx, w = column_width)?;
        }
        writeln!(out)?;

        for seq_1_idx in 0..=self.seq_1_length {
            write!(out, "{:>w$} ", seq_1_idx, w = row_idx_width)?;
            for seq_2_idx in 0..=self.seq_2_length {
                write!(
                    out,
                    "{:>w$}",
                    self.get(seq_1_idx, seq_2_idx),
                    w = column_width
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
