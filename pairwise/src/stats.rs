use std::fmt::{Display, Formatter};
use std::time::Duration;

use derive_builder::Builder;

/// What one run of the aligner did, and how long each part took.
#[derive(Builder, Default, Debug)]
#[builder(setter(strip_option), default)]
pub struct RunStats {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    /// The number of cells in each DP matrix, boundaries included
    pub cells: usize,
    pub score: i32,
    pub read_time: Duration,
    pub align_time: Duration,
    pub write_time: Duration,
}

impl RunStatsBuilder {
    pub fn dimensions(&mut self, seq_1_length: usize, seq_2_length: usize) -> &mut Self {
        self.seq_1_length(seq_1_length)
            .seq_2_length(seq_2_length)
            .cells((seq_1_length + 1) * (seq_2_length + 1))
    }
}

impl Display for RunStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} ({} cells), score {}; read {:?}, align {:?}, write {:?}",
            self.seq_1_length,
            self.seq_2_length,
            self.cells,
            self.score,
            self.read_time,
            self.align_time,
            self.write_time,
        )
    }
}
