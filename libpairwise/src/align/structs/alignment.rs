use std::cmp::{max, min};

use serde::Serialize;

use crate::align::Traceback;
use crate::alphabet::{GAP_SYMBOL, UTF8_PIPE, UTF8_SPACE};
use crate::output::output_tabular::{Field, TableFormat};
use crate::structs::{AlignmentMode, Sequence};
use crate::util::percent;

/// The number of alignment columns per block in [`Alignment::ali_string`].
const BLOCK_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// The regime that produced the alignment
    pub mode: AlignmentMode,
    /// The optimal alignment score
    pub score: i32,
    /// The number of alignment columns
    pub length: usize,
    /// The (1-based) start coordinate of the first sequence
    pub seq_1_start: usize,
    /// The (1-based, inclusive) end coordinate of the first sequence
    pub seq_1_end: usize,
    /// The (1-based) start coordinate of the second sequence
    pub seq_2_start: usize,
    /// The (1-based, inclusive) end coordinate of the second sequence
    pub seq_2_end: usize,

    // optional fields
    /// The name of the first sequence
    pub seq_1_name: Option<String>,
    /// The name of the second sequence
    pub seq_2_name: Option<String>,

    // display strings
    /// The first sequence with gap symbols inserted
    pub seq_1_string: String,
    /// The second sequence with gap symbols inserted
    pub seq_2_string: String,
    /// The display in between the two sequences
    pub middle_string: String,
}

/// This selects the proper character for the middle line of the alignment reporting.
fn select_middle_character(byte_1: u8, byte_2: u8) -> u8 {
    if byte_1 == byte_2 && byte_1 != GAP_SYMBOL {
        UTF8_PIPE
    } else {
        UTF8_SPACE
    }
}

/// The (1-based, inclusive) range of residues consumed between the
/// origin index (exclusive) and last index (inclusive) of a traceback.
///
/// An empty range is reported as (0, 0).
fn consumed_range(origin_idx: usize, last_idx: usize) -> (usize, usize) {
    if last_idx > origin_idx {
        (origin_idx + 1, last_idx)
    } else {
        (0, 0)
    }
}

fn non_empty_name(seq: &Sequence) -> Option<String> {
    if seq.name.is_empty() {
        None
    } else {
        Some(seq.name.clone())
    }
}

impl Alignment {
    pub fn from_traceback(
        mode: AlignmentMode,
        score: i32,
        trace: &Traceback,
        seq_1: &Sequence,
        seq_2: &Sequence,
    ) -> Self {
        let (seq_1_start, seq_1_end) =
            consumed_range(trace.origin.seq_1_idx, trace.last.seq_1_idx);
        let (seq_2_start, seq_2_end) =
            consumed_range(trace.origin.seq_2_idx, trace.last.seq_2_idx);

        let middle_bytes: Vec<u8> = trace
            .aligned_1
            .iter()
            .zip(trace.aligned_2.iter())
            .map(|(&a, &b)| select_middle_character(a, b))
            .collect();

        Alignment {
            mode,
            score,
            length: trace.len(),
            seq_1_start,
            seq_1_end,
            seq_2_start,
            seq_2_end,
            seq_1_name: non_empty_name(seq_1),
            seq_2_name: non_empty_name(seq_2),
            seq_1_string: String::from_utf8_lossy(&trace.aligned_1).to_string(),
            seq_2_string: String::from_utf8_lossy(&trace.aligned_2).to_string(),
            middle_string: String::from_utf8_lossy(&middle_bytes).to_string(),
        }
    }

    /// The two aligned rows.
    pub fn aligned_pair(&self) -> (&str, &str) {
        (&self.seq_1_string, &self.seq_2_string)
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.seq_1_string
            .bytes()
            .zip(self.seq_2_string.bytes())
    }

    /// The number of columns that pair two identical residues.
    pub fn matches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a == b && a != GAP_SYMBOL)
            .count()
    }

    /// The number of columns that pair two different residues.
    pub fn mismatches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != b && a != GAP_SYMBOL && b != GAP_SYMBOL)
            .count()
    }

    /// The number of columns that hold a gap symbol.
    pub fn gaps(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a == GAP_SYMBOL || b == GAP_SYMBOL)
            .count()
    }

    /// The fraction of columns that are matches; 0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.matches() as f64 / self.length as f64
        }
    }

    pub fn seq_1_label(&self) -> &str {
        self.seq_1_name.as_deref().unwrap_or("seq_1")
    }

    pub fn seq_2_label(&self) -> &str {
        self.seq_2_name.as_deref().unwrap_or("seq_2")
    }

    pub fn tab_string_formatted(&self, format: &TableFormat) -> String {
        let mut tab_string = String::new();

        format
            .fields
            .iter()
            .zip(format.widths.iter())
            .for_each(|(field, width)| {
                let val = field.extract_from(self);
                tab_string = format!("{tab_string}{val:width$} ", width = width)
            });

        // remove the last space
        tab_string.pop();

        tab_string
    }

    /// Render the alignment in blocks of 80 columns, each row
    /// framed by the residue coordinates it covers.
    pub fn ali_string(&self) -> String {
        let mut ali_string = String::new();

        let name_width = max(self.seq_1_label().len(), self.seq_2_label().len());

        // score line
        ali_string.push_str(&format!(
            "==  {} score: {};  identity: {} ({}/{});  gaps: {}\n",
            self.mode,
            Field::Score.extract_from(self),
            percent(self.identity()),
            self.matches(),
            self.length,
            self.gaps(),
        ));

        let seq_1_bytes = self.seq_1_string.as_bytes();
        let seq_2_bytes = self.seq_2_string.as_bytes();
        let middle_bytes = self.middle_string.as_bytes();

        // the rows only differ in byte length if lossy UTF8 conversion kicked in
        let columns = seq_1_bytes
            .len()
            .min(seq_2_bytes.len())
            .min(middle_bytes.len());

        // the next residue position to be displayed in each sequence
        let mut seq_1_next = max(self.seq_1_start, 1);
        let mut seq_2_next = max(self.seq_2_start, 1);

        let mut start_offset: usize = 0;
        while start_offset < columns {
            let end_offset = min(start_offset + BLOCK_WIDTH, columns);

            let seq_1_consumed = residue_count(&seq_1_bytes[start_offset..end_offset]);
            let seq_2_consumed = residue_count(&seq_2_bytes[start_offset..end_offset]);

            ali_string.push_str(&format!(
                "{:>W$} {:5} {} {:<5}\n",
                self.seq_1_label(),
                seq_1_next,
                String::from_utf8_lossy(&seq_1_bytes[start_offset..end_offset]),
                (seq_1_next + seq_1_consumed).saturating_sub(1),
                W = name_width
            ));

            // middle line
            ali_string.push_str(&format!(
                "{:W$} {:5} {}\n",
                "",
                "",
                String::from_utf8_lossy(&middle_bytes[start_offset..end_offset]),
                W = name_width
            ));

            ali_string.push_str(&format!(
                "{:>W$} {:5} {} {:<5}\n\n",
                self.seq_2_label(),
                seq_2_next,
                String::from_utf8_lossy(&seq_2_bytes[start_offset..end_offset]),
                (seq_2_next + seq_2_consumed).saturating_sub(1),
                W = name_width
            ));

            seq_1_next += seq_1_consumed;
            seq_2_next += seq_2_consumed;
            start_offset = end_offset;
        }

        ali_string
    }
}

fn residue_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b != GAP_SYMBOL).count()
}
