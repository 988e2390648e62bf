use std::io::Write;

use anyhow::Context;
use strum::{EnumIter, IntoEnumIterator};

use crate::align::structs::Alignment;
use crate::util::percent;

/// A column of the tabular output.
///
/// The header label of each column is derived from the
/// variant name: `Seq1Start` is labeled "seq1 start".
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Field {
    Seq1,
    Seq2,
    Seq1Start,
    Seq1End,
    Seq2Start,
    Seq2End,
    Score,
    Length,
    Identity,
    Gaps,
}

impl Field {
    /// Render this column's value for one alignment.
    pub fn extract_from(&self, alignment: &Alignment) -> String {
        match self {
            Field::Seq1 => alignment.seq_1_label().to_string(),
            Field::Seq2 => alignment.seq_2_label().to_string(),
            Field::Seq1Start => alignment.seq_1_start.to_string(),
            Field::Seq1End => alignment.seq_1_end.to_string(),
            Field::Seq2Start => alignment.seq_2_start.to_string(),
            Field::Seq2End => alignment.seq_2_end.to_string(),
            Field::Score => alignment.score.to_string(),
            Field::Length => alignment.length.to_string(),
            Field::Identity => percent(alignment.identity()),
            Field::Gaps => alignment.gaps().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub min_widths: Vec<usize>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let first_field = fields.first().context("a table needs at least one field")?;

        let mut labels = vec![];
        let mut min_widths = vec![];
        let mut widths = vec![];

        // this regex matches CamelCase words, keeping trailing digits attached
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z0-9]*").context("failed to build field label regex")?;

        // this closure extracts the words & minimum column width for a field
        let label_fn = |field: &Field| -> anyhow::Result<(Vec<String>, usize)> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_lowercase(), m.len()))
                .unzip();

            // the longest word is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        // the first column gets +2 to make room for the "# " prefix
        let (label_words, min_width) = label_fn(first_field)?;
        labels.push(label_words);
        widths.push(min_width + 2);
        min_widths.push(min_width + 2);

        for field in fields.iter().skip(1) {
            let (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
            min_widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            min_widths,
            widths,
        })
    }

    /// A format with every [`Field`], in declaration order.
    pub fn all() -> anyhow::Result<Self> {
        Self::new(&Field::iter().collect::<Vec<_>>())
    }

    pub fn update_widths(&mut self, alignments: &[Alignment]) {
        for alignment in alignments {
            self.fields
                .iter()
                .zip(self.widths.iter_mut())
                .for_each(|(field, width)| {
                    *width = (*width).max(field.extract_from(alignment).len());
                });
        }
    }

    pub fn reset_widths(&mut self) {
        self.widths
            .iter_mut()
            .zip(self.min_widths.iter())
            .for_each(|(width, min_width)| *width = *min_width);
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        // one row per label word, plus the dashed rule
        let mut header_rows: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // labels with fewer words are bottom-aligned
        let mut header_append_fn = |words: &[String], width: usize| {
            let offset = num_rows - words.len();

            (0..num_rows).for_each(|row| {
                let token = if row < offset {
                    ""
                } else {
                    words[row - offset].as_str()
                };
                header_rows[row].push_str(&format!("{:width$} ", token, width = width));
            });

            header_rows[num_rows].push_str(&format!("{} ", "-".repeat(width)));
        };

        // the first column loses 2 width to the "# " prefix
        header_append_fn(&self.labels[0], self.widths[0].saturating_sub(2));

        self.labels
            .iter()
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| header_append_fn(words, width));

        Ok(header_rows
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Write a header followed by one row per alignment.
pub fn write_tabular_output(
    alignments: &[Alignment],
    format: &mut TableFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    format.reset_widths();
    format.update_widths(alignments);

    writeln!(out, "{}", format.header()?)?;

    for alignment in alignments {
        writeln!(out, "{}", alignment.tab_string_formatted(format))?;
    }

    Ok(())
}
