use crate::align::structs::Alignment;
use crate::structs::AlignmentMode;

use anyhow::Result;
use std::io::Write;

fn mode_heading(mode: AlignmentMode) -> &'static str {
    match mode {
        AlignmentMode::Global => "Optimal Global Alignment with Affine Gap:",
        AlignmentMode::Local => "Optimal Local Alignment:",
    }
}

/// Write the score, a heading for the mode, and the two aligned rows.
pub fn write_standard_output(alignment: &Alignment, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Alignment score: {}", alignment.score)?;
    writeln!(out, "{}", mode_heading(alignment.mode))?;
    writeln!(out, "{}", alignment.seq_1_string)?;
    writeln!(out, "{}", alignment.seq_2_string)?;
    Ok(())
}

pub fn write_pretty_output(alignment: &Alignment, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", alignment.ali_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{global_affine, local_linear};
    use crate::structs::{ScoringModel, Sequence};
    use assert2::check;

    #[test]
    fn test_standard_output_global() -> Result<()> {
        let ali = global_affine(
            &Sequence::from_utf8(b"AAA"),
            &Sequence::from_utf8(b"AA"),
            &ScoringModel::new(1, -1, -1, -2),
        );

        let mut out: Vec<u8> = vec![];
        write_standard_output(&ali, &mut out)?;
        let text = String::from_utf8(out)?;
        check!(text == "Alignment score: -1\nOptimal Global Alignment with Affine Gap:\nAAA\n-AA\n");
        Ok(())
    }

    #[test]
    fn test_standard_output_empty_local() -> Result<()> {
        let ali = local_linear(
            &Sequence::from_utf8(b"A"),
            &Sequence::from_utf8(b"G"),
            &ScoringModel::new(2, -1, -1, 0),
        );

        let mut out: Vec<u8> = vec![];
        write_standard_output(&ali, &mut out)?;
        let text = String::from_utf8(out)?;
        check!(text == "Alignment score: 0\nOptimal Local Alignment:\n\n\n");
        Ok(())
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let ali = local_linear(
            &Sequence::from_utf8(b"AAGTTT").with_name("one"),
            &Sequence::from_utf8(b"CCAGTGG").with_name("two"),
            &ScoringModel::new(2, -1, -1, 0),
        );

        let mut out: Vec<u8> = vec![];
        write_pretty_output(&ali, &mut out)?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();

        check!(lines[0] == "==  local score: 6;  identity: 100.0% (3/3);  gaps: 0");
        check!(lines[1] == "one     2 AGT 4    ");
        check!(lines[2] == "          |||");
        check!(lines[3] == "two     3 AGT 5    ");
        Ok(())
    }
}
