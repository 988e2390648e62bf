use crate::align::structs::Alignment;

use anyhow::Result;
use std::io::Write;

/// Write the alignment as a pretty-printed JSON object.
pub fn write_json_output(alignment: &Alignment, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, alignment)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::global_affine;
    use crate::structs::{ScoringModel, Sequence};
    use assert2::check;

    #[test]
    fn test_json_output() -> Result<()> {
        let ali = global_affine(
            &Sequence::from_utf8(b"AAA").with_name("first"),
            &Sequence::from_utf8(b"AA"),
            &ScoringModel::new(1, -1, -1, -2),
        );

        let mut out: Vec<u8> = vec![];
        write_json_output(&ali, &mut out)?;

        let value: serde_json::Value = serde_json::from_slice(&out)?;
        check!(value["mode"] == "global");
        check!(value["score"] == -1);
        check!(value["seq_1_string"] == "AAA");
        check!(value["seq_2_string"] == "-AA");
        check!(value["seq_1_name"] == "first");
        check!(value["seq_2_name"].is_null());
        check!(value["seq_2_start"] == 1);
        check!(value["seq_2_end"] == 2);
        Ok(())
    }
}
