use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{PADDING_BYTE, UTF8_SPACE};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no fasta record found in: {path}")]
pub struct EmptyFastaError {
    path: String,
}

/// This holds the string data of a sequence to be aligned.
///
/// Symbols are compared byte-for-byte, so alignment is case-sensitive
/// unless [`Sequence::fold_case`] is called first.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The string data of the sequence.
    ///
    /// Index 0 holds a padding byte, so the residue at
    /// (1-based) position `i` lives at `utf8_bytes[i]`
    pub utf8_bytes: Vec<u8>,
}

fn split_header(header: &[u8]) -> Result<(String, Option<String>)> {
    let mut header_bytes = header.to_vec();
    let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

    let error_context: fn() -> &'static str = || "failed to create String from fasta header bytes";

    match first_space_idx {
        Some(idx) => {
            let details_bytes = header_bytes.split_off(idx + 1);
            header_bytes.pop();
            Ok((
                String::from_utf8(header_bytes).with_context(error_context)?,
                Some(String::from_utf8(details_bytes).with_context(error_context)?),
            ))
        }
        None => Ok((
            String::from_utf8(header_bytes).with_context(error_context)?,
            None,
        )),
    }
}

impl Sequence {
    /// Read the first record of a fasta file.
    ///
    /// The header line supplies the name and details; every sequence
    /// line after it is concatenated with whitespace stripped.
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_string = path.as_ref().to_string_lossy().to_string();

        let mut reader = Reader::from_path(&path)
            .with_context(|| format!("failed to open fasta file: {path_string}"))?;

        let record = match reader.next() {
            Some(record) => record.with_context(|| "failed to read fasta record")?,
            None => return Err(EmptyFastaError { path: path_string }.into()),
        };

        let (name, details) = split_header(record.head())?;

        // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
        let mut utf8_bytes: Vec<u8> = vec![PADDING_BYTE];

        for line in record.seq_lines() {
            utf8_bytes.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
        }

        log::debug!(
            "read sequence {name} ({} residues) from {path_string}",
            utf8_bytes.len() - 1
        );

        Ok(Sequence {
            name,
            details,
            length: utf8_bytes.len() - 1,
            utf8_bytes,
        })
    }

    pub fn from_utf8(bytes: &[u8]) -> Self {
        let mut utf8_bytes: Vec<u8> = vec![PADDING_BYTE; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);

        Sequence {
            name: "".to_string(),
            details: None,
            length: bytes.len(),
            utf8_bytes,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// The residues of the sequence, without the leading padding byte.
    pub fn residues(&self) -> &[u8] {
        self.utf8_bytes.get(1..).unwrap_or_default()
    }

    /// Upper-case every residue in place.
    pub fn fold_case(&mut self) {
        if let Some(residues) = self.utf8_bytes.get_mut(1..) {
            residues.make_ascii_uppercase();
        }
    }

    /// The name if there is one, otherwise the supplied fallback.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.is_empty() {
            fallback
        } else {
            &self.name
        }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.residues().chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            write!(f, "{}", String::from_utf8_lossy(byte_chunk))?;
            if iter.peek().is_some() {
                // if we're not on the last
                // line, add a linebreak
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.residues()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_utf8_is_one_indexed() {
        let seq = Sequence::from_utf8(b"ACGT");
        check!(seq.length == 4);
        check!(seq.utf8_bytes[0] == PADDING_BYTE);
        check!(seq.utf8_bytes[1] == b'A');
        check!(seq.utf8_bytes[4] == b'T');
        check!(seq.residues() == b"ACGT");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::from_utf8(b"");
        check!(seq.length == 0);
        check!(seq.utf8_bytes.len() == 1);
        check!(seq.residues().is_empty());
    }

    #[test]
    fn test_fold_case() {
        let mut seq = Sequence::from_utf8(b"acGt");
        seq.fold_case();
        check!(seq.residues() == b"ACGT");
        check!(seq.utf8_bytes[0] == PADDING_BYTE);
    }

    #[test]
    fn test_from_fasta_concatenates_lines() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, ">seq1 some details here")?;
        writeln!(file, "ACGT")?;
        writeln!(file, "TT GA")?;
        writeln!(file, "c")?;

        let seq = Sequence::from_fasta(file.path())?;
        check!(seq.name == "seq1");
        check!(seq.details.as_deref() == Some("some details here"));
        check!(seq.residues() == b"ACGTTTGAc");
        check!(seq.length == 9);
        Ok(())
    }

    #[test]
    fn test_from_fasta_reads_only_the_first_record() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, ">first")?;
        writeln!(file, "AAA")?;
        writeln!(file, ">second")?;
        writeln!(file, "CCC")?;

        let seq = Sequence::from_fasta(file.path())?;
        check!(seq.name == "first");
        check!(seq.details.is_none());
        check!(seq.residues() == b"AAA");
        Ok(())
    }

    #[test]
    fn test_from_fasta_without_records() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        let result = Sequence::from_fasta(file.path());
        check!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_from_fasta_requires_a_header() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "ACGT")?;
        writeln!(file, "ACGT")?;

        check!(Sequence::from_fasta(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_from_fasta_missing_file() {
        check!(Sequence::from_fasta("/definitely/not/a/real/file.fasta").is_err());
    }

    #[test]
    fn test_display_wraps_at_80() {
        let residues = vec![b'A'; 100];
        let seq = Sequence::from_utf8(&residues).with_name("long");
        let display = format!("{seq}");
        let lines: Vec<&str> = display.lines().collect();
        check!(lines.len() == 3);
        check!(lines[0] == ">long");
        check!(lines[1].len() == 80);
        check!(lines[2].len() == 20);
    }
}
