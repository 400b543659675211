use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use paste::paste;
use ff_folding::NucleotideVec;

// ============================================================
//  Generic FASTA-like parser supporting lenient/strict modes
// ============================================================

/// How symbols outside the nucleotide alphabet are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequenceMode {
    /// Reject the input.
    #[default]
    Strict,
    /// Replace them with 'N' (never pairs).
    Lenient,
}

/// One header (optional) and its sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: NucleotideVec,
}

/// Header without the leading '>' and anything after the first space.
pub fn header_name(header: &str) -> Option<&str> {
    header.trim_start_matches('>').split_whitespace().next()
}

fn normalize(raw: &str, mode: SequenceMode) -> Result<NucleotideVec> {
    Ok(match mode {
        SequenceMode::Strict => NucleotideVec::try_from(raw)?,
        SequenceMode::Lenient => NucleotideVec::from_lossy(raw),
    })
}

/// A single sequence given directly, e.g. on the command line.
pub fn read_sequence(raw: &str, mode: SequenceMode) -> Result<FastaRecord> {
    let sequence = normalize(raw.trim(), mode)?;
    Ok(FastaRecord { header: None, sequence })
}

/// Moves the pending header/sequence into `records`.
fn finish_record(
    records: &mut Vec<FastaRecord>,
    header: &mut Option<String>,
    raw: &mut Option<String>,
    mode: SequenceMode,
) -> Result<()> {
    match (header.take(), raw.take()) {
        (Some(h), None) => Err(anyhow!("Missing sequence line for '{}'", h)),
        (h, Some(s)) => {
            let sequence = normalize(&s, mode)
                .with_context(|| format!("record {}", records.len() + 1))?;
            records.push(FastaRecord { header: h, sequence });
            Ok(())
        }
        (None, None) => Ok(()),
    }
}

/// Core parsing logic shared by all adapters.
///
/// A '>' line starts a new record, the first token of every following line
/// is appended to its sequence. A blank line ends a record, so records
/// without header are separated by blank lines.
fn parse_fasta_records<R: BufRead>(reader: R, mode: SequenceMode) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut raw: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if raw.is_some() {
                finish_record(&mut records, &mut header, &mut raw, mode)?;
            }
            continue;
        }

        if line.starts_with('>') {
            finish_record(&mut records, &mut header, &mut raw, mode)?;
            header = Some(line.to_string());
        } else if let Some(token) = line.split_whitespace().next() {
            raw.get_or_insert_with(String::new).push_str(token);
        }
    }
    finish_record(&mut records, &mut header, &mut raw, mode)?;

    if records.is_empty() {
        return Err(anyhow!("Missing sequence line"));
    }
    Ok(records)
}

// ============================================================
//  Base parser functions (strict and lenient variants)
// ============================================================

pub fn read_fasta_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    parse_fasta_records(reader, SequenceMode::Strict)
}

pub fn read_fasta_records_lossy<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    parse_fasta_records(reader, SequenceMode::Lenient)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let path = path.as_ref();
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                $base(BufReader::new(file))
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type RecordsResult = Result<Vec<FastaRecord>>;

define_input_variants!(read_fasta_records, RecordsResult);
define_input_variants!(read_fasta_records_lossy, RecordsResult);

/// Dispatch on the sequence mode.
pub fn read_records_input(input: &str, mode: SequenceMode) -> RecordsResult {
    match mode {
        SequenceMode::Strict => read_fasta_records_input(input),
        SequenceMode::Lenient => read_fasta_records_lossy_input(input),
    }
}

// ============================================================
//  Position ruler for terminal output
// ============================================================

/// "0....,....1....,..." up to and including `len`.
pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut skip = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = (i / 10).to_string();
            skip = t.len() - 1;
            s.push_str(&t);
        } else if skip > 0 {
            skip -= 1;
        } else if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

// ============================================================
//  Unit tests
// ============================================================
