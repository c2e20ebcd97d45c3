//! FASTA reading for the CLI, backed by needletail. The library core
//! never touches files; this lives on the binary side only.

use codonforge::error::{CfResult, CodonForgeError};
use needletail::parse_fastx_file;
use std::path::Path;

/// Read (id, sequence) records from a FASTA file.
pub fn read_fasta(path: &Path) -> CfResult<Vec<(String, String)>> {
    let mut reader = parse_fastx_file(path)
        .map_err(|e| CodonForgeError::Validation(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record
            .map_err(|e| CodonForgeError::Validation(format!("{}: {}", path.display(), e)))?;
        let id = String::from_utf8_lossy(record.id()).into_owned();
        let seq = String::from_utf8_lossy(&record.seq()).into_owned();
        records.push((id, seq));
    }
    if records.is_empty() || records.iter().all(|(_, seq)| seq.is_empty()) {
        return Err(CodonForgeError::Validation(format!(
            "no sequences found in {}",
            path.display()
        )));
    }
    Ok(records)
}
