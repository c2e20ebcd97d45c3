//! Two-bit genome encoding.
//!
//! Each DNA base maps to a fixed 2-bit code (T=00, C=01, A=10, G=11), so a
//! sequence of n bases becomes a bit vector of length 2n that generic
//! crossover and mutation operators can cut and splice. The mapping is a
//! bijection: `bits_to_dna(dna_to_bits(s)) == s` for every valid sequence,
//! and the reverse holds for every even-length vector over {0, 1}.

use crate::error::{CfResult, CodonForgeError};

/// Encode a DNA sequence as a flat bit vector, two bits per base.
pub fn dna_to_bits(dna: &str) -> CfResult<Vec<u8>> {
    let mut bits = Vec::with_capacity(dna.len() * 2);
    for b in dna.bytes() {
        let pair: [u8; 2] = match b.to_ascii_uppercase() {
            b'T' => [0, 0],
            b'C' => [0, 1],
            b'A' => [1, 0],
            b'G' => [1, 1],
            other => {
                return Err(CodonForgeError::Validation(format!(
                    "invalid DNA base '{}'",
                    other as char
                )))
            }
        };
        bits.extend_from_slice(&pair);
    }
    Ok(bits)
}

/// Decode a bit vector back into a DNA sequence.
pub fn bits_to_dna(bits: &[u8]) -> CfResult<String> {
    if bits.len() % 2 != 0 {
        return Err(CodonForgeError::Validation(
            "bit vector length must be even".into(),
        ));
    }
    let mut dna = String::with_capacity(bits.len() / 2);
    for pair in bits.chunks_exact(2) {
        dna.push(match (pair[0], pair[1]) {
            (0, 0) => 'T',
            (0, 1) => 'C',
            (1, 0) => 'A',
            (1, 1) => 'G',
            _ => {
                return Err(CodonForgeError::Validation(
                    "bit vector may only contain 0s and 1s".into(),
                ))
            }
        });
    }
    Ok(dna)
}
