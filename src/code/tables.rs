//! Amino-acid lookup tables for the supported NCBI genetic codes.
//!
//! Codon order: AAA, AAC, AAG, AAT, ACA, ... with A=0, C=1, G=2, T=3 per
//! base, i.e. index = b1*16 + b2*4 + b3. This is also lexicographic order
//! over A/C/G/T, which keeps table indices aligned with sorted frequency
//! keys. Stop codons are encoded as `b'*'`.

pub(crate) const STANDARD_ID: u32 = 1;

/// Standard genetic code (NCBI Table 1).
const TABLE1: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Vertebrate mitochondrial (NCBI Table 2): TGA=Trp, AGA/AGG=Stop, ATA=Met.
const TABLE2: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'*', b'S', b'*', b'S',
    b'M', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'W', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Yeast mitochondrial (NCBI Table 3): CTN=Thr, TGA=Trp, ATA=Met.
const TABLE3: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'M', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'T', b'T', b'T', b'T', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'W', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Mycoplasma/Spiroplasma (NCBI Table 4): TGA=Trp.
const TABLE4: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'W', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Invertebrate mitochondrial (NCBI Table 5): AGA/AGG=Ser, TGA=Trp, ATA=Met.
const TABLE5: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'S', b'S', b'S', b'S',
    b'M', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'W', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Ciliate nuclear (NCBI Table 6): TAA/TAG=Gln.
const TABLE6: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'Q', b'Y', b'Q', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Bacterial/plant plastid (NCBI Table 11): same amino acids as Table 1.
const TABLE11: [u8; 64] = TABLE1;

pub(crate) const ALL: [(u32, &str, [u8; 64]); 7] = [
    (1, "Standard", TABLE1),
    (2, "Vertebrate Mitochondrial", TABLE2),
    (3, "Yeast Mitochondrial", TABLE3),
    (4, "Mycoplasma/Spiroplasma", TABLE4),
    (5, "Invertebrate Mitochondrial", TABLE5),
    (6, "Ciliate Nuclear", TABLE6),
    (11, "Bacterial/Plant Plastid", TABLE11),
];
