pub mod code;
pub mod config;
pub mod distance;
pub mod encoding;
pub mod error;
pub mod freqs;
pub mod optimizer;
pub mod sample;

pub use error::{CfResult, CodonForgeError};
