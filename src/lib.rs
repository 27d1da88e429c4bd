//! # leecode
//!
//! A reversible text codec that writes every supported character as a fixed
//! two-digit decimal code (`00`..`97`) and reads it back.
//!
//! ```
//! assert_eq!(leecode::encode("Hi").unwrap(), "0734");
//! assert_eq!(leecode::decode("07 34").unwrap(), "Hi");
//! ```
pub mod leecode;

// Re-export the main API for convenience
pub use leecode::{
    decode,
    encode,
    normalize,
    reference_table,
    ReferenceEntry,
    error::{DecodeError, EncodeError, LeecodeError, Result},
    table::{Code, CODE_COUNT},
};
