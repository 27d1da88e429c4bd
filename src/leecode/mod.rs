//! Core Leecode codec module

pub mod error;
pub mod table;
mod normalize;
mod encoder;
mod decoder;
mod reference;

pub use encoder::encode;
pub use decoder::decode;
pub use normalize::normalize;
pub use reference::{reference_table, ReferenceEntry};
pub use error::{DecodeError, EncodeError, LeecodeError, Result};
