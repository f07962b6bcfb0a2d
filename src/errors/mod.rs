//! Error types and error handling.
//!
//! Lexical problems are never raised by the scanner itself; an `Illegal`
//! token is turned into an `Error` only when the driver reports it.

pub mod errors;
