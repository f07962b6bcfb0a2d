//! Lexical analysis module.
//!
//! This module contains the scanner that turns one line of source text
//! into a stream of tokens. It handles:
//!
//! - Single-pass byte classification with whitespace skipping
//! - Two-character operators (`==`, `!=`) via one-byte lookahead
//! - Keyword and identifier disambiguation through the reserved word table
//! - Unrecognised bytes, reported as `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
