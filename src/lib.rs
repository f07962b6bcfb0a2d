#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod repl;
