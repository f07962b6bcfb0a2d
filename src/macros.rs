//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, String::from("42"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}
