//! Integration tests for the token echo loop.
//!
//! These drive `repl::start` over in-memory input and check the exact
//! transcript written back.

use std::io::{self, Cursor, Write};

use monkey_lexer::{
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    repl::{start, PROMPT},
};

fn run(input: &str) -> String {
    let mut output = Vec::new();
    start(Cursor::new(input.as_bytes()), &mut output, PROMPT).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_repl_echoes_tokens() {
    let transcript = run("let five = 5;\n");

    assert_eq!(
        transcript,
        concat!(
            ">> {Type:Let Literal:let}\n",
            "{Type:Identifier Literal:five}\n",
            "{Type:Assignment Literal:=}\n",
            "{Type:Int Literal:5}\n",
            "{Type:Semicolon Literal:;}\n",
            ">> ",
        )
    );
}

#[test]
fn test_repl_empty_input() {
    assert_eq!(run(""), ">> ");
}

#[test]
fn test_repl_multiple_lines() {
    let transcript = run("x == y\r\n\nfn\n");

    assert_eq!(
        transcript,
        concat!(
            ">> {Type:Identifier Literal:x}\n",
            "{Type:Equals Literal:==}\n",
            "{Type:Identifier Literal:y}\n",
            ">> ",
            ">> {Type:Fn Literal:fn}\n",
            ">> ",
        )
    );
}

#[test]
fn test_repl_last_line_without_newline() {
    assert_eq!(run("!x"), ">> {Type:Not Literal:!}\n{Type:Identifier Literal:x}\n>> ");
}

#[test]
fn test_repl_reports_illegal_character() {
    let transcript = run("a @ b\n");

    assert_eq!(
        transcript,
        concat!(
            ">> {Type:Identifier Literal:a}\n",
            "{Type:Illegal Literal:@}\n",
            "Error: UnrecognisedToken (unexpected character '@')\n",
            "{Type:Identifier Literal:b}\n",
            ">> ",
        )
    );
}

#[test]
fn test_repl_custom_prompt() {
    let mut output = Vec::new();
    start(Cursor::new(&b"1\n"[..]), &mut output, "$ ").unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "$ {Type:Int Literal:1}\n$ ");
}

#[test]
fn test_repl_invalid_utf8_line() {
    let mut output = Vec::new();
    start(Cursor::new(&b"a\xff\n"[..]), &mut output, PROMPT).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        concat!(
            ">> {Type:Identifier Literal:a}\n",
            "{Type:Illegal Literal:\\xff}\n",
            "Error: UnrecognisedToken (unexpected character '\\xff')\n",
            ">> ",
        )
    );
}

#[test]
fn test_repl_lone_invalid_byte() {
    let mut output = Vec::new();
    start(Cursor::new(&b"\xff\n"[..]), &mut output, PROMPT).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        concat!(
            ">> {Type:Illegal Literal:\\xff}\n",
            "Error: UnrecognisedToken (unexpected character '\\xff')\n",
            ">> ",
        )
    );
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_repl_propagates_write_errors() {
    let result = start(Cursor::new(&b"let\n"[..]), &mut FailingWriter, PROMPT);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_tokenize_function_literal() {
    let tokens = tokenize("let add = fn(x, y) { x + y; };");
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}
