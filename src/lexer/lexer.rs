use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Single-pass byte scanner over one line of source.
///
/// `position` indexes the byte under examination (`ch`), `read_position`
/// the next unread byte. `ch` is `None` once the cursor is past the input.
/// Only `next_token` moves the cursor outside this module.
///
/// ```compile_fail
/// let mut lexer = monkey_lexer::lexer::lexer::Lexer::new("==");
/// lexer.read_char();
/// ```
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl<'a> Lexer<'a> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Lexer<'a> {
        let mut lexer = Lexer {
            source: source.as_ref(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    pub(super) fn read_char(&mut self) {
        self.ch = self.source.get(self.read_position).copied();
        self.position = self.read_position;
        if self.read_position < self.source.len() {
            self.read_position += 1;
        }
    }

    pub(super) fn peek_char(&self) -> Option<u8> {
        self.source.get(self.read_position).copied()
    }

    pub(super) fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, String::new()),
        };

        let token = match ch {
            b'=' => self.either(b'=', TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.either(b'=', TokenKind::NotEquals, TokenKind::Not),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Dash),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Star),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            c if is_letter(c) => {
                // The run loop leaves the cursor just past the identifier.
                let value = text(self.read_while(is_letter));
                return MK_TOKEN!(lookup_ident(&value), value);
            }
            c if is_digit(c) => {
                return MK_TOKEN!(TokenKind::Int, text(self.read_while(is_digit)));
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Emits `double` when the next byte is `second`, consuming both; otherwise `single`.
    fn either(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() == Some(second) {
            let start = self.position;
            self.read_char();
            MK_TOKEN!(double, text(&self.source[start..self.read_position]))
        } else {
            self.single(single)
        }
    }

    fn single(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(kind, text(&self.source[self.position..self.read_position]))
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> &'a [u8] {
        let start = self.position;
        while matches!(self.ch, Some(c) if predicate(c)) {
            self.read_char();
        }
        &self.source[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

// Bytes are read as Latin-1, so every byte maps to exactly one char.
fn text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
