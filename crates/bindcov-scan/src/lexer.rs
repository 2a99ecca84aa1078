//! Tokenizer for C++ source text.
//!
//! This is not a full C++ lexer. It knows enough to walk declarations and
//! macro invocations safely:
//! - identifiers, numbers (with suffixes), `::` and `...`
//! - string, raw string (`R"delim(...)delim"`) and character literals
//! - line and block comments (skipped)
//! - optionally, preprocessor directive lines (skipped)
//!
//! Every other character becomes a [`Token::Punct`]. Tokens carry their
//! byte span so callers can slice the original text for type and default
//! value spelling.

use crate::{ScanError, ScanResult};

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    /// Numeric literal as written (`0.0f`, `0x10`, `1e-5`).
    Number(String),
    /// String literal contents, escapes left as written.
    Str(String),
    /// Character literal contents.
    Char(String),
    /// `::`
    Scope,
    /// `...`
    Ellipsis,
    Punct(char),
}

impl Token {
    /// Returns true if this is the given punctuation character.
    pub fn is_punct(&self, ch: char) -> bool {
        matches!(self, Token::Punct(c) if *c == ch)
    }

    /// Returns the identifier text, if any.
    pub fn ident(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            _ => None,
        }
    }
}

/// A token with its byte span in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

const RAW_STRING_PREFIXES: &[&str] = &["R", "LR", "uR", "UR", "u8R"];

/// A simple lexer for C++ sources.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    skip_directives: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            skip_directives: false,
        }
    }

    /// Skip `#` preprocessor lines (including `\` continuations).
    pub fn skip_directives(mut self, skip: bool) -> Self {
        self.skip_directives = skip;
        self
    }

    /// Tokenize the whole input.
    pub fn tokenize(mut self) -> ScanResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn error(&self, at: usize, message: impl Into<String>) -> ScanError {
        ScanError::Syntax {
            line: line_of(self.input, at),
            message: message.into(),
        }
    }

    fn at_line_start(&self) -> bool {
        self.input[..self.pos]
            .chars()
            .rev()
            .take_while(|c| *c != '\n')
            .all(char::is_whitespace)
    }

    fn skip_line(&mut self) {
        while let Some(ch) = self.next_char() {
            if ch == '\\' && self.peek_char() == Some('\n') {
                self.next_char();
            } else if ch == '\n' {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else if ch == '/' && self.peek_nth(1) == Some('/') {
                while let Some(ch) = self.next_char() {
                    if ch == '\n' {
                        break;
                    }
                }
            } else if ch == '/' && self.peek_nth(1) == Some('*') {
                // An unterminated block comment runs to the end of input
                self.pos += 2;
                match self.rest().find("*/") {
                    Some(end) => self.pos += end + 2,
                    None => self.pos = self.input.len(),
                }
            } else if ch == '#' && self.skip_directives && self.at_line_start() {
                self.skip_line();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> ScanResult<Option<Spanned>> {
        self.skip_whitespace();

        let start = self.pos;
        let ch = match self.peek_char() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let token = match ch {
            '"' => {
                self.next_char();
                Token::Str(self.quoted('"', start)?)
            }
            '\'' => {
                self.next_char();
                Token::Char(self.quoted('\'', start)?)
            }
            ':' if self.peek_nth(1) == Some(':') => {
                self.pos += 2;
                Token::Scope
            }
            '.' if self.rest().starts_with("...") => {
                self.pos += 3;
                Token::Ellipsis
            }
            '.' if self.peek_nth(1).map_or(false, |c| c.is_ascii_digit()) => self.number(),
            _ if ch.is_ascii_digit() => self.number(),
            _ if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.ident();
                if RAW_STRING_PREFIXES.contains(&ident.as_str()) && self.peek_char() == Some('"') {
                    self.next_char();
                    Token::Str(self.raw_string(start)?)
                } else {
                    Token::Ident(ident)
                }
            }
            _ => {
                self.next_char();
                Token::Punct(ch)
            }
        };

        Ok(Some(Spanned {
            token,
            start,
            end: self.pos,
        }))
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.next_char();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        let is_hex = self.rest().starts_with("0x") || self.rest().starts_with("0X");
        let mut prev = '\0';

        while let Some(ch) = self.peek_char() {
            let exponent_sign = (ch == '+' || ch == '-') && !is_hex && matches!(prev, 'e' | 'E');
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || exponent_sign {
                prev = ch;
                self.next_char();
            } else {
                break;
            }
        }

        Token::Number(self.input[start..self.pos].to_string())
    }

    /// Read the rest of a quoted literal; the opening quote is consumed.
    fn quoted(&mut self, quote: char, start: usize) -> ScanResult<String> {
        let content_start = self.pos;
        loop {
            match self.next_char() {
                Some('\\') => {
                    self.next_char();
                }
                Some(ch) if ch == quote => {
                    return Ok(self.input[content_start..self.pos - 1].to_string());
                }
                Some('\n') | None => {
                    return Err(self.error(start, "unterminated literal"));
                }
                Some(_) => {}
            }
        }
    }

    /// Read a raw string; the prefix and opening `"` are consumed.
    fn raw_string(&mut self, start: usize) -> ScanResult<String> {
        let open = match self.rest().find('(') {
            Some(open) => open,
            None => return Err(self.error(start, "raw string without delimiter")),
        };
        let delimiter = &self.rest()[..open];
        if delimiter.len() > 16 || delimiter.contains(char::is_whitespace) {
            return Err(self.error(start, "invalid raw string delimiter"));
        }

        let terminator = format!("){}\"", delimiter);
        self.pos += open + 1;

        match self.rest().find(&terminator) {
            Some(end) => {
                let content = self.rest()[..end].to_string();
                self.pos += end + terminator.len();
                Ok(content)
            }
            None => Err(self.error(start, "unterminated raw string")),
        }
    }
}

/// 1-based line number of a byte offset.
pub fn line_of(input: &str, pos: usize) -> usize {
    input[..pos.min(input.len())].matches('\n').count() + 1
}

/// Index of the token closing the bracket opened at `open`.
///
/// Only the bracket kind found at `open` is counted; string literals are
/// already single tokens so their contents never interfere.
pub fn matching_close(tokens: &[Spanned], open: usize) -> Option<usize> {
    let (opening, closing) = match tokens.get(open)?.token {
        Token::Punct('(') => ('(', ')'),
        Token::Punct('[') => ('[', ']'),
        Token::Punct('{') => ('{', '}'),
        _ => return None,
    };

    let mut depth = 0usize;
    for (idx, spanned) in tokens.iter().enumerate().skip(open) {
        if spanned.token.is_punct(opening) {
            depth += 1;
        } else if spanned.token.is_punct(closing) {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Split a token slice at top-level commas.
///
/// Commas nested in `()`, `[]` or `{}` do not split.
pub fn split_top_level(tokens: &[Spanned]) -> Vec<&[Spanned]> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut begin = 0;

    for (idx, spanned) in tokens.iter().enumerate() {
        match spanned.token {
            Token::Punct('(') | Token::Punct('[') | Token::Punct('{') => depth += 1,
            Token::Punct(')') | Token::Punct(']') | Token::Punct('}') => depth -= 1,
            Token::Punct(',') if depth == 0 => {
                parts.push(&tokens[begin..idx]);
                begin = idx + 1;
            }
            _ => {}
        }
    }

    if begin < tokens.len() || !parts.is_empty() {
        parts.push(&tokens[begin..]);
    }
    parts
}

/// Source text covered by a non-empty token slice.
pub fn slice_text<'a>(input: &'a str, tokens: &[Spanned]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => &input[first.start..last.end],
        _ => "",
    }
}
