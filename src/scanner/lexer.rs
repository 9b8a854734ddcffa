use tracing::{debug, trace, warn};
use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, literal, rest, take_till, take_until, take_while};

use crate::error::{LexError, LexErrorKind};
use crate::scanner::chars::{
    is_alpha, is_alphanumeric, is_blank, is_delimiter_char, is_digit, is_operator_char,
};
use crate::scanner::tables::{OPERATORS, delimiter_kind, keyword_kind};
use crate::scanner::token::{Token, TokenKind};

type Input<'a> = &'a str;

fn blank_run<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., is_blank).parse_next(input)
}

/// `//` up to, not including, the next newline.
fn line_comment<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    ("//", take_till(0.., '\n')).take().parse_next(input)
}

/// `/* ... */`. An unclosed comment swallows the rest of the input; the flag
/// reports whether `*/` was found.
fn block_comment<'a>(input: &mut Input<'a>) -> ModalResult<bool> {
    preceded(
        "/*",
        alt((
            terminated(take_until(0.., "*/"), "*/").value(true),
            rest.value(false),
        )),
    )
    .parse_next(input)
}

/// Characters between the quotes, escape pairs kept verbatim.
fn string_body(input: &mut Input<'_>) -> ModalResult<()> {
    repeat(
        0..,
        alt((
            ('\\', any).void(),
            take_till(1.., ['"', '\\']).void(),
            '\\'.void(),
        )),
    )
    .parse_next(input)
}

/// A double-quoted literal including its quotes. The flag reports whether the
/// closing quote was found before end-of-input.
fn string_literal<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, bool)> {
    let ((_, (), closing), text) = ('"', string_body, opt('"'))
        .with_taken()
        .parse_next(input)?;
    Ok((text, closing.is_some()))
}

fn operator(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    for &(spelling, kind) in OPERATORS {
        if opt(literal(spelling)).parse_next(input)?.is_some() {
            return Ok(kind);
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Resolve a complete identifier/number buffer into a token.
fn word_token(word: String) -> Result<Token, LexErrorKind> {
    if let Some(kind) = keyword_kind(&word) {
        return Ok(Token::new(kind));
    }
    match word.chars().next() {
        Some(first) if is_digit(first) => {
            let periods = word.chars().filter(|&c| c == '.').count();
            let digits_only = word.chars().all(|c| is_digit(c) || c == '.');
            if digits_only && periods <= 1 {
                Ok(Token::with_text(TokenKind::Number, word))
            } else {
                Err(LexErrorKind::MalformedNumber(word))
            }
        }
        Some(first) if is_alpha(first) => {
            if word.chars().all(is_alphanumeric) {
                Ok(Token::with_text(TokenKind::Identifier, word))
            } else {
                Err(LexErrorKind::MalformedIdentifier(word))
            }
        }
        _ => Err(LexErrorKind::UnrecognizedLexeme(word)),
    }
}

/// Cursor and output for one scan. Built fresh by every call to [`scan`], so
/// no state carries over between inputs.
///
/// [`scan`]: crate::scanner::scan
pub struct Scanner<'a> {
    rest: Input<'a>,
    index: usize,
    line: u32,
    column: u32,
    buffer: String,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Input ends at the first NUL, if any.
    pub fn new(source: &'a str) -> Self {
        let end = source.find('\0').unwrap_or(source.len());
        Self {
            rest: &source[..end],
            index: 0,
            line: 1,
            column: 1,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Walk the whole input. Handlers are tried in a fixed order and the first
    /// one that applies consumes input: string, comment, word accumulation,
    /// then (after flushing any pending word) whitespace, delimiter, operator.
    pub fn scan_all(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.rest.chars().next() {
            if self.string_literal()? {
                continue;
            }
            if self.comment()? {
                continue;
            }
            if self.accumulate(c) {
                continue;
            }
            self.flush()?;
            if self.whitespace() {
                continue;
            }
            if self.delimiter(c)? {
                continue;
            }
            if self.operator() {
                continue;
            }
            let kind = if is_operator_char(c) {
                LexErrorKind::IncompleteOperator(c)
            } else {
                LexErrorKind::UnexpectedCharacter(c)
            };
            return Err(self.error(kind));
        }
        self.flush()?;
        Ok(self.tokens)
    }

    /// Run `parser` on the remaining input and, if it matches, commit the
    /// consumed text to the cursor.
    fn attempt<O, P>(&mut self, mut parser: P) -> Option<O>
    where
        P: Parser<Input<'a>, O, ErrMode<ContextError>>,
    {
        let start = self.rest;
        let mut input = start;
        let output = parser.parse_next(&mut input).ok()?;
        self.advance(&start[..start.len() - input.len()]);
        Some(output)
    }

    fn advance(&mut self, consumed: &'a str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.index += consumed.len();
        self.rest = &self.rest[consumed.len()..];
    }

    fn push(&mut self, token: Token) {
        trace!(line = self.line, column = self.column, %token, "token");
        self.tokens.push(token);
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        let len = self.rest.chars().next().map_or(0, char::len_utf8);
        debug!(line = self.line, column = self.column, %kind, "scan failed");
        LexError::new(kind, self.line, self.column, self.index, len)
    }

    fn string_literal(&mut self) -> Result<bool, LexError> {
        if !self.rest.starts_with('"') {
            return Ok(false);
        }
        self.flush()?;
        let Some((text, closed)) = self.attempt(string_literal) else {
            return Ok(false);
        };
        if !closed {
            return Err(self.error(LexErrorKind::UnterminatedString));
        }
        self.push(Token::with_text(TokenKind::String, text));
        Ok(true)
    }

    fn comment(&mut self) -> Result<bool, LexError> {
        if !(self.rest.starts_with("//") || self.rest.starts_with("/*")) {
            return Ok(false);
        }
        self.flush()?;
        if self.attempt(line_comment).is_some() {
            return Ok(true);
        }
        let (line, column) = (self.line, self.column);
        match self.attempt(block_comment) {
            Some(true) => Ok(true),
            Some(false) => {
                warn!(line, column, "block comment is not closed before end of input");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Extend the pending word with `c` if it is alphanumeric, or a period
    /// right after a digit.
    fn accumulate(&mut self, c: char) -> bool {
        let after_digit = self.buffer.chars().next_back().is_some_and(is_digit);
        if !(is_alphanumeric(c) || (c == '.' && after_digit)) {
            return false;
        }
        self.buffer.push(c);
        let rest = self.rest;
        self.advance(&rest[..c.len_utf8()]);
        true
    }

    fn flush(&mut self) -> Result<(), LexError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let word = std::mem::take(&mut self.buffer);
        let token = word_token(word).map_err(|kind| self.error(kind))?;
        self.push(token);
        Ok(())
    }

    fn whitespace(&mut self) -> bool {
        self.attempt(blank_run).is_some()
    }

    fn delimiter(&mut self, c: char) -> Result<bool, LexError> {
        if !is_delimiter_char(c) {
            return Ok(false);
        }
        let kind =
            delimiter_kind(c).ok_or_else(|| self.error(LexErrorKind::UnmappedDelimiter(c)))?;
        let rest = self.rest;
        self.advance(&rest[..c.len_utf8()]);
        self.push(Token::new(kind));
        Ok(true)
    }

    fn operator(&mut self) -> bool {
        match self.attempt(operator) {
            Some(kind) => {
                self.push(Token::new(kind));
                true
            }
            None => false,
        }
    }
}
