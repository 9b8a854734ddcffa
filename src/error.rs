use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// What the scanner rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),

    #[error("malformed identifier '{0}'")]
    MalformedIdentifier(String),

    #[error("unrecognized lexeme '{0}'")]
    UnrecognizedLexeme(String),

    #[error("unmapped delimiter '{0}'")]
    UnmappedDelimiter(char),

    #[error("incomplete operator '{0}'")]
    IncompleteOperator(char),

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// A fatal lexical error. Scanning stops at the first one and no tokens are
/// returned alongside it.
#[derive(Error, Debug, Diagnostic)]
#[error("lexer error at line {line}:{column}: {kind}")]
#[diagnostic(code(parsec::lex))]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line where scanning stopped.
    pub line: u32,
    /// 1-based column where scanning stopped.
    pub column: u32,
    #[label("here")]
    span: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32, offset: usize, len: usize) -> Self {
        Self {
            kind,
            line,
            column,
            span: SourceSpan::new(offset.into(), len),
            src: NamedSource::new("input", String::new()),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Byte offset into the scanned text where the error was raised.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            src: NamedSource::new(name.into(), source.into()),
            ..self
        }
    }
}
