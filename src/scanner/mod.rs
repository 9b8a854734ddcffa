pub mod chars;
pub mod lexer;
pub mod tables;
pub mod token;

use crate::error::LexError;
use lexer::Scanner;
use token::Token;

/// Scan source code into a list of tokens.
///
/// The whole input is tokenized or the first lexical error is returned; a
/// partial token list is never produced. No `EOF` token is appended.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Scanner::new(source).scan_all()?;
    tracing::debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}

/// [`scan`] for input that may be absent. Absent input yields no tokens.
pub fn scan_optional(source: Option<&str>) -> Result<Vec<Token>, LexError> {
    source.map_or_else(|| Ok(Vec::new()), scan)
}
