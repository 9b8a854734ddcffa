use std::fmt;

use serde::Serialize;

/// The closed set of token categories a parser can rely on.
///
/// Display names are the upper-case tag names (`PARENTHESIS_OPEN`,
/// `LOGICAL_AND`, ...), except `EndOfInput` which prints as `EOF`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Invalid,
    /// Reserved for parsers that want an explicit terminator. Never produced
    /// by the scanner.
    #[serde(rename = "EOF")]
    #[strum(serialize = "EOF")]
    EndOfInput,

    // Keywords
    If,
    Else,
    For,
    While,
    Do,
    Return,
    Int,
    Float,
    Bool,
    Void,
    True,
    False,

    // Literals
    Identifier,
    Number,
    String,
    /// Reserved; no handler produces it yet.
    Char,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Assign,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Dot,

    // Delimiters
    ParenthesisOpen,
    ParenthesisClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Semicolon,
    Comma,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Source spelling for categories whose text is implied by the tag.
    pub fn spelling(self) -> Option<&'static str> {
        let s = match self {
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Do => "do",
            Self::Return => "return",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Void => "void",
            Self::True => "true",
            Self::False => "false",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LogicalNot => "!",
            Self::Dot => ".",
            Self::ParenthesisOpen => "(",
            Self::ParenthesisClose => ")",
            Self::BraceOpen => "{",
            Self::BraceClose => "}",
            Self::BracketOpen => "[",
            Self::BracketClose => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Invalid
            | Self::EndOfInput
            | Self::Identifier
            | Self::Number
            | Self::String
            | Self::Char => return None,
        };
        Some(s)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If
                | Self::Else
                | Self::For
                | Self::While
                | Self::Do
                | Self::Return
                | Self::Int
                | Self::Float
                | Self::Bool
                | Self::Void
                | Self::True
                | Self::False
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Multiply
                | Self::Divide
                | Self::Modulo
                | Self::Assign
                | Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::GreaterThan
                | Self::LessEqual
                | Self::GreaterEqual
                | Self::LogicalAnd
                | Self::LogicalOr
                | Self::LogicalNot
                | Self::Dot
        )
    }

    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            Self::ParenthesisOpen
                | Self::ParenthesisClose
                | Self::BraceOpen
                | Self::BraceClose
                | Self::BracketOpen
                | Self::BracketClose
                | Self::Semicolon
                | Self::Comma
        )
    }

    /// Whether tokens of this kind carry their source text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::String | Self::Char | Self::Invalid
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, text: None }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) if !text.is_empty() => write!(f, "{} -> \"{}\"", self.kind, text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
