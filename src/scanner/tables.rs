use crate::scanner::token::TokenKind;

/// Operator spellings tried in order at the cursor. Two-character spellings
/// come before any one-character prefix of theirs so the first match is the
/// longest one.
pub const OPERATORS: &[(&str, TokenKind)] = &[
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
    ("=", TokenKind::Assign),
    ("!", TokenKind::LogicalNot),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    (".", TokenKind::Dot),
];

/// Exact, case-sensitive keyword lookup for a complete word.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "for" => Some(TokenKind::For),
        "while" => Some(TokenKind::While),
        "do" => Some(TokenKind::Do),
        "return" => Some(TokenKind::Return),
        "int" => Some(TokenKind::Int),
        "float" => Some(TokenKind::Float),
        "bool" => Some(TokenKind::Bool),
        "void" => Some(TokenKind::Void),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        _ => None,
    }
}

pub fn delimiter_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::ParenthesisOpen),
        ')' => Some(TokenKind::ParenthesisClose),
        '{' => Some(TokenKind::BraceOpen),
        '}' => Some(TokenKind::BraceClose),
        '[' => Some(TokenKind::BracketOpen),
        ']' => Some(TokenKind::BracketClose),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::chars::{is_delimiter_char, is_operator_char};
    use strum::IntoEnumIterator;

    #[test]
    fn no_operator_is_shadowed_by_an_earlier_prefix() {
        for (i, (earlier, _)) in OPERATORS.iter().enumerate() {
            for (later, _) in &OPERATORS[i + 1..] {
                assert!(
                    !later.starts_with(earlier),
                    "'{earlier}' is listed before '{later}' and would shadow it"
                );
            }
        }
    }

    #[test]
    fn every_operator_kind_is_in_the_table_once() {
        for kind in TokenKind::iter().filter(|k| k.is_operator()) {
            let entries: Vec<_> = OPERATORS.iter().filter(|(_, k)| *k == kind).collect();
            assert_eq!(entries.len(), 1, "{kind:?}");
            assert_eq!(Some(entries[0].0), kind.spelling());
        }
        assert_eq!(OPERATORS.len(), 16);
    }

    #[test]
    fn operator_spellings_use_operator_chars() {
        for (spelling, _) in OPERATORS {
            assert!(spelling.chars().all(is_operator_char), "{spelling}");
        }
    }

    #[test]
    fn keywords_round_trip_through_spelling() {
        let keywords: Vec<_> = TokenKind::iter().filter(|k| k.is_keyword()).collect();
        assert_eq!(keywords.len(), 12);
        for kind in keywords {
            let spelling = kind.spelling().expect("keywords have a spelling");
            assert_eq!(keyword_kind(spelling), Some(kind));
        }
    }

    #[test]
    fn keyword_lookup_is_exact_and_case_sensitive() {
        assert_eq!(keyword_kind("If"), None);
        assert_eq!(keyword_kind("TRUE"), None);
        assert_eq!(keyword_kind("iff"), None);
        assert_eq!(keyword_kind("retur"), None);
        assert_eq!(keyword_kind(""), None);
    }

    #[test]
    fn delimiters_round_trip_through_spelling() {
        for kind in TokenKind::iter().filter(|k| k.is_delimiter()) {
            let spelling = kind.spelling().expect("delimiters have a spelling");
            let c = spelling.chars().next().expect("one character");
            assert!(is_delimiter_char(c));
            assert_eq!(delimiter_kind(c), Some(kind));
        }
        assert_eq!(delimiter_kind('+'), None);
    }
}
