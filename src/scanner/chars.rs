//! Single-character predicates used to pick a scanning handler.

pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// ASCII letter or underscore: the characters that may start an identifier.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Characters that appear in some operator spelling. `&` and `|` are only
/// valid doubled.
pub fn is_operator_char(c: char) -> bool {
    "+-*/%=<>!.&|".contains(c)
}

pub fn is_delimiter_char(c: char) -> bool {
    "(){}[],;".contains(c)
}
