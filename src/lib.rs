pub mod error;
pub mod scanner;

// Re-export the scanner surface for convenience
pub use error::{LexError, LexErrorKind};
pub use scanner::token::{Token, TokenKind};
pub use scanner::{scan, scan_optional};
