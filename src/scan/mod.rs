mod error;
mod scanner;
mod token;

pub use error::{ScanError, ScanErrorKind};
pub use scanner::{scan, Scanned, Scanner};
pub use token::{Literal, Token, TokenKind};
