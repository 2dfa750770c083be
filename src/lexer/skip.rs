//! Whitespace skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive ASCII whitespace characters.
    ///
    /// The language skips exactly space, tab, newline, and carriage
    /// return between tokens. There is no comment syntax.
    pub(super) fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }
}
