//! Token kinds for the Monk lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Monkey language.

use std::fmt;

/// The kind of token recognized by the lexer.
///
/// The token's text lives in [`Token::literal`](super::Token::literal), so
/// every variant here is fieldless. The set is closed: two structural
/// kinds, three atoms, the operators, the punctuation, and the seven
/// keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character the lexer does not recognize.
    ///
    /// Illegal characters are not a lexer error; the parser rejects them
    /// when it finds no prefix parse function for this kind.
    Illegal,

    /// End of file marker.
    ///
    /// The lexer returns this indefinitely once the input is exhausted,
    /// so the token stream always ends with exactly one `Eof`.
    Eof,

    /// An identifier (variable or function name).
    ///
    /// Identifiers start with an ASCII letter or underscore and continue
    /// with ASCII alphanumerics or underscores.
    Ident,

    /// An integer literal (e.g., `42`, `100`).
    ///
    /// The literal keeps the source digits; conversion to `i64` happens
    /// when the parser builds the AST node.
    Int,

    /// A string literal enclosed in double quotes.
    ///
    /// The literal holds the content with the surrounding quotes
    /// stripped. There are no escape sequences.
    String,

    /// An equals sign `=` used in let bindings.
    Assign,

    /// A plus sign `+`.
    Plus,

    /// A minus sign `-`, both infix subtraction and prefix negation.
    Minus,

    /// A forward slash `/` for division.
    Slash,

    /// An asterisk `*` for multiplication.
    Asterisk,

    /// A bang `!` for logical negation.
    Bang,

    /// Less than `<`.
    Lt,

    /// Greater than `>`.
    Gt,

    /// Double equals `==` for equality comparison.
    Eq,

    /// Not equals `!=` for inequality comparison.
    NotEq,

    /// A comma `,`.
    Comma,

    /// A semicolon `;`.
    Semicolon,

    /// A left parenthesis `(`.
    LParen,

    /// A right parenthesis `)`.
    RParen,

    /// A left brace `{`.
    LBrace,

    /// A right brace `}`.
    RBrace,

    /// The `let` keyword for bindings.
    Let,

    /// The `fn` keyword for function literals.
    Function,

    /// The `true` keyword.
    True,

    /// The `false` keyword.
    False,

    /// The `if` keyword.
    If,

    /// The `else` keyword.
    Else,

    /// The `return` keyword.
    Return,
}

impl TokenKind {
    /// Returns the kind for an identifier-shaped literal, promoting the
    /// seven keywords to their keyword kinds.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }
}

impl fmt::Display for TokenKind {
    /// Renders the canonical uppercase name used in parse error messages,
    /// e.g. `Expected next token to be IDENT, got ASSIGN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Bang => "BANG",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Let => "LET",
            TokenKind::Function => "FUNCTION",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        write!(f, "{}", name)
    }
}
