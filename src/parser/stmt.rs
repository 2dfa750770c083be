//! Statement and block parsing.

use super::Parser;
use super::error::ParseError;
use super::expr::Precedence;
use crate::ast::{Block, Identifier, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single statement.
    ///
    /// Dispatches on the current token: `let` and `return` have dedicated
    /// forms, everything else is an expression statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → let_stmt | return_stmt | expr_stmt
    /// ```
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a let statement.
    ///
    /// A missing name, `=`, or terminating `;` is a parse error.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENT "=" expression ";"
    /// ```
    fn parse_let_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.current().clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current().clone());

        self.expect_peek(TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Let { name, value }, token))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expression ";"
    /// ```
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.current().clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Return(value), token))
    }

    /// Parses an expression statement.
    ///
    /// A trailing semicolon is optional and consumed if present, which is
    /// what lets the last expression of a REPL line or block omit it.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr_stmt → expression ";"?
    /// ```
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.current().clone();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_kind() == TokenKind::Semicolon {
            self.advance();
        }

        Ok(Stmt::new(StmtKind::Expr(expr), token))
    }

    /// Parses a block statement.
    ///
    /// The current token is the opening `{`. Statements are parsed until
    /// the closing `}` or end of input; an unterminated block at EOF
    /// parses as if closed. Leaves the parser on the closing brace.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" statement* "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let token = self.current().clone();
        self.advance();

        let mut statements: Vec<Stmt> = Vec::new();
        while self.current_kind() != TokenKind::RBrace && !self.is_eof() {
            let stmt = self.parse_statement()?;
            statements.push(stmt);
            self.advance();
        }

        Ok(Block { token, statements })
    }
}
