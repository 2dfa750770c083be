//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! This module implements expression parsing with proper operator
//! precedence. Each token kind that can start an expression has a prefix
//! parse function; each operator that can continue one has an infix parse
//! function. The Pratt loop folds infix operators while the peeked token
//! binds tighter than the caller's minimum precedence.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Identifier};
use crate::token::TokenKind;

/// Operator precedence levels, lowest to highest.
///
/// The derived ordering makes `Lowest` bind loosest and `Call` tightest.
/// Left-associativity falls out of the infix parse functions passing the
/// operator's own precedence (not one less) to the recursive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// The entry precedence; binds nothing.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, binary `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-`, `!`
    Prefix,
    /// `(` in infix position (a call)
    Call,
}

/// Returns the infix precedence of a token kind.
///
/// Kinds that cannot continue an expression get `Lowest`, which never
/// exceeds a caller's minimum, so the Pratt loop stops on them.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl Parser {
    /// Parses an expression with the Pratt algorithm.
    ///
    /// 1. Dispatch the current token to its prefix parse function; a
    ///    token with none is a parse error.
    /// 2. While the peeked token is not `;` and binds tighter than
    ///    `min_precedence`, advance onto it and fold it as an infix
    ///    operator around the expression parsed so far.
    ///
    /// Leaves the parser on the last token of the expression.
    pub(super) fn parse_expression(
        &mut self,
        min_precedence: Precedence,
    ) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while self.peek_kind() != TokenKind::Semicolon
            && min_precedence < precedence_of(self.peek_kind())
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Dispatches the current token to its prefix parse function.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Ident => {
                let token = self.current().clone();
                let name = token.literal.clone();
                Ok(Expr::new(ExprKind::Identifier(name), token))
            }
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => {
                let token = self.current().clone();
                let value = token.literal.clone();
                Ok(Expr::new(ExprKind::StringLiteral(value), token))
            }
            TokenKind::True | TokenKind::False => {
                let token = self.current().clone();
                let value = token.kind == TokenKind::True;
                Ok(Expr::new(ExprKind::BooleanLiteral(value), token))
            }
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => Err(ParseError::no_prefix_parse_fn(self.current())),
        }
    }

    /// Dispatches the current token to its infix parse function.
    ///
    /// The Pratt loop only advances onto tokens with a precedence above
    /// `Lowest`, all of which are either binary operators or the call
    /// paren.
    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::LParen => self.parse_call_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    /// Parses an integer literal from the current token.
    ///
    /// The lexer only produces digit runs, so the sole failure mode is a
    /// value outside the `i64` range.
    fn parse_integer_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        let value: i64 = token
            .literal
            .parse()
            .map_err(|_| ParseError::invalid_integer_literal(&token.literal, token.span))?;
        Ok(Expr::new(ExprKind::IntegerLiteral(value), token))
    }

    /// Parses a prefix operation: `!<expr>` or `-<expr>`.
    fn parse_prefix_expression(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        let operator = token.literal.clone();

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::new(
            ExprKind::Prefix {
                operator,
                right: Box::new(right),
            },
            token,
        ))
    }

    /// Parses a binary operation with the left-hand side already parsed.
    ///
    /// The recursive call uses the operator's own precedence, which makes
    /// every binary operator left-associative: `a - b - c` parses as
    /// `((a - b) - c)`.
    fn parse_infix_expression(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        let operator = token.literal.clone();
        let precedence = precedence_of(token.kind);

        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::new(
            ExprKind::Infix {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            token,
        ))
    }

    /// Parses a parenthesized expression.
    ///
    /// Grouping produces no node of its own; the inner expression is
    /// returned directly.
    fn parse_grouped_expression(&mut self) -> Result<Expr, ParseError> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// Parses an if expression.
    ///
    /// The parentheses around the condition are required; the `else`
    /// branch is optional.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_expr → "if" "(" expression ")" block ("else" block)?
    /// ```
    fn parse_if_expression(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_kind() == TokenKind::Else {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            token,
        ))
    }

    /// Parses a function literal.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_lit → "fn" "(" (IDENT ("," IDENT)*)? ")" block
    /// ```
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::new(
            ExprKind::FunctionLiteral { parameters, body },
            token,
        ))
    }

    /// Parses a comma-separated, possibly empty parameter list.
    ///
    /// The current token is the opening paren; leaves the parser on the
    /// closing paren.
    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters: Vec<Identifier> = Vec::new();

        if self.peek_kind() == TokenKind::RParen {
            self.advance();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current().clone()));

        while self.peek_kind() == TokenKind::Comma {
            self.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current().clone()));
        }

        self.expect_peek(TokenKind::RParen)?;

        Ok(parameters)
    }

    /// Parses a call expression with the callee already parsed.
    ///
    /// The current token is the opening paren. The callee must be an
    /// identifier or function literal; the grammar makes nothing else
    /// callable.
    fn parse_call_expression(&mut self, function: Expr) -> Result<Expr, ParseError> {
        if !matches!(
            function.kind,
            ExprKind::Identifier(_) | ExprKind::FunctionLiteral { .. }
        ) {
            return Err(ParseError::invalid_call_target(function.span()));
        }

        let token = self.current().clone();
        let arguments = self.parse_call_arguments()?;

        Ok(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            token,
        ))
    }

    /// Parses a comma-separated, possibly empty argument list.
    ///
    /// The current token is the opening paren; leaves the parser on the
    /// closing paren.
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments: Vec<Expr> = Vec::new();

        if self.peek_kind() == TokenKind::RParen {
            self.advance();
            return Ok(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_kind() == TokenKind::Comma {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;

        Ok(arguments)
    }
}
