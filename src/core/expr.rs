//! Restricted arithmetic expression evaluation.
//!
//! Expressions may contain digits, `+ - * / % ( )` and spaces, nothing else.
//! The character check runs before any parsing, so user-controlled text is
//! never interpreted beyond this grammar. Arithmetic uses IEEE 754 `f64`
//! semantics: `/` is float division and `%` keeps the dividend's sign.

use std::collections::HashMap;

use crate::error::{ExprError, Result};

/// Evaluates expressions, memoized per unique source text.
///
/// The cache key is the exact expression string including whitespace, so
/// `"1+1"` and `"1 + 1"` are evaluated independently.
pub struct ExpressionEvaluator {
    cache: HashMap<String, f64>,
    evaluations: usize,
}

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            evaluations: 0,
        }
    }

    /// Evaluate an expression, reusing the cached result when the same text
    /// was seen before in this run.
    pub fn evaluate(&mut self, expr: &str) -> Result<f64> {
        if expr.chars().any(|c| !is_allowed(c)) {
            return Err(ExprError::ForbiddenCharacter {
                expr: expr.to_string(),
            }
            .into());
        }

        if let Some(&value) = self.cache.get(expr) {
            return Ok(value);
        }

        let value = Parser::new(expr).parse()?;
        self.evaluations += 1;
        self.cache.insert(expr.to_string(), value);
        Ok(value)
    }

    /// Number of cache misses so far. Lets tests observe that repeated
    /// evaluation of the same text does not parse twice.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '%' | '(' | ')' | ' ')
}

/// Recursive-descent parser over the accepted grammar:
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/' | '%') factor)*
/// factor := integer | '(' expr ')' | ('+' | '-') factor
/// ```
struct Parser<'a> {
    expr: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(expr: &'a str) -> Self {
        Self {
            expr,
            bytes: expr.as_bytes(),
            pos: 0,
        }
    }

    fn parse(mut self) -> std::result::Result<f64, ExprError> {
        let value = self.expression()?;
        self.skip_spaces();
        if self.pos < self.bytes.len() {
            return Err(self.fail(format!("unexpected input at position {}", self.pos)));
        }
        Ok(value)
    }

    fn expression(&mut self) -> std::result::Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> std::result::Result<f64, ExprError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    value /= self.factor()?;
                }
                Some(b'%') => {
                    self.pos += 1;
                    value %= self.factor()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> std::result::Result<f64, ExprError> {
        self.skip_spaces();
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_spaces();
                if self.peek() != Some(b')') {
                    return Err(self.fail("missing closing parenthesis"));
                }
                self.pos += 1;
                Ok(value)
            }
            Some(b'+') => {
                self.pos += 1;
                self.factor()
            }
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            _ => Err(self.fail("expected a number")),
        }
    }

    fn number(&mut self) -> std::result::Result<f64, ExprError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.expr[start..self.pos]
            .parse::<f64>()
            .map_err(|e| self.fail(e.to_string()))
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn fail(&self, reason: impl Into<String>) -> ExprError {
        ExprError::Malformed {
            expr: self.expr.to_string(),
            reason: reason.into(),
        }
    }
}
