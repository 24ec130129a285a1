//! Formula parser
//!
//! A recursive descent parser for arithmetic formulas with proper operator
//! precedence. Only numbers, the four arithmetic operators, parentheses,
//! builtin constants and builtin function calls are accepted.

use std::fmt;

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{MathConstant, MathFunction};

/// Maximum nesting of parentheses, calls and prefix operators
pub const MAX_DEPTH: usize = 128;

/// Parse a formula string into an AST
///
/// # Example
/// ```rust
/// use plant_onboard_formula::parse_formula;
///
/// let ast = parse_formula("1 + 2").unwrap();
/// let ast = parse_formula("abs(1.0 - 2.0) * pi").unwrap();
/// assert!(parse_formula("1 / / 2").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    let mut parser = FormulaParser::new(formula);
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(FormulaError::Parse(format!(
            "unexpected {}",
            parser.current_token()
        )));
    }

    Ok(expr)
}

fn chain(first: FormulaExpr, rest: Vec<(BinaryOperator, FormulaExpr)>) -> FormulaExpr {
    if rest.is_empty() {
        first
    } else {
        FormulaExpr::BinaryChain {
            first: Box::new(first),
            rest,
        }
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    // Literals
    Number(String),

    // Function or constant name
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Comma,

    // Delimiters
    LeftParen,
    RightParen,

    // Anything outside the grammar
    Unknown(char),

    // End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "number {}", text),
            Token::Identifier(name) => write!(f, "'{}'", name),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Comma => f.write_str("','"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Unknown(c) => write!(f, "character '{}'", c),
            Token::Eof => f.write_str("end of expression"),
        }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Option<Token>,
    depth: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: None,
            depth: 0,
        };
        parser.advance_token();
        parser
    }

    // === Token scanning ===

    fn advance_token(&mut self) {
        self.current_token = Some(self.scan_token());
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Token::Eof,
        };

        // Single-character tokens
        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            ',' => Some(Token::Comma),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return token;
        }

        // Number
        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            return self.scan_number();
        }

        // Function or constant name
        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_identifier();
        }

        self.advance();
        Token::Unknown(c)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        Token::Number(self.input[start..self.pos].to_string())
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Token::Identifier(self.input[start..self.pos].to_string())
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn current_token(&self) -> &Token {
        self.current_token.as_ref().unwrap_or(&Token::Eof)
    }

    fn consume(&mut self) -> Token {
        let token = self.current_token.take().unwrap_or(Token::Eof);
        self.advance_token();
        token
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume();
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "expected {} but found {}",
                expected,
                self.current_token()
            )))
        }
    }

    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> FormulaResult<T>,
    ) -> FormulaResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(FormulaError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: -, +
    // 4. Primary: numbers, constants, function calls, parentheses

    fn parse_expression(&mut self) -> FormulaResult<FormulaExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<FormulaExpr> {
        let first = self.parse_multiplicative()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume();
            rest.push((op, self.parse_multiplicative()?));
        }

        Ok(chain(first, rest))
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<FormulaExpr> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume();
            rest.push((op, self.parse_unary()?));
        }

        Ok(chain(first, rest))
    }

    fn parse_unary(&mut self) -> FormulaResult<FormulaExpr> {
        let op = match self.current_token() {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary(),
        };

        self.consume();
        let operand = self.nested(|p| p.parse_unary())?;
        Ok(FormulaExpr::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> FormulaResult<FormulaExpr> {
        match self.current_token().clone() {
            Token::Number(text) => {
                self.consume();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| FormulaError::Parse(format!("invalid number {}", text)))?;
                Ok(FormulaExpr::Number(value))
            }

            Token::LeftParen => {
                self.consume();
                let expr = self.nested(|p| p.parse_expression())?;
                self.expect(&Token::RightParen)?;
                Ok(expr)
            }

            Token::Identifier(name) => {
                self.consume();
                let is_call = matches!(self.current_token(), Token::LeftParen);

                if let Some(constant) = MathConstant::from_name(&name) {
                    if is_call {
                        return Err(FormulaError::NotCallable(constant.name()));
                    }
                    return Ok(FormulaExpr::Constant(constant));
                }

                match MathFunction::from_name(&name) {
                    Some(function) if is_call => self.parse_function_call(function),
                    Some(function) => Err(FormulaError::NotAValue(function.name())),
                    None => Err(FormulaError::Parse(format!("unknown name '{}'", name))),
                }
            }

            Token::Eof => Err(FormulaError::Parse("unexpected end of expression".into())),

            other => Err(FormulaError::Parse(format!("unexpected {}", other))),
        }
    }

    fn parse_function_call(&mut self, function: MathFunction) -> FormulaResult<FormulaExpr> {
        self.expect(&Token::LeftParen)?;

        let mut args = Vec::new();

        // Parse arguments
        if !matches!(self.current_token(), Token::RightParen) {
            args.push(self.nested(|p| p.parse_expression())?);

            while matches!(self.current_token(), Token::Comma) {
                self.consume();
                args.push(self.nested(|p| p.parse_expression())?);
            }
        }

        self.expect(&Token::RightParen)?;

        if !function.accepts(args.len()) {
            return Err(FormulaError::ArgumentCount {
                function: function.name(),
                expected: function.arity_description(),
                actual: args.len(),
            });
        }

        Ok(FormulaExpr::Function { function, args })
    }
}
