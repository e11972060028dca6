use std::mem;
use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::ScanError;
use crate::literal::Literal;
use crate::token::{Location, Token, Type};

type ScanResult<T> = Result<T, ScanError>;

pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    current: usize,
    line: usize,
    column_offset: usize,
    start_location: Location,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner.
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec!(),
            current: 0,
            line: 1,
            column_offset: 0,
            start_location: Location::new(1, 1),
        }
    }

    /// Scans the source code and returns a vector of tokens ending in `EOF`,
    /// or the first scan error encountered.
    pub fn scan_tokens(&mut self) -> ScanResult<Vec<Token>> {
        while let Some(&c) = self.peek() {
            self.start_location = Location::new(self.line, self.current - self.column_offset + 1);
            self.scan_token(c)?;
        }

        self.tokens.push(
            Token::new(
                Type::EOF,
                String::from(""),
                None,
                Location::new(self.line, self.current - self.column_offset + 1),
            )
        );

        Ok(mem::take(&mut self.tokens))
    }

    /// Consumes the next character.
    fn bump(&mut self) {
        if self.source.next().is_some() {
            self.current += 1;
        }
    }

    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Option<&char> {
        self.source.peek()
    }

    /// Adds a new token to the list of tokens, positioned at the start of
    /// the lexeme currently being scanned.
    fn add_token(&mut self, r#type: Type, lexeme: String, literal: Option<Literal>) {
        self.tokens.push(Token::new(r#type, lexeme, literal, self.start_location));
    }

    /// Consumes a single character and adds it as a token.
    fn add_single_char_token(&mut self, r#type: Type, c: char) {
        self.bump();
        self.add_token(r#type, c.to_string(), None);
    }

    /// Consumes a one-or-two character operator. The two character form is
    /// greedy: `!=` wins over `!` followed by `=`.
    fn add_operator(&mut self, c: char, double: Type, single: Type) {
        self.bump();
        if self.peek() == Some(&'=') {
            self.bump();
            self.add_token(double, format!("{c}="), None);
        } else {
            self.add_token(single, c.to_string(), None);
        }
    }

    /// Handles a string literal. Strings may span newlines and have no
    /// escape sequences.
    fn string(&mut self) -> ScanResult<()> {
        self.bump(); // Move past the starting double quote.

        let mut value = Vec::new();
        while let Some(c) = self.source.next_if(|&c| c != '"') {
            self.current += 1;

            if c == '\n' {
                self.line += 1;
                self.column_offset = self.current;
            }

            value.push(c);
        }

        if self.peek().is_none() {
            return Err(ScanError {
                location: self.start_location,
                lexeme: String::from("\""),
                message: String::from("Unterminated string"),
            });
        }

        self.bump(); // Move past the closing double quote.

        let value: String = value.into_iter().collect();

        // The literal does not include the double quotes unlike the lexeme.
        self.add_token(Type::String, value.clone(), Some(Literal::String(value)));
        Ok(())
    }

    /// Handles a number literal: `digit+ ( '.' digit+ )?`. A trailing dot
    /// with no fractional digit is left for the next token.
    fn number(&mut self) {
        let mut value = Vec::new();

        while let Some(c) = self.source.next_if(|c| c.is_ascii_digit()) {
            self.current += 1;
            value.push(c);
        }

        if self.peek() == Some(&'.') {
            if self.source.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                self.bump(); // Consume the dot.
                value.push('.');

                while let Some(c) = self.source.next_if(|c| c.is_ascii_digit()) {
                    self.current += 1;
                    value.push(c);
                }
            } else {
                // peek_next moved the lookahead cursor past the dot.
                self.source.reset_cursor();
            }
        }

        let value: String = value.into_iter().collect();
        let value_num: f64 = value.parse().unwrap();

        self.add_token(Type::Number, value, Some(Literal::Number(value_num)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        let mut value = Vec::new();

        while let Some(c) = self.source.next_if(|c| c.is_ascii_alphanumeric() || *c == '_') {
            self.current += 1;
            value.push(c);
        }

        let value = String::from_iter(value);
        let token_type = match value.as_str() {
            "and"      => Type::And,
            "class"    => Type::Class,
            "else"     => Type::Else,
            "false"    => Type::False,
            "for"      => Type::For,
            "fun"      => Type::Fun,
            "if"       => Type::If,
            "nil"      => Type::Nil,
            "or"       => Type::Or,
            "print"    => Type::Print,
            "return"   => Type::Return,
            "super"    => Type::Super,
            "this"     => Type::This,
            "true"     => Type::True,
            "var"      => Type::Var,
            "while"    => Type::While,
            _          => Type::Identifier,
        };

        self.add_token(token_type, value, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self, c: char) -> ScanResult<()> {
        match c {
            // One character tokens
            '(' => self.add_single_char_token(Type::LeftParen, c),
            ')' => self.add_single_char_token(Type::RightParen, c),
            '{' => self.add_single_char_token(Type::LeftBrace, c),
            '}' => self.add_single_char_token(Type::RightBrace, c),
            ',' => self.add_single_char_token(Type::Comma, c),
            '.' => self.add_single_char_token(Type::Dot, c),
            '-' => self.add_single_char_token(Type::Minus, c),
            '+' => self.add_single_char_token(Type::Plus, c),
            ';' => self.add_single_char_token(Type::Semicolon, c),
            '*' => self.add_single_char_token(Type::Star, c),

            // One or two character tokens
            '!' => self.add_operator(c, Type::BangEqual, Type::Bang),
            '=' => self.add_operator(c, Type::EqualEqual, Type::Equal),
            '<' => self.add_operator(c, Type::LessEqual, Type::Less),
            '>' => self.add_operator(c, Type::GreaterEqual, Type::Greater),

            // Slash or a line comment
            '/' => {
                self.bump();
                if self.peek() == Some(&'/') {
                    while self.source.next_if(|&c| c != '\n').is_some() {
                        self.current += 1;
                    }
                } else {
                    self.add_token(Type::Slash, String::from("/"), None);
                }
            },

            // Ignore whitespace
            ' ' | '\r' | '\t' => {
                self.bump();
            },

            // Update line counter
            '\n' => {
                self.bump();

                self.line += 1;
                self.column_offset = self.current;
            },

            // String
            '"' => self.string()?,

            // Numbers
            c if c.is_ascii_digit() => self.number(),

            // Identifiers
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.bump();

                return Err(ScanError {
                    location: self.start_location,
                    lexeme: c.to_string(),
                    message: String::from("Unidentified token"),
                });
            },
        }

        Ok(())
    }
}
