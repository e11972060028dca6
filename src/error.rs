use std::io::{self, IsTerminal};

use crate::object::Object;
use crate::token::{Location, Token, Type};

/// Every diagnostic type must implement this trait.
pub trait Report {
    /// Writes the diagnostic to standard error.
    fn report(&self);
}

/// Prints a three-line diagnostic. The header is wrapped in ANSI red when
/// standard error is attached to a terminal.
fn diagnostic(kind: &str, message: &str, lexeme: &str, location: Location) {
    if io::stderr().is_terminal() {
        eprintln!("\x1b[31m{kind} Error - {message}\x1b[0m");
    } else {
        eprintln!("{kind} Error - {message}");
    }
    eprintln!("Lexeme - {lexeme}");
    eprintln!("Position - {location}");
}

/// Returns the token's lexeme, or its name when it has no spelling.
fn lexeme_or_name(token: &Token) -> &str {
    match token.r#type {
        Type::EOF => "EOF",
        _ => &token.lexeme,
    }
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub location: Location,
    pub lexeme: String,
    pub message: String,
}

impl Report for ScanError {
    fn report(&self) {
        diagnostic("Scan", &self.message, &self.lexeme, self.location);
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Report for ParseError {
    fn report(&self) {
        diagnostic("Parse", &self.message, lexeme_or_name(&self.token), self.token.location);
    }
}

/// Represents an error that occurs during resolution.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Report for ResolveError {
    fn report(&self) {
        diagnostic("Resolve", &self.message, lexeme_or_name(&self.token), self.token.location);
    }
}

/// Represents an error that occurs during runtime.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Report for RuntimeError {
    fn report(&self) {
        diagnostic("Runtime", &self.message, lexeme_or_name(&self.token), self.token.location);
    }
}

/// A failure from any stage of the pipeline. The first error aborts the
/// stage that produced it and surfaces here.
#[derive(Debug)]
pub enum FlintError {
    Scan(ScanError),
    Parse(ParseError),
    Resolve(ResolveError),
    Runtime(RuntimeError),
}

impl FlintError {
    /// The process exit code for this error in file mode.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlintError::Runtime(_) => 70,
            _ => 65,
        }
    }
}

impl Report for FlintError {
    fn report(&self) {
        match self {
            FlintError::Scan(error) => error.report(),
            FlintError::Parse(error) => error.report(),
            FlintError::Resolve(error) => error.report(),
            FlintError::Runtime(error) => error.report(),
        }
    }
}

impl From<ScanError> for FlintError {
    fn from(error: ScanError) -> Self {
        FlintError::Scan(error)
    }
}

impl From<ParseError> for FlintError {
    fn from(error: ParseError) -> Self {
        FlintError::Parse(error)
    }
}

impl From<ResolveError> for FlintError {
    fn from(error: ResolveError) -> Self {
        FlintError::Resolve(error)
    }
}

impl From<RuntimeError> for FlintError {
    fn from(error: RuntimeError) -> Self {
        FlintError::Runtime(error)
    }
}

/// Unwinds statement execution. A `return` statement propagates up the
/// execution stack as `Interrupt::Return` until the nearest function call
/// catches it and turns it back into a value.
#[derive(Debug)]
pub enum Interrupt {
    Error(RuntimeError),
    Return(Object),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}
