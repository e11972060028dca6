//! Flint is a small dynamically typed scripting language with lexical
//! scoping, first-class functions and classes. It is executed by a
//! tree-walk interpreter with a hand-written recursive descent parser.
//!
//! Running a program is a pipeline of four stages. A failure at any stage
//! aborts the pipeline and surfaces as a typed diagnostic.
//!
//! ## Scanning
//! The [`scanner`] turns the source text into a flat list of
//! [`tokens`](token::Token), each carrying its kind, lexeme and 1-based
//! source position. The token list always ends in a single `EOF` token;
//! problems like an unterminated string surface as a
//! [`ScanError`](error::ScanError).
//!
//! ## Parsing
//! The [`parser`] builds the syntax tree out of the token list by recursive
//! descent. [`Expressions`](expr::Expr) are pieces of code that produce a
//! value; [`statements`](stmt::Stmt) are pieces of code that perform some
//! action, like declaring a variable or printing. Syntax errors surface as
//! a [`ParseError`](error::ParseError), and the first one aborts the parse.
//!
//! ## Resolving
//! The [`resolver`] is a static pre-pass over the finished tree. It binds
//! every variable use to the lexical distance of the scope that declares
//! it, which is what makes closures capture the right variables even when a
//! later declaration shadows them. Semantically invalid code that the
//! parser cannot reject, like `return` at the top level or a class
//! inheriting from itself, surfaces here as a
//! [`ResolveError`](error::ResolveError).
//!
//! ## Interpreting
//! The [`interpreter`] walks the tree and executes it against a chain of
//! nested [`environments`](environment::Environment). Scope contents are
//! shared between the running code and every closure that captured them,
//! so an assignment is observed by all of them. Type mismatches and other
//! problems that only show up while running surface as a
//! [`RuntimeError`](error::RuntimeError).

use std::{fs, process};
use std::io::Write;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub mod error;
pub mod token;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod environment;
pub mod parser;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod function;
pub mod resolver;
pub mod class;

use error::{FlintError, Report};
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The interpreter runner. Owns the interpreter state so consecutive
/// [`run`](flint::run) calls (REPL prompts) share globals and resolved
/// distances. Program output goes to the writer handed to [`new`](flint::new).
#[allow(non_camel_case_types)]
pub struct flint<'a> {
    interpreter: Interpreter<'a>,
}

impl<'a> flint<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        flint {
            interpreter: Interpreter::new(output),
        }
    }

    /// Runs a script file. Exits the process with `65` on a scan, parse or
    /// resolve error, `70` on a runtime error and `66` for an unreadable
    /// file.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path).unwrap_or_else(|error| {
            eprintln!("Could not read '{path}': {error}");
            process::exit(66);
        });

        if let Err(error) = self.run(&contents) {
            error.report();
            process::exit(error.exit_code());
        }
    }

    /// Reads and runs one statement or expression per prompt until EOF.
    /// Errors are reported and the session continues with the environment
    /// and the resolved distances preserved.
    pub fn run_prompt(&mut self) {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(error) => {
                eprintln!("Could not start the prompt: {error}");
                process::exit(74);
            },
        };

        let history = home::home_dir().map(|dir| dir.join(".flint_history"));
        if let Some(history) = &history {
            let _ = editor.load_history(history);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());

                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    // Accept a bare expression by supplying the ';' itself.
                    let source = if line.ends_with(';') || line.ends_with('}') {
                        line.to_string()
                    } else {
                        format!("{line};")
                    };

                    if let Err(error) = self.run(&source) {
                        error.report();
                    }
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("Could not read the line: {error}");
                    break;
                },
            }
        }

        if let Some(history) = &history {
            let _ = editor.save_history(history);
        }
    }

    /// Runs a piece of source text through the whole pipeline.
    pub fn run(&mut self, source: &str) -> Result<(), FlintError> {
        let tokens = Scanner::new(source).scan_tokens()?;

        let statements = Parser::new(tokens).parse()?;

        Resolver::new(&mut self.interpreter).resolve(&statements)?;

        self.interpreter.interpret(&statements)?;

        Ok(())
    }
}
