use std::collections::HashMap;
use std::mem;

use crate::error::ResolveError;
use crate::expr::{self, Expr, ExprVisitor};
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::stmt::{self, Stmt, StmtVisitor};
use crate::token::Token;

type ResolveResult = Result<(), ResolveError>;

enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

enum ClassType {
    None,
    Class,
    Subclass,
}

/// Binds every variable use to the lexical distance of its declaration in a
/// single pre-order walk, before anything runs. Distances are written into
/// the interpreter's map; globals are left out of it and fall through to the
/// global scope at runtime.
///
/// The scope stack tracks which names are visible and whether each is fully
/// initialized yet (`false` between declaration and the end of its
/// initializer). The stack is empty at the top level so globals are never
/// recorded.
pub struct Resolver<'a, 'o> {
    interpreter: &'a mut Interpreter<'o>,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a, 'o> Resolver<'a, 'o> {
    pub fn new(interpreter: &'a mut Interpreter<'o>) -> Self {
        Resolver {
            interpreter,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) -> ResolveResult {
        expr.accept(self)
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> ResolveResult {
        stmt.accept(self)
    }

    /// Resolves the statements. Resolution is fail-fast: the first error
    /// aborts the walk.
    pub fn resolve(&mut self, statements: &[Stmt]) -> ResolveResult {
        for statement in statements {
            self.resolve_stmt(statement)?;
        }

        Ok(())
    }

    fn resolve_function(&mut self, function: &stmt::FunctionData, r#type: FunctionType) -> ResolveResult {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);

        self.begin_scope();
        for param in &function.params {
            self.declare(param)?;
            self.define(param);
        }
        let result = self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
        result
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as declared but not yet usable in the current scope.
    fn declare(&mut self, name: &Token) -> ResolveResult {
        if let Some(scope) = self.scopes.last_mut() {
            if scope.contains_key(&name.lexeme) {
                return Err(ResolveError {
                    token: name.clone(),
                    message: "Variable already declared".to_string(),
                });
            }

            scope.insert(name.lexeme.to_owned(), false);
        }

        Ok(())
    }

    /// Marks a name as fully initialized in the current scope.
    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.to_owned(), true);
        }
    }

    /// Searches the scope stack from innermost outward and records the depth
    /// the name was found at. Not finding it means the name is a global.
    fn resolve_local(&mut self, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(name, i);
                return;
            }
        }
    }
}

impl<'a, 'o> ExprVisitor<ResolveResult> for Resolver<'a, 'o> {
    fn visit_literal_expr(&mut self, _literal: &Literal) -> ResolveResult {
        Ok(())
    }

    fn visit_variable_expr(&mut self, variable: &expr::VariableData) -> ResolveResult {
        if let Some(scope) = self.scopes.last() {
            if scope.get(&variable.name.lexeme) == Some(&false) {
                return Err(ResolveError {
                    token: variable.name.clone(),
                    message: "Can't read local variable in its own initializer".to_string(),
                });
            }
        }

        self.resolve_local(&variable.name);
        Ok(())
    }

    fn visit_assign_expr(&mut self, assign: &expr::AssignData) -> ResolveResult {
        self.resolve_expr(&assign.value)?;
        self.resolve_local(&assign.name);
        Ok(())
    }

    fn visit_unary_expr(&mut self, unary: &expr::UnaryData) -> ResolveResult {
        self.resolve_expr(&unary.expr)
    }

    fn visit_binary_expr(&mut self, binary: &expr::BinaryData) -> ResolveResult {
        self.resolve_expr(&binary.left)?;
        self.resolve_expr(&binary.right)
    }

    fn visit_logical_expr(&mut self, logical: &expr::LogicalData) -> ResolveResult {
        self.resolve_expr(&logical.left)?;
        self.resolve_expr(&logical.right)
    }

    fn visit_call_expr(&mut self, call: &expr::CallData) -> ResolveResult {
        self.resolve_expr(&call.callee)?;

        for argument in &call.arguments {
            self.resolve_expr(argument)?;
        }

        Ok(())
    }

    fn visit_grouping_expr(&mut self, grouping: &expr::GroupingData) -> ResolveResult {
        self.resolve_expr(&grouping.expr)
    }

    fn visit_get_expr(&mut self, get: &expr::GetData) -> ResolveResult {
        // Properties are looked up at runtime, only the receiver resolves.
        self.resolve_expr(&get.object)
    }

    fn visit_set_expr(&mut self, set: &expr::SetData) -> ResolveResult {
        self.resolve_expr(&set.value)?;
        self.resolve_expr(&set.object)
    }

    fn visit_this_expr(&mut self, this: &expr::ThisData) -> ResolveResult {
        if let ClassType::None = self.current_class {
            return Err(ResolveError {
                token: this.keyword.clone(),
                message: "Used `this` out of class".to_string(),
            });
        }

        self.resolve_local(&this.keyword);
        Ok(())
    }

    fn visit_super_expr(&mut self, super_expr: &expr::SuperData) -> ResolveResult {
        match self.current_class {
            ClassType::Subclass => (),
            ClassType::None => return Err(ResolveError {
                token: super_expr.keyword.clone(),
                message: "Used `super` out of class".to_string(),
            }),
            ClassType::Class => return Err(ResolveError {
                token: super_expr.keyword.clone(),
                message: "Used `super` in class without superclass".to_string(),
            }),
        }

        self.resolve_local(&super_expr.keyword);
        Ok(())
    }
}

impl<'a, 'o> StmtVisitor<ResolveResult> for Resolver<'a, 'o> {
    fn visit_expression_stmt(&mut self, expression: &stmt::ExpressionData) -> ResolveResult {
        self.resolve_expr(&expression.expr)
    }

    fn visit_print_stmt(&mut self, print: &stmt::PrintData) -> ResolveResult {
        self.resolve_expr(&print.expr)
    }

    fn visit_var_stmt(&mut self, var: &stmt::VarData) -> ResolveResult {
        self.declare(&var.name)?;
        if let Some(initializer) = &var.initializer {
            self.resolve_expr(initializer)?;
        }
        self.define(&var.name);

        Ok(())
    }

    fn visit_block_stmt(&mut self, block: &stmt::BlockData) -> ResolveResult {
        self.begin_scope();
        let result = self.resolve(&block.statements);
        self.end_scope();

        result
    }

    fn visit_if_stmt(&mut self, if_stmt: &stmt::IfData) -> ResolveResult {
        self.resolve_expr(&if_stmt.condition)?;
        self.resolve_stmt(&if_stmt.then_branch)?;
        if let Some(else_branch) = &if_stmt.else_branch {
            self.resolve_stmt(else_branch)?;
        }

        Ok(())
    }

    fn visit_while_stmt(&mut self, while_stmt: &stmt::WhileData) -> ResolveResult {
        self.resolve_expr(&while_stmt.condition)?;
        self.resolve_stmt(&while_stmt.body)
    }

    fn visit_function_stmt(&mut self, function: &stmt::FunctionData) -> ResolveResult {
        self.declare(&function.name)?;
        self.define(&function.name);

        self.resolve_function(function, FunctionType::Function)
    }

    fn visit_return_stmt(&mut self, return_stmt: &stmt::ReturnData) -> ResolveResult {
        if let FunctionType::None = self.current_function {
            return Err(ResolveError {
                token: return_stmt.keyword.clone(),
                message: "Top level return".to_string(),
            });
        }

        if let Some(value) = &return_stmt.value {
            if let FunctionType::Initializer = self.current_function {
                return Err(ResolveError {
                    token: return_stmt.keyword.clone(),
                    message: "Can't return value from init".to_string(),
                });
            }

            self.resolve_expr(value)?;
        }

        Ok(())
    }

    fn visit_class_stmt(&mut self, class: &stmt::ClassData) -> ResolveResult {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&class.name)?;
        self.define(&class.name);

        if let Some(superclass) = &class.superclass {
            let Expr::Variable(variable) = superclass else { unreachable!() };
            if class.name.lexeme == variable.name.lexeme {
                return Err(ResolveError {
                    token: variable.name.clone(),
                    message: "Can't inherit from self".to_string(),
                });
            }

            self.current_class = ClassType::Subclass;

            self.resolve_expr(superclass)?;

            self.begin_scope();
            self.scopes
                .last_mut()
                .expect("stack to be not empty")
                .insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert("this".to_string(), true);

        for method in &class.methods {
            let Stmt::Function(function) = method else { unreachable!() };

            let declaration = if function.name.lexeme.eq("init") {
                FunctionType::Initializer
            } else {
                FunctionType::Method
            };
            self.resolve_function(function, declaration)?;
        }

        self.end_scope();

        if class.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn resolve(source: &str) -> ResolveResult {
        let tokens = Scanner::new(source).scan_tokens().unwrap();
        let statements = Parser::new(tokens).parse().unwrap();

        let mut output = Vec::new();
        let mut interpreter = Interpreter::new(&mut output);
        Resolver::new(&mut interpreter).resolve(&statements)
    }

    #[test]
    fn globals_may_be_redeclared() {
        assert!(resolve("var a = 1; var a = 2;").is_ok());
    }

    #[test]
    fn locals_may_not_be_redeclared() {
        let error = resolve("{ var a = 1; var a = 2; }").unwrap_err();
        assert_eq!(error.message, "Variable already declared");
    }

    #[test]
    fn local_initializer_may_not_read_itself() {
        let error = resolve("{ var a = a; }").unwrap_err();
        assert_eq!(error.message, "Can't read local variable in its own initializer");
    }

    #[test]
    fn global_initializer_may_shadow() {
        // At the top level `var a = a;` reads the (possibly undefined)
        // global, which is a runtime concern, not a resolve error.
        assert!(resolve("var a = a;").is_ok());
    }

    #[test]
    fn top_level_return() {
        let error = resolve("return 1;").unwrap_err();
        assert_eq!(error.message, "Top level return");
    }

    #[test]
    fn initializer_may_not_return_a_value() {
        let error = resolve("class A { init() { return 2; } }").unwrap_err();
        assert_eq!(error.message, "Can't return value from init");
    }

    #[test]
    fn initializer_may_return_bare() {
        assert!(resolve("class A { init() { return; } }").is_ok());
    }

    #[test]
    fn this_outside_of_class() {
        let error = resolve("print this;").unwrap_err();
        assert_eq!(error.message, "Used `this` out of class");
    }

    #[test]
    fn super_outside_of_class() {
        let error = resolve("fun f() { super.m(); }").unwrap_err();
        assert_eq!(error.message, "Used `super` out of class");
    }

    #[test]
    fn super_without_superclass() {
        let error = resolve("class A { m() { super.m(); } }").unwrap_err();
        assert_eq!(error.message, "Used `super` in class without superclass");
    }

    #[test]
    fn class_may_not_inherit_from_itself() {
        let error = resolve("class A < A {}").unwrap_err();
        assert_eq!(error.message, "Can't inherit from self");
    }
}
