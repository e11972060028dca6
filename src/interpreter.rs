use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Interrupt, RuntimeError};
use crate::expr::{self, Expr, ExprVisitor};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{self, Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, RuntimeError>;
type ExecResult = Result<(), Interrupt>;

/// Walks the syntax tree and executes it. Expressions evaluate to an
/// [`Object`]; statements run for their side effects against the current
/// environment. Program output goes to the writer handed in at
/// construction, diagnostics are returned to the caller.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Executes the statements in order. The first runtime error aborts
    /// execution.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => (),
                Err(Interrupt::Error(error)) => return Err(error),
                // The resolver rejects top level returns.
                Err(Interrupt::Return(_)) => unreachable!(),
            }
        }

        Ok(())
    }

    /// Records the lexical distance of a variable use. The resolver calls
    /// this for every non-global use site it proves.
    pub fn resolve(&mut self, name: &Token, depth: usize) {
        self.locals.insert(name.clone(), depth);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes the statements with `environment` as the innermost scope,
    /// restoring the previous scope afterwards even when unwinding.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    /// Looks a variable up at its resolved depth, or in the globals when the
    /// resolver left it out of the distance map.
    fn look_up_variable(&self, name: &Token) -> EvalResult {
        match self.locals.get(name) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn as_numbers(operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
        match (left, right) {
            (Object::Literal(Literal::Number(left)), Object::Literal(Literal::Number(right))) => {
                Ok((*left, *right))
            },
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Invalid operands".to_string(),
            }),
        }
    }
}

impl<'a> ExprVisitor<EvalResult> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(Object::Literal(literal.clone()))
    }

    fn visit_variable_expr(&mut self, variable: &expr::VariableData) -> EvalResult {
        self.look_up_variable(&variable.name)
    }

    fn visit_assign_expr(&mut self, assign: &expr::AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.name) {
            Some(distance) => {
                self.environment.borrow_mut().assign_at(*distance, &assign.name, value.clone());
            },
            None => self.globals.borrow_mut().assign(&assign.name, value.clone())?,
        }

        // The value is the assignment's result.
        Ok(value)
    }

    fn visit_unary_expr(&mut self, unary: &expr::UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: unary.operator.clone(),
                message: "Invalid operand".to_string(),
            }),
            Type::Bang => Ok(Object::from(!right.as_bool())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, binary: &expr::BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let invalid_operands = || RuntimeError {
            token: binary.operator.clone(),
            message: "Invalid operands".to_string(),
        };

        match binary.operator.r#type {
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Plus => (left + right).ok_or_else(invalid_operands),
            Type::Minus => (left - right).ok_or_else(invalid_operands),
            Type::Star => (left * right).ok_or_else(invalid_operands),
            Type::Slash => (left / right).ok_or_else(invalid_operands),
            Type::Greater => {
                let (left, right) = Self::as_numbers(&binary.operator, &left, &right)?;
                Ok(Object::from(left > right))
            },
            Type::GreaterEqual => {
                let (left, right) = Self::as_numbers(&binary.operator, &left, &right)?;
                Ok(Object::from(left >= right))
            },
            Type::Less => {
                let (left, right) = Self::as_numbers(&binary.operator, &left, &right)?;
                Ok(Object::from(left < right))
            },
            Type::LessEqual => {
                let (left, right) = Self::as_numbers(&binary.operator, &left, &right)?;
                Ok(Object::from(left <= right))
            },
            _ => unreachable!(),
        }
    }

    fn visit_logical_expr(&mut self, logical: &expr::LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        // Short-circuit with the left value itself, not a boolean made
        // from it.
        match logical.operator.r#type {
            Type::Or if left.as_bool() => Ok(left),
            Type::And if !left.as_bool() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_call_expr(&mut self, call: &expr::CallData) -> EvalResult {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function.as_ref(),
            Object::NativeFunction(function) => function.as_ref(),
            Object::Class(class) => class,
            _ => return Err(RuntimeError {
                token: call.paren.clone(),
                message: "Calling non-function/non-class".to_string(),
            }),
        };

        if callable.arity() != arguments.len() {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Arity = {}", callable.arity()),
            });
        }

        callable.call(self, arguments)
    }

    fn visit_grouping_expr(&mut self, grouping: &expr::GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_get_expr(&mut self, get: &expr::GetData) -> EvalResult {
        let object = self.evaluate(&get.object)?;

        match &object {
            Object::Instance(instance) => instance.borrow().get(&get.name, &object),
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have fields".to_string(),
            }),
        }
    }

    fn visit_set_expr(&mut self, set: &expr::SetData) -> EvalResult {
        let object = self.evaluate(&set.object)?;

        match object {
            Object::Instance(instance) => {
                let value = self.evaluate(&set.value)?;
                instance.borrow_mut().set(&set.name, value.clone());
                Ok(value)
            },
            _ => Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields".to_string(),
            }),
        }
    }

    fn visit_this_expr(&mut self, this: &expr::ThisData) -> EvalResult {
        self.look_up_variable(&this.keyword)
    }

    fn visit_super_expr(&mut self, super_expr: &expr::SuperData) -> EvalResult {
        let distance = match self.locals.get(&super_expr.keyword) {
            Some(distance) => *distance,
            None => return Err(RuntimeError {
                token: super_expr.keyword.clone(),
                message: "Undefined variable".to_string(),
            }),
        };

        let superclass = self.environment.borrow().get_at(distance, &super_expr.keyword)?;
        let Object::Class(superclass) = superclass else { unreachable!() };

        // `this` lives in the instance scope one level inside the scope that
        // binds `super`.
        let object = self.environment.borrow().get_at(distance - 1, &Token::from("this"))?;

        let found = superclass.borrow().find_method(&super_expr.method.lexeme);
        match found {
            Some(method) => Ok(Object::from(method.bind(object))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: "Undefined property".to_string(),
            }),
        }
    }
}

impl<'a> StmtVisitor<ExecResult> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, expression: &stmt::ExpressionData) -> ExecResult {
        self.evaluate(&expression.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, print: &stmt::PrintData) -> ExecResult {
        let value = self.evaluate(&print.expr)?;
        let _ = writeln!(self.output, "{value}");
        Ok(())
    }

    fn visit_var_stmt(&mut self, var: &stmt::VarData) -> ExecResult {
        let value = match &var.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&var.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, block: &stmt::BlockData) -> ExecResult {
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&block.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, if_stmt: &stmt::IfData) -> ExecResult {
        if self.evaluate(&if_stmt.condition)?.as_bool() {
            self.execute(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, while_stmt: &stmt::WhileData) -> ExecResult {
        // The condition is re-evaluated in the environment left behind by
        // the body.
        while self.evaluate(&while_stmt.condition)?.as_bool() {
            self.execute(&while_stmt.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, function: &stmt::FunctionData) -> ExecResult {
        let value = Function::new(function, Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&function.name.lexeme, Object::from(value));
        Ok(())
    }

    fn visit_return_stmt(&mut self, return_stmt: &stmt::ReturnData) -> ExecResult {
        let value = match &return_stmt.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Interrupt::Return(value))
    }

    fn visit_class_stmt(&mut self, class: &stmt::ClassData) -> ExecResult {
        let superclass = match &class.superclass {
            Some(expr) => match self.evaluate(expr)? {
                Object::Class(superclass) => Some(superclass),
                _ => {
                    let Expr::Variable(variable) = expr else { unreachable!() };
                    return Err(Interrupt::Error(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class".to_string(),
                    }));
                },
            },
            None => None,
        };

        self.environment.borrow_mut().define(&class.name.lexeme, Object::from(Literal::Nil));

        // Methods of a subclass close over an extra scope that binds
        // `super` to the superclass.
        let enclosing = superclass.as_ref().map(|superclass| {
            let mut environment = Environment::new(Some(Rc::clone(&self.environment)));
            environment.define("super", Object::Class(Rc::clone(superclass)));
            mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)))
        });

        let mut methods = HashMap::new();
        for method in &class.methods {
            let Stmt::Function(function) = method else { unreachable!() };
            let is_initializer = function.name.lexeme == "init";
            methods.insert(
                function.name.lexeme.clone(),
                Function::new(function, Rc::clone(&self.environment), is_initializer),
            );
        }

        let value = Rc::new(RefCell::new(Class::new(class.name.lexeme.clone(), superclass, methods)));

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        self.environment.borrow_mut().assign(&class.name, Object::from(value))?;
        Ok(())
    }
}
