//! Tree-walking interpreter.
//!
//! Statements run strictly in order. The first runtime error stops the
//! run; bindings made before it stay in the symbol table.

use quip_ir::{Expr, Program, Stmt};
use tracing::debug;

use crate::builtins::Builtin;
use crate::print_handler::SharedPrintHandler;
use crate::{RuntimeError, SymbolTable, Value};

/// Evaluation context: the symbol table plus the output sink.
pub struct Interpreter {
    symbols: SymbolTable,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter with an empty symbol table.
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
            print_handler,
        }
    }

    /// Execute every statement of `program` in order.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            debug!(span = %stmt.span(), "exec");
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Execute a single statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::VariableDeclaration { name, value } => {
                let value = self.eval_expr(value)?;
                debug!(name = %name.text, %value, "bind");
                self.symbols.declare(&name.text);
                self.symbols
                    .set(&name.text, value)
                    .map_err(|e| e.with_span(name.span))
            }
            Stmt::FunctionCall { name, argument } => {
                let argument = self.eval_expr(argument)?;
                let builtin = Builtin::lookup(&name.text)
                    .ok_or_else(|| RuntimeError::unknown_function(&name.text, name.span))?;
                debug!(function = builtin.name(), %argument, "call");
                builtin.call(&argument, &self.print_handler);
                Ok(())
            }
        }
    }

    /// Evaluate an expression to a value.
    pub fn eval_expr(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::StringLiteral(tok) => Ok(Value::from(tok.text.as_str())),
            Expr::VariableAccess(tok) => self
                .symbols
                .get(&tok.text)
                .cloned()
                .map_err(|e| e.with_span(tok.span)),
        }
    }

    /// Consume the interpreter, keeping its bindings.
    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbols
    }
}
