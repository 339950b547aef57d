// Copyright 2026 Sqltree Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Visitor-based tree traversal
//!
//! A [`Visitor`] folds a tree into one output value. Each node category has
//! an `accept` entry point that dispatches on the concrete variant, so a
//! consumer written against the trait cannot skip a variant silently: the
//! default body of every handler fails with
//! [`Error::UnsupportedNodeKind`](crate::error::Error). Consumers override
//! exactly the handlers they understand.
//!
//! Traversal never mutates the tree. Handlers take `&self` references into
//! the tree and `&mut self` on the visitor, so per-traversal state (indent
//! levels, counters) lives on the visitor.

use crate::ast::{
    BinaryExpression, BooleanExpression, CaseExpression, ColumnReference, CreateTableStatement,
    DeleteStatement, Expression, FunctionCall, InsertStatement, JoinExpression, LiteralExpression,
    NodeKind, SelectStatement, Statement, TableExpression, TableReference, UpdateStatement,
};
use crate::error::{Error, Result};

/// Trait for consumers that fold a syntax tree into a value
///
/// Every handler defaults to failing with `UnsupportedNodeKind`, naming the
/// variant and its position. Clause nodes (WHERE, ORDER BY, SET and so on)
/// have no handlers of their own; a statement handler walks its clauses
/// directly and recurses into their expressions via [`Expression::accept`].
pub trait Visitor {
    /// The value a completed traversal produces
    type Output;

    fn visit_select(&mut self, stmt: &SelectStatement) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::SelectStatement, stmt.position))
    }

    fn visit_insert(&mut self, stmt: &InsertStatement) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::InsertStatement, stmt.position))
    }

    fn visit_update(&mut self, stmt: &UpdateStatement) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::UpdateStatement, stmt.position))
    }

    fn visit_delete(&mut self, stmt: &DeleteStatement) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::DeleteStatement, stmt.position))
    }

    fn visit_create_table(&mut self, stmt: &CreateTableStatement) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::CreateTableStatement, stmt.position))
    }

    fn visit_column_reference(&mut self, expr: &ColumnReference) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::ColumnReference, expr.position))
    }

    fn visit_literal(&mut self, expr: &LiteralExpression) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::LiteralExpression, expr.position))
    }

    fn visit_function_call(&mut self, expr: &FunctionCall) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::FunctionCall, expr.position))
    }

    fn visit_binary(&mut self, expr: &BinaryExpression) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::BinaryExpression, expr.position))
    }

    fn visit_boolean(&mut self, expr: &BooleanExpression) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::BooleanExpression, expr.position))
    }

    fn visit_case(&mut self, expr: &CaseExpression) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::CaseExpression, expr.position))
    }

    fn visit_table_reference(&mut self, table: &TableReference) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::TableReference, table.position))
    }

    fn visit_join(&mut self, join: &JoinExpression) -> Result<Self::Output> {
        Err(Error::unsupported(NodeKind::JoinExpression, join.position))
    }
}

impl Statement {
    /// Dispatch this statement to the matching visitor handler
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output> {
        match self {
            Statement::Select(s) => visitor.visit_select(s),
            Statement::Insert(s) => visitor.visit_insert(s),
            Statement::Update(s) => visitor.visit_update(s),
            Statement::Delete(s) => visitor.visit_delete(s),
            Statement::CreateTable(s) => visitor.visit_create_table(s),
        }
    }
}

impl Expression {
    /// Dispatch this expression to the matching visitor handler
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output> {
        match self {
            Expression::Column(e) => visitor.visit_column_reference(e),
            Expression::Literal(e) => visitor.visit_literal(e),
            Expression::Function(e) => visitor.visit_function_call(e),
            Expression::Binary(e) => visitor.visit_binary(e),
            Expression::Boolean(e) => visitor.visit_boolean(e),
            Expression::Case(e) => visitor.visit_case(e),
        }
    }
}

impl TableExpression {
    /// Dispatch this table expression to the matching visitor handler
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output> {
        match self {
            TableExpression::Reference(t) => visitor.visit_table_reference(t),
            TableExpression::Join(j) => visitor.visit_join(j),
        }
    }
}

// Convenience impl so handlers holding a concrete select (a CTE body, an
// INSERT source) can recurse with `stmt.accept(self)`.

impl SelectStatement {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output> {
        visitor.visit_select(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    // A visitor that handles only column references.
    struct ColumnsOnly;

    impl Visitor for ColumnsOnly {
        type Output = String;

        fn visit_column_reference(&mut self, expr: &ColumnReference) -> Result<String> {
            Ok(expr.column_name.clone())
        }
    }

    #[test]
    fn test_overridden_handler_succeeds() {
        let expr = Expression::Column(ColumnReference {
            position: Position::new(1, 8),
            table_name: None,
            column_name: "age".to_string(),
        });
        let mut visitor = ColumnsOnly;
        assert_eq!(expr.accept(&mut visitor).unwrap(), "age");
    }

    #[test]
    fn test_default_handler_fails_with_kind_and_position() {
        let expr = Expression::Literal(LiteralExpression {
            position: Position::new(2, 3),
            literal_type: crate::ast::LiteralType::Integer,
            value: "18".to_string(),
        });
        let mut visitor = ColumnsOnly;
        let err = expr.accept(&mut visitor).unwrap_err();
        assert_eq!(
            err,
            Error::unsupported(NodeKind::LiteralExpression, Position::new(2, 3))
        );
    }

    #[test]
    fn test_statement_dispatch_fails_for_unhandled_variant() {
        let stmt = Statement::Delete(DeleteStatement {
            position: Position::new(1, 1),
            table_name: "users".to_string(),
            alias: None,
            where_clause: None,
        });
        let mut visitor = ColumnsOnly;
        let err = stmt.accept(&mut visitor).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedNodeKind {
                kind: NodeKind::DeleteStatement,
                ..
            }
        ));
    }
}
