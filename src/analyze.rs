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

//! Structural statistics over a statement tree
//!
//! [`Analyzer`] counts every node a full recursive descent from the root
//! reaches: join sub-trees, CTE bodies, CASE branches, function arguments,
//! set-clause values, limit and offset expressions. Counting is monotonic
//! and order-independent; two traversals of the same unmodified tree add
//! identical counts.

use crate::ast::{
    BinaryExpression, BooleanExpression, CaseExpression, ColumnReference, CreateTableStatement,
    DeleteStatement, FunctionCall, InsertStatement, JoinExpression, LiteralExpression, NodeKind,
    SelectStatement, Statement, TableReference, UpdateStatement, WhereClause,
};
use crate::error::Result;
use crate::visit::Visitor;
use rustc_hash::FxHashMap;

/// Accumulates occurrence counts per node kind
///
/// One `Analyzer` may traverse several trees; counts accumulate across
/// calls. Use [`analyze`] for a fresh count per statement.
#[derive(Debug, Default)]
pub struct Analyzer {
    counts: FxHashMap<NodeKind, usize>,
}

impl Analyzer {
    /// Create an analyzer with empty counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Traverse a statement, adding its node counts to this analyzer
    pub fn analyze(&mut self, stmt: &Statement) -> Result<()> {
        stmt.accept(self)
    }

    /// Occurrences of one node kind seen so far
    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// All counts seen so far
    pub fn counts(&self) -> &FxHashMap<NodeKind, usize> {
        &self.counts
    }

    /// Consume the analyzer, yielding its counts
    pub fn into_counts(self) -> FxHashMap<NodeKind, usize> {
        self.counts
    }

    fn record(&mut self, kind: NodeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    fn walk_where(&mut self, clause: &WhereClause) -> Result<()> {
        self.record(NodeKind::WhereClause);
        clause.condition.accept(self)
    }

    fn walk_select_body(&mut self, stmt: &SelectStatement) -> Result<()> {
        for cte in &stmt.ctes {
            self.record(NodeKind::CommonTableExpression);
            cte.query.accept(self)?;
        }
        for item in &stmt.select_list {
            self.record(NodeKind::SelectItem);
            item.expression.accept(self)?;
        }
        if let Some(from) = &stmt.from {
            self.record(NodeKind::FromClause);
            from.table.accept(self)?;
        }
        if let Some(where_clause) = &stmt.where_clause {
            self.walk_where(where_clause)?;
        }
        if let Some(group_by) = &stmt.group_by {
            self.record(NodeKind::GroupByClause);
            for expr in &group_by.grouping_expressions {
                expr.accept(self)?;
            }
        }
        if let Some(having) = &stmt.having {
            self.record(NodeKind::HavingClause);
            having.condition.accept(self)?;
        }
        if let Some(order_by) = &stmt.order_by {
            self.record(NodeKind::OrderByClause);
            for element in &order_by.elements {
                self.record(NodeKind::OrderByElement);
                element.expression.accept(self)?;
            }
        }
        if let Some(limit) = &stmt.limit {
            self.record(NodeKind::LimitClause);
            limit.row_count.accept(self)?;
            if let Some(offset) = &limit.offset {
                offset.accept(self)?;
            }
        }
        Ok(())
    }
}

impl Visitor for Analyzer {
    type Output = ();

    fn visit_select(&mut self, stmt: &SelectStatement) -> Result<()> {
        self.record(NodeKind::SelectStatement);
        self.walk_select_body(stmt)
    }

    fn visit_insert(&mut self, stmt: &InsertStatement) -> Result<()> {
        self.record(NodeKind::InsertStatement);
        if let Some(values) = &stmt.values {
            self.record(NodeKind::ValuesClause);
            for row in &values.rows {
                for value in row {
                    value.accept(self)?;
                }
            }
        }
        if let Some(select) = &stmt.select {
            select.accept(self)?;
        }
        Ok(())
    }

    fn visit_update(&mut self, stmt: &UpdateStatement) -> Result<()> {
        self.record(NodeKind::UpdateStatement);
        for set_clause in &stmt.set_clauses {
            self.record(NodeKind::SetClause);
            set_clause.value.accept(self)?;
        }
        if let Some(where_clause) = &stmt.where_clause {
            self.walk_where(where_clause)?;
        }
        Ok(())
    }

    fn visit_delete(&mut self, stmt: &DeleteStatement) -> Result<()> {
        self.record(NodeKind::DeleteStatement);
        if let Some(where_clause) = &stmt.where_clause {
            self.walk_where(where_clause)?;
        }
        Ok(())
    }

    fn visit_create_table(&mut self, stmt: &CreateTableStatement) -> Result<()> {
        self.record(NodeKind::CreateTableStatement);
        for column in &stmt.columns {
            self.record(NodeKind::ColumnDefinition);
            self.record(column.data_type.kind());
            for constraint in &column.constraints {
                self.record(constraint.kind());
            }
        }
        for _constraint in &stmt.table_constraints {
            self.record(NodeKind::TableConstraint);
        }
        Ok(())
    }

    fn visit_column_reference(&mut self, _expr: &ColumnReference) -> Result<()> {
        self.record(NodeKind::ColumnReference);
        Ok(())
    }

    fn visit_literal(&mut self, _expr: &LiteralExpression) -> Result<()> {
        self.record(NodeKind::LiteralExpression);
        Ok(())
    }

    fn visit_function_call(&mut self, expr: &FunctionCall) -> Result<()> {
        self.record(NodeKind::FunctionCall);
        for arg in &expr.arguments {
            arg.accept(self)?;
        }
        Ok(())
    }

    fn visit_binary(&mut self, expr: &BinaryExpression) -> Result<()> {
        self.record(NodeKind::BinaryExpression);
        expr.left.accept(self)?;
        expr.right.accept(self)
    }

    fn visit_boolean(&mut self, expr: &BooleanExpression) -> Result<()> {
        self.record(NodeKind::BooleanExpression);
        expr.condition.accept(self)
    }

    fn visit_case(&mut self, expr: &CaseExpression) -> Result<()> {
        self.record(NodeKind::CaseExpression);
        if let Some(operand) = &expr.operand {
            operand.accept(self)?;
        }
        for when in &expr.when_clauses {
            self.record(NodeKind::WhenClause);
            when.condition.accept(self)?;
            when.result.accept(self)?;
        }
        if let Some(else_expr) = &expr.else_expression {
            else_expr.accept(self)?;
        }
        Ok(())
    }

    fn visit_table_reference(&mut self, _table: &TableReference) -> Result<()> {
        self.record(NodeKind::TableReference);
        Ok(())
    }

    fn visit_join(&mut self, join: &JoinExpression) -> Result<()> {
        self.record(NodeKind::JoinExpression);
        join.left.accept(self)?;
        join.right.accept(self)?;
        join.condition.accept(self)
    }
}

/// Count every node in a statement tree with a fresh analyzer
pub fn analyze(stmt: &Statement) -> Result<FxHashMap<NodeKind, usize>> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(stmt)?;
    Ok(analyzer.into_counts())
}
