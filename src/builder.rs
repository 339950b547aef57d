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

//! Programmatic tree construction
//!
//! Convenience constructors for assembling statement trees without a
//! parser. Mutation is confined to the construction phase: a builder's
//! `build` hands off an owned, fully formed statement that traversals
//! treat as immutable.
//!
//! Positions default to `Position::default()`; trees built here are
//! programmatic, so there is no source text to point into. Callers that
//! track positions set them on the node structs directly.

use crate::ast::{
    BinaryExpression, BinaryOperator, CharacterSubtype, CharacterType, ColumnConstraint,
    ColumnDefinition, ColumnReference, CommonTableExpression, CreateTableStatement, DataType,
    DeleteStatement, Expression, FromClause, FunctionCall, GroupByClause, HavingClause,
    InsertStatement, JoinExpression, JoinType, LimitClause, LiteralExpression, LiteralType,
    NotNullConstraint, NumericSubtype, NumericType, OrderByClause, OrderByElement,
    PrimaryKeyConstraint, SelectItem, SelectStatement, SetClause, SortDirection, TableExpression,
    TableReference, UpdateStatement, ValuesClause, WhereClause,
};
use crate::position::Position;

// ============================================================================
// Expression constructors
// ============================================================================

/// Unqualified column reference
pub fn column(name: &str) -> Expression {
    Expression::Column(ColumnReference {
        position: Position::default(),
        table_name: None,
        column_name: name.to_string(),
    })
}

/// Table-qualified column reference
pub fn qualified_column(table: &str, name: &str) -> Expression {
    Expression::Column(ColumnReference {
        position: Position::default(),
        table_name: Some(table.to_string()),
        column_name: name.to_string(),
    })
}

/// Integer literal
pub fn integer(value: i64) -> Expression {
    literal(LiteralType::Integer, value.to_string())
}

/// Decimal literal, value kept as written
pub fn decimal(value: &str) -> Expression {
    literal(LiteralType::Decimal, value.to_string())
}

/// String literal (quoting happens at render time)
pub fn string(value: &str) -> Expression {
    literal(LiteralType::String, value.to_string())
}

/// Boolean literal
pub fn boolean(value: bool) -> Expression {
    literal(LiteralType::Boolean, value.to_string())
}

/// NULL literal
pub fn null() -> Expression {
    literal(LiteralType::Null, String::new())
}

/// Date literal, value kept as written
pub fn date(value: &str) -> Expression {
    literal(LiteralType::Date, value.to_string())
}

fn literal(literal_type: LiteralType, value: String) -> Expression {
    Expression::Literal(LiteralExpression {
        position: Position::default(),
        literal_type,
        value,
    })
}

/// Binary expression
pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary(Box::new(BinaryExpression {
        position: Position::default(),
        left,
        operator,
        right,
    }))
}

/// Function call
pub fn function(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Function(FunctionCall {
        position: Position::default(),
        function_name: name.to_string(),
        arguments,
        distinct: false,
    })
}

/// Function call with the DISTINCT set quantifier
pub fn function_distinct(name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Function(FunctionCall {
        position: Position::default(),
        function_name: name.to_string(),
        arguments,
        distinct: true,
    })
}

// ============================================================================
// Table expression constructors
// ============================================================================

/// Bare table reference
pub fn table(name: &str) -> TableExpression {
    TableExpression::Reference(TableReference {
        position: Position::default(),
        table_name: name.to_string(),
        alias: None,
    })
}

/// Aliased table reference
pub fn table_alias(name: &str, alias: &str) -> TableExpression {
    TableExpression::Reference(TableReference {
        position: Position::default(),
        table_name: name.to_string(),
        alias: Some(alias.to_string()),
    })
}

/// Join of two table expressions
pub fn join(
    join_type: JoinType,
    left: TableExpression,
    right: TableExpression,
    condition: Expression,
) -> TableExpression {
    TableExpression::Join(Box::new(JoinExpression {
        position: Position::default(),
        join_type,
        left,
        right,
        condition,
    }))
}

// ============================================================================
// CTE constructors
// ============================================================================

/// Non-recursive CTE
pub fn cte(name: &str, query: SelectStatement) -> CommonTableExpression {
    CommonTableExpression {
        position: Position::default(),
        name: name.to_string(),
        column_list: vec![],
        query: Box::new(query),
        recursive: false,
    }
}

/// Recursive CTE with an explicit column list
pub fn recursive_cte(name: &str, columns: &[&str], query: SelectStatement) -> CommonTableExpression {
    CommonTableExpression {
        position: Position::default(),
        name: name.to_string(),
        column_list: columns.iter().map(|c| c.to_string()).collect(),
        query: Box::new(query),
        recursive: true,
    }
}

// ============================================================================
// Data type and constraint constructors
// ============================================================================

/// Character data type
pub fn character(subtype: CharacterSubtype, length: Option<u32>) -> DataType {
    DataType::Character(CharacterType {
        position: Position::default(),
        subtype,
        length,
    })
}

/// Numeric data type
pub fn numeric(subtype: NumericSubtype, precision: Option<u32>, scale: Option<u32>) -> DataType {
    DataType::Numeric(NumericType {
        position: Position::default(),
        subtype,
        precision,
        scale,
    })
}

/// Unnamed NOT NULL constraint
pub fn not_null() -> ColumnConstraint {
    ColumnConstraint::NotNull(NotNullConstraint {
        position: Position::default(),
        name: None,
    })
}

/// Unnamed PRIMARY KEY constraint
pub fn primary_key() -> ColumnConstraint {
    ColumnConstraint::PrimaryKey(PrimaryKeyConstraint {
        position: Position::default(),
        name: None,
    })
}

// ============================================================================
// Statement builders
// ============================================================================

/// Fluent builder for SELECT statements
///
/// Items, CTEs, and clauses append in call order; `build` hands off the
/// finished statement.
#[derive(Debug)]
pub struct SelectBuilder {
    stmt: SelectStatement,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            stmt: SelectStatement {
                position: Position::default(),
                distinct: false,
                ctes: vec![],
                select_list: vec![],
                from: None,
                where_clause: None,
                group_by: None,
                having: None,
                order_by: None,
                limit: None,
            },
        }
    }

    pub fn distinct(mut self) -> Self {
        self.stmt.distinct = true;
        self
    }

    /// Append a select item without an alias
    pub fn item(mut self, expression: Expression) -> Self {
        self.stmt.select_list.push(SelectItem {
            position: Position::default(),
            expression,
            alias: None,
        });
        self
    }

    /// Append an aliased select item
    pub fn item_as(mut self, expression: Expression, alias: &str) -> Self {
        self.stmt.select_list.push(SelectItem {
            position: Position::default(),
            expression,
            alias: Some(alias.to_string()),
        });
        self
    }

    pub fn from(mut self, table: TableExpression) -> Self {
        self.stmt.from = Some(FromClause {
            position: Position::default(),
            table,
        });
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.stmt.where_clause = Some(WhereClause {
            position: Position::default(),
            condition,
        });
        self
    }

    pub fn group_by(mut self, expressions: Vec<Expression>) -> Self {
        self.stmt.group_by = Some(GroupByClause {
            position: Position::default(),
            grouping_expressions: expressions,
        });
        self
    }

    pub fn having(mut self, condition: Expression) -> Self {
        self.stmt.having = Some(HavingClause {
            position: Position::default(),
            condition,
        });
        self
    }

    /// Append one ORDER BY element
    pub fn order_by(mut self, expression: Expression, direction: SortDirection) -> Self {
        let element = OrderByElement {
            position: Position::default(),
            expression,
            direction,
        };
        match &mut self.stmt.order_by {
            Some(clause) => clause.elements.push(element),
            None => {
                self.stmt.order_by = Some(OrderByClause {
                    position: Position::default(),
                    elements: vec![element],
                })
            }
        }
        self
    }

    pub fn limit(mut self, row_count: Expression) -> Self {
        self.stmt.limit = Some(LimitClause {
            position: Position::default(),
            row_count,
            offset: None,
        });
        self
    }

    pub fn limit_offset(mut self, row_count: Expression, offset: Expression) -> Self {
        self.stmt.limit = Some(LimitClause {
            position: Position::default(),
            row_count,
            offset: Some(offset),
        });
        self
    }

    /// Append a CTE
    pub fn with(mut self, cte: CommonTableExpression) -> Self {
        self.stmt.ctes.push(cte);
        self
    }

    pub fn build(self) -> SelectStatement {
        self.stmt
    }
}

/// Fluent builder for INSERT statements
#[derive(Debug)]
pub struct InsertBuilder {
    stmt: InsertStatement,
}

impl InsertBuilder {
    pub fn new(table_name: &str) -> Self {
        Self {
            stmt: InsertStatement {
                position: Position::default(),
                table_name: table_name.to_string(),
                columns: vec![],
                values: None,
                select: None,
            },
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.stmt.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append one VALUES row
    pub fn row(mut self, row: Vec<Expression>) -> Self {
        match &mut self.stmt.values {
            Some(values) => values.rows.push(row),
            None => {
                self.stmt.values = Some(ValuesClause {
                    position: Position::default(),
                    rows: vec![row],
                })
            }
        }
        self
    }

    /// Source rows from a SELECT instead of a VALUES clause
    pub fn select(mut self, query: SelectStatement) -> Self {
        self.stmt.select = Some(Box::new(query));
        self
    }

    pub fn build(self) -> InsertStatement {
        self.stmt
    }
}

/// Fluent builder for UPDATE statements
#[derive(Debug)]
pub struct UpdateBuilder {
    stmt: UpdateStatement,
}

impl UpdateBuilder {
    pub fn new(table_name: &str) -> Self {
        Self {
            stmt: UpdateStatement {
                position: Position::default(),
                table_name: table_name.to_string(),
                alias: None,
                set_clauses: vec![],
                where_clause: None,
            },
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.stmt.alias = Some(alias.to_string());
        self
    }

    /// Append one column assignment
    pub fn set(mut self, column_name: &str, value: Expression) -> Self {
        self.stmt.set_clauses.push(SetClause {
            position: Position::default(),
            column_name: column_name.to_string(),
            value,
        });
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.stmt.where_clause = Some(WhereClause {
            position: Position::default(),
            condition,
        });
        self
    }

    pub fn build(self) -> UpdateStatement {
        self.stmt
    }
}

/// Fluent builder for DELETE statements
#[derive(Debug)]
pub struct DeleteBuilder {
    stmt: DeleteStatement,
}

impl DeleteBuilder {
    pub fn new(table_name: &str) -> Self {
        Self {
            stmt: DeleteStatement {
                position: Position::default(),
                table_name: table_name.to_string(),
                alias: None,
                where_clause: None,
            },
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.stmt.alias = Some(alias.to_string());
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.stmt.where_clause = Some(WhereClause {
            position: Position::default(),
            condition,
        });
        self
    }

    pub fn build(self) -> DeleteStatement {
        self.stmt
    }
}

/// Fluent builder for CREATE TABLE statements
#[derive(Debug)]
pub struct CreateTableBuilder {
    stmt: CreateTableStatement,
}

impl CreateTableBuilder {
    pub fn new(table_name: &str) -> Self {
        Self {
            stmt: CreateTableStatement {
                position: Position::default(),
                table_name: table_name.to_string(),
                columns: vec![],
                table_constraints: vec![],
            },
        }
    }

    /// Append a column definition
    pub fn column(
        mut self,
        column_name: &str,
        data_type: DataType,
        constraints: Vec<ColumnConstraint>,
    ) -> Self {
        self.stmt.columns.push(ColumnDefinition {
            position: Position::default(),
            column_name: column_name.to_string(),
            data_type,
            constraints,
        });
        self
    }

    /// Append a table-level constraint placeholder
    pub fn table_constraint(mut self, kind: &str) -> Self {
        self.stmt
            .table_constraints
            .push(crate::ast::TableConstraint {
                position: Position::default(),
                kind: kind.to_string(),
                name: None,
            });
        self
    }

    pub fn build(self) -> CreateTableStatement {
        self.stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Statement;

    #[test]
    fn test_select_builder_clause_assembly() {
        let stmt = SelectBuilder::new()
            .item(column("name"))
            .item_as(function("COUNT", vec![column("id")]), "total")
            .from(table("users"))
            .filter(binary(column("age"), BinaryOperator::GreaterThan, integer(18)))
            .group_by(vec![column("name")])
            .order_by(column("name"), SortDirection::default())
            .limit_offset(integer(10), integer(20))
            .build();

        assert_eq!(stmt.select_list.len(), 2);
        assert_eq!(stmt.select_list[1].alias.as_deref(), Some("total"));
        assert!(stmt.from.is_some());
        assert!(stmt.where_clause.is_some());
        assert!(stmt.group_by.is_some());
        let order_by = stmt.order_by.as_ref().unwrap();
        assert_eq!(order_by.elements[0].direction, SortDirection::Asc);
        let limit = stmt.limit.as_ref().unwrap();
        assert!(limit.offset.is_some());
    }

    #[test]
    fn test_order_by_elements_append_in_order() {
        let stmt = SelectBuilder::new()
            .item(column("a"))
            .order_by(column("a"), SortDirection::Asc)
            .order_by(column("b"), SortDirection::Desc)
            .build();
        let elements = &stmt.order_by.as_ref().unwrap().elements;
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].direction, SortDirection::Desc);
    }

    #[test]
    fn test_insert_builder_rows_accumulate() {
        let stmt = InsertBuilder::new("users")
            .columns(&["name", "age"])
            .row(vec![string("Alice"), integer(30)])
            .row(vec![string("Bob"), integer(25)])
            .build();
        assert_eq!(stmt.columns, vec!["name", "age"]);
        assert_eq!(stmt.values.as_ref().unwrap().rows.len(), 2);
        assert!(stmt.select.is_none());
    }

    #[test]
    fn test_builders_feed_statement_enum() {
        let stmt: Statement = DeleteBuilder::new("logs")
            .filter(binary(column("age_days"), BinaryOperator::GreaterThan, integer(90)))
            .build()
            .into();
        assert!(matches!(stmt, Statement::Delete(_)));
    }

    #[test]
    fn test_null_literal_builder() {
        match null() {
            Expression::Literal(lit) => {
                assert_eq!(lit.literal_type, LiteralType::Null);
            }
            _ => unreachable!(),
        }
    }
}
