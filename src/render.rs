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

//! Canonical SQL text rendering
//!
//! [`Renderer`] folds a statement tree into formatted SQL text with a fixed
//! clause order and two-space indentation per nesting level. The output is
//! canonical: two structurally equal trees render to identical text.
//!
//! Rendering is fallible. Structural invariants the renderer must branch on
//! (an INSERT with neither VALUES nor SELECT, an empty select list) fail
//! with [`Error::MalformedTree`](crate::error::Error) instead of emitting
//! invalid SQL.

use crate::ast::{
    BinaryExpression, BooleanExpression, CaseExpression, ColumnConstraint, ColumnReference,
    CreateTableStatement, DataType, DeleteStatement, FunctionCall, InsertStatement, JoinExpression,
    LiteralExpression, LiteralType, NodeKind, SelectStatement, Statement, TableReference,
    UpdateStatement, WhereClause,
};
use crate::error::{Error, Result};
use crate::visit::Visitor;

/// Two spaces per nesting level
const INDENT: &str = "  ";

/// Renders a statement tree as canonical SQL text
///
/// The indentation level is the only state carried across recursive calls.
/// A `Renderer` is cheap to construct; build a fresh one per statement or
/// reuse one — the level always returns to its starting value, even when a
/// nested render fails.
#[derive(Debug, Default)]
pub struct Renderer {
    indent: usize,
}

impl Renderer {
    /// Create a renderer with zero indentation
    pub fn new() -> Self {
        Self { indent: 0 }
    }

    /// Render a statement to SQL text
    pub fn render(&mut self, stmt: &Statement) -> Result<String> {
        stmt.accept(self)
    }

    fn pad(&self) -> String {
        INDENT.repeat(self.indent)
    }

    /// Run `f` one indentation level deeper, restoring the level on the way
    /// out whether `f` succeeds or fails.
    fn with_indent<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.indent += 1;
        let result = f(self);
        self.indent -= 1;
        result
    }

    fn render_where(&mut self, clause: &WhereClause) -> Result<String> {
        clause.condition.accept(self)
    }

    fn render_data_type(&self, data_type: &DataType) -> String {
        match data_type {
            DataType::Character(t) => match t.length {
                Some(len) => format!("{}({})", t.subtype, len),
                None => t.subtype.to_string(),
            },
            DataType::Numeric(t) => match (t.precision, t.scale) {
                (Some(p), Some(s)) => format!("{}({},{})", t.subtype, p, s),
                (Some(p), None) => format!("{}({})", t.subtype, p),
                _ => t.subtype.to_string(),
            },
        }
    }

    fn render_column_constraint(&self, constraint: &ColumnConstraint) -> String {
        let (name, keyword) = match constraint {
            ColumnConstraint::NotNull(c) => (&c.name, "NOT NULL"),
            ColumnConstraint::PrimaryKey(c) => (&c.name, "PRIMARY KEY"),
        };
        match name {
            Some(n) => format!("CONSTRAINT {} {}", n, keyword),
            None => keyword.to_string(),
        }
    }
}

impl Visitor for Renderer {
    type Output = String;

    fn visit_select(&mut self, stmt: &SelectStatement) -> Result<String> {
        if stmt.select_list.is_empty() {
            return Err(Error::malformed(
                NodeKind::SelectStatement,
                stmt.position,
                "empty select list",
            ));
        }

        let mut sql = String::new();

        if !stmt.ctes.is_empty() {
            sql.push_str("WITH ");
            if stmt.ctes.iter().any(|cte| cte.recursive) {
                sql.push_str("RECURSIVE ");
            }
            for (i, cte) in stmt.ctes.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&cte.name);
                if !cte.column_list.is_empty() {
                    sql.push_str(" (");
                    sql.push_str(&cte.column_list.join(", "));
                    sql.push(')');
                }
                sql.push_str(" AS (");
                let body = self.with_indent(|r| {
                    let rendered = r.visit_select(&cte.query)?;
                    Ok(format!("\n{}{}", r.pad(), rendered))
                })?;
                sql.push_str(&body);
                sql.push('\n');
                sql.push_str(&self.pad());
                sql.push(')');
            }
            sql.push('\n');
            sql.push_str(&self.pad());
        }

        sql.push_str("SELECT ");
        if stmt.distinct {
            sql.push_str("DISTINCT ");
        }
        for (i, item) in stmt.select_list.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&item.expression.accept(self)?);
            if let Some(alias) = &item.alias {
                sql.push_str(" AS ");
                sql.push_str(alias);
            }
        }

        if let Some(from) = &stmt.from {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("FROM ");
            sql.push_str(&from.table.accept(self)?);
        }

        if let Some(where_clause) = &stmt.where_clause {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("WHERE ");
            sql.push_str(&self.render_where(where_clause)?);
        }

        if let Some(group_by) = &stmt.group_by {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("GROUP BY ");
            for (i, expr) in group_by.grouping_expressions.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&expr.accept(self)?);
            }
        }

        if let Some(having) = &stmt.having {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("HAVING ");
            sql.push_str(&having.condition.accept(self)?);
        }

        if let Some(order_by) = &stmt.order_by {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("ORDER BY ");
            for (i, element) in order_by.elements.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&element.expression.accept(self)?);
                sql.push(' ');
                sql.push_str(element.direction.as_str());
            }
        }

        if let Some(limit) = &stmt.limit {
            sql.push('\n');
            sql.push_str(&self.pad());
            sql.push_str("LIMIT ");
            sql.push_str(&limit.row_count.accept(self)?);
            if let Some(offset) = &limit.offset {
                sql.push_str(" OFFSET ");
                sql.push_str(&offset.accept(self)?);
            }
        }

        Ok(sql)
    }

    fn visit_insert(&mut self, stmt: &InsertStatement) -> Result<String> {
        let mut sql = String::new();
        sql.push_str("INSERT INTO ");
        sql.push_str(&stmt.table_name);

        if !stmt.columns.is_empty() {
            sql.push_str(" (");
            sql.push_str(&stmt.columns.join(", "));
            sql.push(')');
        }

        match (&stmt.values, &stmt.select) {
            (Some(values), None) => {
                if values.rows.is_empty() {
                    return Err(Error::malformed(
                        NodeKind::ValuesClause,
                        values.position,
                        "VALUES clause with no rows",
                    ));
                }
                sql.push_str(" VALUES ");
                for (i, row) in values.rows.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push('(');
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            sql.push_str(", ");
                        }
                        sql.push_str(&value.accept(self)?);
                    }
                    sql.push(')');
                }
            }
            (None, Some(select)) => {
                sql.push('\n');
                sql.push_str(&self.visit_select(select)?);
            }
            (Some(_), Some(_)) => {
                return Err(Error::malformed(
                    NodeKind::InsertStatement,
                    stmt.position,
                    "both VALUES and SELECT populated",
                ));
            }
            (None, None) => {
                return Err(Error::malformed(
                    NodeKind::InsertStatement,
                    stmt.position,
                    "neither VALUES nor SELECT populated",
                ));
            }
        }

        Ok(sql)
    }

    fn visit_update(&mut self, stmt: &UpdateStatement) -> Result<String> {
        if stmt.set_clauses.is_empty() {
            return Err(Error::malformed(
                NodeKind::UpdateStatement,
                stmt.position,
                "empty SET clause list",
            ));
        }

        let mut sql = String::new();
        sql.push_str("UPDATE ");
        sql.push_str(&stmt.table_name);
        if let Some(alias) = &stmt.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }

        sql.push_str(" SET ");
        for (i, set_clause) in stmt.set_clauses.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&set_clause.column_name);
            sql.push_str(" = ");
            sql.push_str(&set_clause.value.accept(self)?);
        }

        if let Some(where_clause) = &stmt.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(&self.render_where(where_clause)?);
        }

        Ok(sql)
    }

    fn visit_delete(&mut self, stmt: &DeleteStatement) -> Result<String> {
        let mut sql = String::new();
        sql.push_str("DELETE FROM ");
        sql.push_str(&stmt.table_name);
        if let Some(alias) = &stmt.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }
        if let Some(where_clause) = &stmt.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(&self.render_where(where_clause)?);
        }
        Ok(sql)
    }

    fn visit_create_table(&mut self, stmt: &CreateTableStatement) -> Result<String> {
        if stmt.columns.is_empty() {
            return Err(Error::malformed(
                NodeKind::CreateTableStatement,
                stmt.position,
                "empty column list",
            ));
        }

        let mut sql = String::new();
        sql.push_str("CREATE TABLE ");
        sql.push_str(&stmt.table_name);
        sql.push_str(" (\n");

        let body = self.with_indent(|r| {
            let mut body = String::new();
            for (i, column) in stmt.columns.iter().enumerate() {
                if i > 0 {
                    body.push_str(",\n");
                }
                body.push_str(&r.pad());
                body.push_str(&column.column_name);
                body.push(' ');
                body.push_str(&r.render_data_type(&column.data_type));
                for constraint in &column.constraints {
                    body.push(' ');
                    body.push_str(&r.render_column_constraint(constraint));
                }
            }
            // Unmodeled table constraints become comments, never dropped.
            for constraint in &stmt.table_constraints {
                body.push_str(",\n");
                body.push_str(&r.pad());
                body.push_str("-- Table constraint: ");
                body.push_str(&constraint.kind);
            }
            Ok(body)
        })?;
        sql.push_str(&body);

        sql.push('\n');
        sql.push_str(&self.pad());
        sql.push(')');

        Ok(sql)
    }

    fn visit_column_reference(&mut self, expr: &ColumnReference) -> Result<String> {
        Ok(match &expr.table_name {
            Some(table) => format!("{}.{}", table, expr.column_name),
            None => expr.column_name.clone(),
        })
    }

    fn visit_literal(&mut self, expr: &LiteralExpression) -> Result<String> {
        Ok(match expr.literal_type {
            LiteralType::String => format!("'{}'", expr.value.replace('\'', "''")),
            LiteralType::Integer | LiteralType::Decimal => expr.value.clone(),
            LiteralType::Boolean => expr.value.to_uppercase(),
            LiteralType::Null => "NULL".to_string(),
            LiteralType::Date => format!("'{}'", expr.value),
        })
    }

    fn visit_function_call(&mut self, expr: &FunctionCall) -> Result<String> {
        let mut sql = String::new();
        sql.push_str(&expr.function_name);
        sql.push('(');
        if expr.distinct {
            sql.push_str("DISTINCT ");
        }
        for (i, arg) in expr.arguments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&arg.accept(self)?);
        }
        sql.push(')');
        Ok(sql)
    }

    fn visit_binary(&mut self, expr: &BinaryExpression) -> Result<String> {
        Ok(format!(
            "{} {} {}",
            expr.left.accept(self)?,
            expr.operator.symbol(),
            expr.right.accept(self)?
        ))
    }

    fn visit_boolean(&mut self, expr: &BooleanExpression) -> Result<String> {
        expr.condition.accept(self)
    }

    fn visit_case(&mut self, expr: &CaseExpression) -> Result<String> {
        let mut sql = String::new();
        sql.push_str("CASE");
        if let Some(operand) = &expr.operand {
            sql.push(' ');
            sql.push_str(&operand.accept(self)?);
        }
        for when in &expr.when_clauses {
            sql.push_str(" WHEN ");
            sql.push_str(&when.condition.accept(self)?);
            sql.push_str(" THEN ");
            sql.push_str(&when.result.accept(self)?);
        }
        if let Some(else_expr) = &expr.else_expression {
            sql.push_str(" ELSE ");
            sql.push_str(&else_expr.accept(self)?);
        }
        sql.push_str(" END");
        Ok(sql)
    }

    fn visit_table_reference(&mut self, table: &TableReference) -> Result<String> {
        Ok(match &table.alias {
            Some(alias) => format!("{} AS {}", table.table_name, alias),
            None => table.table_name.clone(),
        })
    }

    fn visit_join(&mut self, join: &JoinExpression) -> Result<String> {
        Ok(format!(
            "{} {} JOIN {} ON {}",
            join.left.accept(self)?,
            join.join_type,
            join.right.accept(self)?,
            join.condition.accept(self)?
        ))
    }
}

/// Render a statement to canonical SQL text
pub fn render(stmt: &Statement) -> Result<String> {
    Renderer::new().render(stmt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        BinaryOperator, CharacterSubtype, CharacterType, ColumnDefinition, Expression,
        NotNullConstraint, NumericSubtype, NumericType, PrimaryKeyConstraint,
    };
    use crate::position::Position;

    fn column(name: &str) -> Expression {
        Expression::Column(ColumnReference {
            position: Position::default(),
            table_name: None,
            column_name: name.to_string(),
        })
    }

    fn integer(value: &str) -> Expression {
        Expression::Literal(LiteralExpression {
            position: Position::default(),
            literal_type: LiteralType::Integer,
            value: value.to_string(),
        })
    }

    #[test]
    fn test_string_literal_quote_doubling() {
        let mut renderer = Renderer::new();
        let expr = LiteralExpression {
            position: Position::default(),
            literal_type: LiteralType::String,
            value: "O'Brien".to_string(),
        };
        assert_eq!(renderer.visit_literal(&expr).unwrap(), "'O''Brien'");
    }

    #[test]
    fn test_boolean_literal_uppercased() {
        let mut renderer = Renderer::new();
        let expr = LiteralExpression {
            position: Position::default(),
            literal_type: LiteralType::Boolean,
            value: "true".to_string(),
        };
        assert_eq!(renderer.visit_literal(&expr).unwrap(), "TRUE");
    }

    #[test]
    fn test_null_literal_ignores_stored_value() {
        let mut renderer = Renderer::new();
        let expr = LiteralExpression {
            position: Position::default(),
            literal_type: LiteralType::Null,
            value: "whatever".to_string(),
        };
        assert_eq!(renderer.visit_literal(&expr).unwrap(), "NULL");
    }

    #[test]
    fn test_binary_expression_symbols() {
        let mut renderer = Renderer::new();
        let expr = BinaryExpression {
            position: Position::default(),
            left: column("age"),
            operator: BinaryOperator::GreaterThanOrEqual,
            right: integer("18"),
        };
        assert_eq!(renderer.visit_binary(&expr).unwrap(), "age >= 18");
    }

    #[test]
    fn test_function_call_distinct() {
        let mut renderer = Renderer::new();
        let expr = FunctionCall {
            position: Position::default(),
            function_name: "COUNT".to_string(),
            arguments: vec![column("id")],
            distinct: true,
        };
        assert_eq!(
            renderer.visit_function_call(&expr).unwrap(),
            "COUNT(DISTINCT id)"
        );
    }

    #[test]
    fn test_searched_case() {
        let mut renderer = Renderer::new();
        let expr = CaseExpression {
            position: Position::default(),
            operand: None,
            when_clauses: vec![crate::ast::WhenClause {
                position: Position::default(),
                condition: Expression::Binary(Box::new(BinaryExpression {
                    position: Position::default(),
                    left: column("age"),
                    operator: BinaryOperator::LessThan,
                    right: integer("18"),
                })),
                result: Expression::Literal(LiteralExpression {
                    position: Position::default(),
                    literal_type: LiteralType::String,
                    value: "minor".to_string(),
                }),
            }],
            else_expression: Some(Expression::Literal(LiteralExpression {
                position: Position::default(),
                literal_type: LiteralType::String,
                value: "adult".to_string(),
            })),
        };
        assert_eq!(
            renderer.visit_case(&expr).unwrap(),
            "CASE WHEN age < 18 THEN 'minor' ELSE 'adult' END"
        );
    }

    #[test]
    fn test_data_type_formats() {
        let renderer = Renderer::new();
        let varchar = DataType::Character(CharacterType {
            position: Position::default(),
            subtype: CharacterSubtype::Varchar,
            length: Some(100),
        });
        assert_eq!(renderer.render_data_type(&varchar), "VARCHAR(100)");

        let text = DataType::Character(CharacterType {
            position: Position::default(),
            subtype: CharacterSubtype::Text,
            length: None,
        });
        assert_eq!(renderer.render_data_type(&text), "TEXT");

        let decimal = DataType::Numeric(NumericType {
            position: Position::default(),
            subtype: NumericSubtype::Decimal,
            precision: Some(10),
            scale: Some(2),
        });
        assert_eq!(renderer.render_data_type(&decimal), "DECIMAL(10,2)");

        let integer = DataType::Numeric(NumericType {
            position: Position::default(),
            subtype: NumericSubtype::Integer,
            precision: None,
            scale: None,
        });
        assert_eq!(renderer.render_data_type(&integer), "INTEGER");
    }

    #[test]
    fn test_named_constraint_prefix() {
        let renderer = Renderer::new();
        let named = ColumnConstraint::PrimaryKey(PrimaryKeyConstraint {
            position: Position::default(),
            name: Some("pk_users".to_string()),
        });
        assert_eq!(
            renderer.render_column_constraint(&named),
            "CONSTRAINT pk_users PRIMARY KEY"
        );

        let bare = ColumnConstraint::NotNull(NotNullConstraint {
            position: Position::default(),
            name: None,
        });
        assert_eq!(renderer.render_column_constraint(&bare), "NOT NULL");
    }

    #[test]
    fn test_indent_restored_after_failed_nested_render() {
        let mut renderer = Renderer::new();
        let stmt = CreateTableStatement {
            position: Position::default(),
            table_name: "t".to_string(),
            columns: vec![],
            table_constraints: vec![],
        };
        assert!(renderer.visit_create_table(&stmt).is_err());
        assert_eq!(renderer.indent, 0);

        // A CTE whose body has an empty select list fails mid-nesting.
        let bad_cte = SelectStatement {
            position: Position::default(),
            distinct: false,
            ctes: vec![crate::ast::CommonTableExpression {
                position: Position::default(),
                name: "empty".to_string(),
                column_list: vec![],
                query: Box::new(SelectStatement {
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
                }),
                recursive: false,
            }],
            select_list: vec![crate::ast::SelectItem {
                position: Position::default(),
                expression: column("x"),
                alias: None,
            }],
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
        };
        assert!(renderer.visit_select(&bad_cte).is_err());
        assert_eq!(renderer.indent, 0);
    }

    #[test]
    fn test_column_definition_in_create_table() {
        let stmt = Statement::CreateTable(CreateTableStatement {
            position: Position::default(),
            table_name: "users".to_string(),
            columns: vec![ColumnDefinition {
                position: Position::default(),
                column_name: "id".to_string(),
                data_type: DataType::Numeric(NumericType {
                    position: Position::default(),
                    subtype: NumericSubtype::Integer,
                    precision: None,
                    scale: None,
                }),
                constraints: vec![
                    ColumnConstraint::NotNull(NotNullConstraint {
                        position: Position::default(),
                        name: None,
                    }),
                    ColumnConstraint::PrimaryKey(PrimaryKeyConstraint {
                        position: Position::default(),
                        name: None,
                    }),
                ],
            }],
            table_constraints: vec![],
        });
        assert_eq!(
            render(&stmt).unwrap(),
            "CREATE TABLE users (\n  id INTEGER NOT NULL PRIMARY KEY\n)"
        );
    }
}
