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

//! # sqltree
//!
//! A typed syntax tree for SQL statements (SELECT, INSERT, UPDATE, DELETE,
//! CREATE TABLE) with two traversal-based consumers: a canonical-text
//! renderer and a structural statistics collector.
//!
//! The crate does not lex or parse SQL text. Trees are constructed
//! programmatically, most conveniently through the [`builder`] module, and
//! handed to traversals as immutable values.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqltree::builder::{binary, column, integer, table, SelectBuilder};
//! use sqltree::{analyze, render, BinaryOperator, NodeKind, SortDirection, Statement};
//!
//! let stmt: Statement = SelectBuilder::new()
//!     .item(column("name"))
//!     .item(column("age"))
//!     .from(table("users"))
//!     .filter(binary(column("age"), BinaryOperator::GreaterThan, integer(18)))
//!     .order_by(column("name"), SortDirection::Asc)
//!     .build()
//!     .into();
//!
//! let sql = render(&stmt).unwrap();
//! assert_eq!(sql, "SELECT name, age\nFROM users\nWHERE age > 18\nORDER BY name ASC");
//!
//! let counts = analyze(&stmt).unwrap();
//! assert_eq!(counts[&NodeKind::ColumnReference], 4);
//! ```
//!
//! ## Modules
//!
//! - [`ast`] - The node model ([`Statement`], [`Expression`], [`NodeKind`])
//! - [`visit`] - The traversal protocol ([`Visitor`] and `accept` dispatch)
//! - [`render`] - Canonical SQL text rendering
//! - [`analyze`] - Per-kind node counting
//! - [`builder`] - Programmatic tree construction
//! - [`error`] - Traversal failures ([`Error`], [`Result`])
//!
//! ## Custom traversals
//!
//! Implement [`Visitor`] and override the `visit_*` handlers your consumer
//! understands. Unhandled variants fail with `Error::UnsupportedNodeKind`
//! instead of producing a silent default, so incomplete coverage surfaces
//! at the call site.

pub mod analyze;
pub mod ast;
pub mod builder;
pub mod error;
pub mod position;
pub mod render;
pub mod visit;

pub use analyze::{analyze, Analyzer};
pub use ast::{
    BinaryExpression, BinaryOperator, BooleanExpression, CaseExpression, CharacterSubtype,
    CharacterType, ColumnConstraint, ColumnDefinition, ColumnReference, CommonTableExpression,
    CreateTableStatement, DataType, DeleteStatement, Expression, FromClause, FunctionCall,
    GroupByClause, HavingClause, InsertStatement, JoinExpression, JoinType, LimitClause,
    LiteralExpression, LiteralType, NodeKind, NotNullConstraint, NumericSubtype, NumericType,
    OrderByClause, OrderByElement, PrimaryKeyConstraint, SelectItem, SelectStatement, SetClause,
    SortDirection, Statement, TableConstraint, TableExpression, TableReference, UpdateStatement,
    ValuesClause, WhenClause, WhereClause,
};
pub use error::{Error, Result};
pub use position::Position;
pub use render::{render, Renderer};
pub use visit::Visitor;
