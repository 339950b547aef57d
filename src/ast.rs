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

//! Syntax-tree node types for SQL statements
//!
//! This module defines the closed set of node variants that represent SQL
//! statements and expressions. The tree is purely syntactic: nodes hold a
//! faithful structural representation and nothing else — no schema
//! resolution, no type checking, no execution.
//!
//! Every composite node exclusively owns its children (strict tree, no
//! sharing, no cycles), and every node embeds its [`Position`] directly.
//! Construction is the only mutation surface; once a tree is handed to a
//! traversal it is read-only, which is what makes concurrent traversals
//! over the same tree safe without synchronization.

use crate::position::Position;
use std::fmt;

// ============================================================================
// Node kinds
// ============================================================================

/// The closed enumeration of node-variant names.
///
/// Used as the key space of the structural analyzer's counts and to name
/// the offending variant in traversal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SelectStatement,
    InsertStatement,
    UpdateStatement,
    DeleteStatement,
    CreateTableStatement,
    SelectItem,
    FromClause,
    TableReference,
    JoinExpression,
    WhereClause,
    GroupByClause,
    HavingClause,
    OrderByClause,
    OrderByElement,
    LimitClause,
    CommonTableExpression,
    ColumnReference,
    LiteralExpression,
    FunctionCall,
    BinaryExpression,
    BooleanExpression,
    CaseExpression,
    WhenClause,
    ValuesClause,
    SetClause,
    ColumnDefinition,
    CharacterType,
    NumericType,
    NotNullConstraint,
    PrimaryKeyConstraint,
    TableConstraint,
}

impl NodeKind {
    /// Variant name as it appears in analyzer output
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::SelectStatement => "SelectStatement",
            NodeKind::InsertStatement => "InsertStatement",
            NodeKind::UpdateStatement => "UpdateStatement",
            NodeKind::DeleteStatement => "DeleteStatement",
            NodeKind::CreateTableStatement => "CreateTableStatement",
            NodeKind::SelectItem => "SelectItem",
            NodeKind::FromClause => "FromClause",
            NodeKind::TableReference => "TableReference",
            NodeKind::JoinExpression => "JoinExpression",
            NodeKind::WhereClause => "WhereClause",
            NodeKind::GroupByClause => "GroupByClause",
            NodeKind::HavingClause => "HavingClause",
            NodeKind::OrderByClause => "OrderByClause",
            NodeKind::OrderByElement => "OrderByElement",
            NodeKind::LimitClause => "LimitClause",
            NodeKind::CommonTableExpression => "CommonTableExpression",
            NodeKind::ColumnReference => "ColumnReference",
            NodeKind::LiteralExpression => "LiteralExpression",
            NodeKind::FunctionCall => "FunctionCall",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::BooleanExpression => "BooleanExpression",
            NodeKind::CaseExpression => "CaseExpression",
            NodeKind::WhenClause => "WhenClause",
            NodeKind::ValuesClause => "ValuesClause",
            NodeKind::SetClause => "SetClause",
            NodeKind::ColumnDefinition => "ColumnDefinition",
            NodeKind::CharacterType => "CharacterType",
            NodeKind::NumericType => "NumericType",
            NodeKind::NotNullConstraint => "NotNullConstraint",
            NodeKind::PrimaryKeyConstraint => "PrimaryKeyConstraint",
            NodeKind::TableConstraint => "TableConstraint",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Statement enum representing the five statement variants
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateTable(CreateTableStatement),
}

impl Statement {
    /// Get the position of this statement
    pub fn position(&self) -> Position {
        match self {
            Statement::Select(s) => s.position,
            Statement::Insert(s) => s.position,
            Statement::Update(s) => s.position,
            Statement::Delete(s) => s.position,
            Statement::CreateTable(s) => s.position,
        }
    }

    /// Get the variant kind of this statement
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Select(_) => NodeKind::SelectStatement,
            Statement::Insert(_) => NodeKind::InsertStatement,
            Statement::Update(_) => NodeKind::UpdateStatement,
            Statement::Delete(_) => NodeKind::DeleteStatement,
            Statement::CreateTable(_) => NodeKind::CreateTableStatement,
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(s: SelectStatement) -> Self {
        Statement::Select(s)
    }
}

impl From<InsertStatement> for Statement {
    fn from(s: InsertStatement) -> Self {
        Statement::Insert(s)
    }
}

impl From<UpdateStatement> for Statement {
    fn from(s: UpdateStatement) -> Self {
        Statement::Update(s)
    }
}

impl From<DeleteStatement> for Statement {
    fn from(s: DeleteStatement) -> Self {
        Statement::Delete(s)
    }
}

impl From<CreateTableStatement> for Statement {
    fn from(s: CreateTableStatement) -> Self {
        Statement::CreateTable(s)
    }
}

/// SELECT statement
///
/// The select list is non-empty in a valid tree; the optional clauses are
/// either fully absent or own a well-formed sub-tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub position: Position,
    pub distinct: bool,
    /// CTEs attached to this query (possibly empty)
    pub ctes: Vec<CommonTableExpression>,
    pub select_list: Vec<SelectItem>,
    pub from: Option<FromClause>,
    pub where_clause: Option<WhereClause>,
    pub group_by: Option<GroupByClause>,
    pub having: Option<HavingClause>,
    pub order_by: Option<OrderByClause>,
    pub limit: Option<LimitClause>,
}

/// One item in a select list (expression with optional alias)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub position: Position,
    pub expression: Expression,
    pub alias: Option<String>,
}

/// FROM clause owning one table expression
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub position: Position,
    pub table: TableExpression,
}

/// WHERE clause owning the filter condition
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub position: Position,
    pub condition: Expression,
}

/// GROUP BY clause (non-empty grouping list in a valid tree)
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByClause {
    pub position: Position,
    pub grouping_expressions: Vec<Expression>,
}

/// HAVING clause owning the group filter condition
#[derive(Debug, Clone, PartialEq)]
pub struct HavingClause {
    pub position: Position,
    pub condition: Expression,
}

/// ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    pub position: Position,
    pub elements: Vec<OrderByElement>,
}

/// One ORDER BY element
///
/// The direction is never unset in the data model; default resolution to
/// ASC happens at construction, not at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub position: Position,
    pub expression: Expression,
    pub direction: SortDirection,
}

/// Sort direction for ORDER BY elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// LIMIT clause with optional OFFSET
#[derive(Debug, Clone, PartialEq)]
pub struct LimitClause {
    pub position: Position,
    pub row_count: Expression,
    pub offset: Option<Expression>,
}

/// Common Table Expression: a named, possibly recursive, sub-query
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    pub position: Position,
    pub name: String,
    /// Optional explicit column list (empty = none declared)
    pub column_list: Vec<String>,
    pub query: Box<SelectStatement>,
    pub recursive: bool,
}

/// INSERT statement
///
/// Exactly one of `values` or `select` is populated in a valid tree; the
/// renderer fails with a malformed-tree error when both or neither are.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub position: Position,
    pub table_name: String,
    /// Explicit column list (possibly empty)
    pub columns: Vec<String>,
    pub values: Option<ValuesClause>,
    pub select: Option<Box<SelectStatement>>,
}

/// VALUES clause: each inner sequence is one row
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesClause {
    pub position: Position,
    pub rows: Vec<Vec<Expression>>,
}

/// UPDATE statement (non-empty SET list in a valid tree)
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub position: Position,
    pub table_name: String,
    pub alias: Option<String>,
    pub set_clauses: Vec<SetClause>,
    pub where_clause: Option<WhereClause>,
}

/// One column assignment in an UPDATE
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub position: Position,
    pub column_name: String,
    pub value: Expression,
}

/// DELETE statement
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub position: Position,
    pub table_name: String,
    pub alias: Option<String>,
    pub where_clause: Option<WhereClause>,
}

/// CREATE TABLE statement (non-empty column list in a valid tree)
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub position: Position,
    pub table_name: String,
    pub columns: Vec<ColumnDefinition>,
    pub table_constraints: Vec<TableConstraint>,
}

/// Column definition in a CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub position: Position,
    pub column_name: String,
    pub data_type: DataType,
    /// Constraints in declaration order
    pub constraints: Vec<ColumnConstraint>,
}

// ============================================================================
// Data types
// ============================================================================

/// Data type of a column definition
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Character(CharacterType),
    Numeric(NumericType),
}

impl DataType {
    pub fn position(&self) -> Position {
        match self {
            DataType::Character(t) => t.position,
            DataType::Numeric(t) => t.position,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            DataType::Character(_) => NodeKind::CharacterType,
            DataType::Numeric(_) => NodeKind::NumericType,
        }
    }
}

/// Character data type with optional length
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterType {
    pub position: Position,
    pub subtype: CharacterSubtype,
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSubtype {
    Char,
    Varchar,
    Text,
}

impl CharacterSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterSubtype::Char => "CHAR",
            CharacterSubtype::Varchar => "VARCHAR",
            CharacterSubtype::Text => "TEXT",
        }
    }
}

impl fmt::Display for CharacterSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric data type with optional precision and scale
#[derive(Debug, Clone, PartialEq)]
pub struct NumericType {
    pub position: Position,
    pub subtype: NumericSubtype,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSubtype {
    Integer,
    Bigint,
    Smallint,
    Decimal,
    Numeric,
    Real,
    Float,
    Double,
}

impl NumericSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericSubtype::Integer => "INTEGER",
            NumericSubtype::Bigint => "BIGINT",
            NumericSubtype::Smallint => "SMALLINT",
            NumericSubtype::Decimal => "DECIMAL",
            NumericSubtype::Numeric => "NUMERIC",
            NumericSubtype::Real => "REAL",
            NumericSubtype::Float => "FLOAT",
            NumericSubtype::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for NumericSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Column-level constraint
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraint {
    NotNull(NotNullConstraint),
    PrimaryKey(PrimaryKeyConstraint),
}

impl ColumnConstraint {
    pub fn kind(&self) -> NodeKind {
        match self {
            ColumnConstraint::NotNull(_) => NodeKind::NotNullConstraint,
            ColumnConstraint::PrimaryKey(_) => NodeKind::PrimaryKeyConstraint,
        }
    }
}

/// NOT NULL constraint with optional constraint name
#[derive(Debug, Clone, PartialEq)]
pub struct NotNullConstraint {
    pub position: Position,
    pub name: Option<String>,
}

/// PRIMARY KEY constraint with optional constraint name
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKeyConstraint {
    pub position: Position,
    pub name: Option<String>,
}

/// Table-level constraint placeholder
///
/// Named constraint with no concrete subtype modeled. The renderer emits it
/// as a line comment naming the kind (documented debt, never silently
/// dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    pub position: Position,
    /// Constraint kind, e.g. "ForeignKeyConstraint"
    pub kind: String,
    pub name: Option<String>,
}

// ============================================================================
// Table expressions
// ============================================================================

/// Table expression in a FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum TableExpression {
    Reference(TableReference),
    /// Boxed: joins nest arbitrarily deep on either side
    Join(Box<JoinExpression>),
}

impl TableExpression {
    pub fn position(&self) -> Position {
        match self {
            TableExpression::Reference(t) => t.position,
            TableExpression::Join(j) => j.position,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TableExpression::Reference(_) => NodeKind::TableReference,
            TableExpression::Join(_) => NodeKind::JoinExpression,
        }
    }
}

/// Plain table reference with optional alias
#[derive(Debug, Clone, PartialEq)]
pub struct TableReference {
    pub position: Position,
    pub table_name: String,
    pub alias: Option<String>,
}

/// Join of two table expressions with a join condition
#[derive(Debug, Clone, PartialEq)]
pub struct JoinExpression {
    pub position: Position,
    pub join_type: JoinType,
    pub left: TableExpression,
    pub right: TableExpression,
    pub condition: Expression,
}

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
            JoinType::Cross => "CROSS",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Expression enum representing all expression variants
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Column(ColumnReference),
    Literal(LiteralExpression),
    Function(FunctionCall),
    Binary(Box<BinaryExpression>),
    /// Wrapper around a condition, semantically transparent
    Boolean(Box<BooleanExpression>),
    Case(Box<CaseExpression>),
}

impl Expression {
    /// Get the position of this expression
    pub fn position(&self) -> Position {
        match self {
            Expression::Column(e) => e.position,
            Expression::Literal(e) => e.position,
            Expression::Function(e) => e.position,
            Expression::Binary(e) => e.position,
            Expression::Boolean(e) => e.position,
            Expression::Case(e) => e.position,
        }
    }

    /// Get the variant kind of this expression
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Column(_) => NodeKind::ColumnReference,
            Expression::Literal(_) => NodeKind::LiteralExpression,
            Expression::Function(_) => NodeKind::FunctionCall,
            Expression::Binary(_) => NodeKind::BinaryExpression,
            Expression::Boolean(_) => NodeKind::BooleanExpression,
            Expression::Case(_) => NodeKind::CaseExpression,
        }
    }
}

/// Column reference, optionally qualified by a table name
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReference {
    pub position: Position,
    pub table_name: Option<String>,
    pub column_name: String,
}

/// Literal expression
///
/// The value is stored as raw text; the type tag governs rendering. A
/// NULL-typed literal renders as `NULL` regardless of the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpression {
    pub position: Position,
    pub literal_type: LiteralType,
    pub value: String,
}

/// Literal type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    String,
    Integer,
    Decimal,
    Boolean,
    Null,
    Date,
}

/// Function call with optional DISTINCT set quantifier
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub position: Position,
    pub function_name: String,
    pub arguments: Vec<Expression>,
    pub distinct: bool,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub position: Position,
    pub left: Expression,
    pub operator: BinaryOperator,
    pub right: Expression,
}

/// Binary operator, rendered through [`BinaryOperator::symbol`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    And,
    Or,
    Like,
    In,
    Exists,
}

impl BinaryOperator {
    /// SQL symbol or keyword for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equals => "=",
            BinaryOperator::NotEquals => "<>",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::In => "IN",
            BinaryOperator::Exists => "EXISTS",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Boolean wrapper expression, delegates to its condition
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpression {
    pub position: Position,
    pub condition: Expression,
}

/// CASE expression (simple when an operand is present, searched otherwise)
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    pub position: Position,
    pub operand: Option<Expression>,
    pub when_clauses: Vec<WhenClause>,
    pub else_expression: Option<Expression>,
}

impl CaseExpression {
    /// A searched CASE has no operand
    pub fn is_searched(&self) -> bool {
        self.operand.is_none()
    }
}

/// WHEN/THEN arm of a CASE expression
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    pub position: Position,
    pub condition: Expression,
    pub result: Expression,
}
