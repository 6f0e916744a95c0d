//! Phantom-typed expression wrappers.
//!
//! [`TypedExpr<T>`] carries a logical result type with no runtime
//! representation. The type parameter is consulted only at construction time:
//! combinator bounds reject ill-typed compositions (a numeric operator over a
//! text column, a comparison between mismatched columns) before any tree
//! exists. Interpreters work on the untyped [`Expr`] underneath.

use std::marker::PhantomData;

use crate::error::ExprError;
use crate::expr::node::Expr;
use crate::expr::operator::{BinaryOp, NaryOp};
use crate::schema::Column;
use crate::statement::select::SelectStatement;
use crate::value::{DataType, Value};

/// Marker for the temporal logical type (milliseconds since the Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp;

/// Logical types an expression may carry
pub trait SqlType {
    fn data_type() -> DataType;
}

/// Logical types with a defined SQL ordering
pub trait SqlOrd: SqlType {}

/// Logical types usable with arithmetic operators
pub trait SqlNum: SqlOrd {}

impl SqlType for bool {
    fn data_type() -> DataType {
        DataType::Boolean
    }
}
impl SqlType for i64 {
    fn data_type() -> DataType {
        DataType::Integer
    }
}
impl SqlType for f64 {
    fn data_type() -> DataType {
        DataType::Real
    }
}
impl SqlType for String {
    fn data_type() -> DataType {
        DataType::Text
    }
}
impl SqlType for Timestamp {
    fn data_type() -> DataType {
        DataType::Timestamp
    }
}

impl SqlOrd for i64 {}
impl SqlOrd for f64 {}
impl SqlOrd for String {}
impl SqlOrd for Timestamp {}

impl SqlNum for i64 {}
impl SqlNum for f64 {}

/// An expression whose logical result type is `T`
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr<T> {
    node: Expr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedExpr<T> {
    pub(crate) fn from_node(node: Expr) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    /// Borrow the untyped tree underneath
    pub fn node(&self) -> &Expr {
        &self.node
    }

    /// Discard the phantom type and take the untyped tree
    pub fn into_node(self) -> Expr {
        self.node
    }
}

impl<T> From<Column<T>> for TypedExpr<T> {
    fn from(col: Column<T>) -> Self {
        TypedExpr::from_node(Expr::Column(col.column_ref()))
    }
}

impl<T: SqlType> Column<T> {
    /// Lift this column constant into an expression
    pub fn expr(self) -> TypedExpr<T> {
        TypedExpr::from(self)
    }
}

/// Rust values that become bound literals of logical type `Logical`
pub trait IntoLiteral {
    type Logical: SqlType;
    fn into_value(self) -> Value;
}

impl IntoLiteral for bool {
    type Logical = bool;
    fn into_value(self) -> Value {
        Value::Boolean(self)
    }
}
impl IntoLiteral for i32 {
    type Logical = i64;
    fn into_value(self) -> Value {
        Value::Integer(self as i64)
    }
}
impl IntoLiteral for i64 {
    type Logical = i64;
    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}
impl IntoLiteral for f64 {
    type Logical = f64;
    fn into_value(self) -> Value {
        Value::Real(self)
    }
}
impl IntoLiteral for &str {
    type Logical = String;
    fn into_value(self) -> Value {
        Value::Text(self.to_string())
    }
}
impl IntoLiteral for String {
    type Logical = String;
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

/// Create a bound literal. NULL is not constructible here; absence is modeled
/// by [`TypedExpr::is_null`].
pub fn lit<V: IntoLiteral>(value: V) -> TypedExpr<V::Logical> {
    TypedExpr::from_node(Expr::Literal(value.into_value()))
}

/// Create a temporal literal from epoch milliseconds
pub fn timestamp(epoch_ms: i64) -> TypedExpr<Timestamp> {
    TypedExpr::from_node(Expr::Literal(Value::Timestamp(epoch_ms)))
}

fn binary<T, U>(op: BinaryOp, left: TypedExpr<T>, right: TypedExpr<T>) -> TypedExpr<U> {
    TypedExpr::from_node(Expr::Binary {
        op,
        left: Box::new(left.into_node()),
        right: Box::new(right.into_node()),
    })
}

/// Append to an existing n-ary node of the same operator instead of nesting;
/// `a.and(b).and(c)` builds one three-operand AND.
fn nary_append(op: NaryOp, left: Expr, right: Expr) -> Expr {
    match left {
        Expr::Nary {
            op: existing,
            mut operands,
        } if existing == op => {
            operands.push(right);
            Expr::Nary { op, operands }
        }
        other => Expr::Nary {
            op,
            operands: vec![other, right],
        },
    }
}

impl<T: SqlType> TypedExpr<T> {
    pub fn eq(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Eq, self, other.into())
    }

    pub fn ne(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Ne, self, other.into())
    }

    pub fn is_null(self) -> TypedExpr<bool> {
        TypedExpr::from_node(Expr::IsNull {
            operand: Box::new(self.into_node()),
            negated: false,
        })
    }

    pub fn is_not_null(self) -> TypedExpr<bool> {
        TypedExpr::from_node(Expr::IsNull {
            operand: Box::new(self.into_node()),
            negated: true,
        })
    }

    /// Set membership. The list must be non-empty.
    pub fn in_list(
        self,
        list: Vec<TypedExpr<T>>,
    ) -> Result<TypedExpr<bool>, ExprError> {
        self.membership(list, false)
    }

    pub fn not_in_list(
        self,
        list: Vec<TypedExpr<T>>,
    ) -> Result<TypedExpr<bool>, ExprError> {
        self.membership(list, true)
    }

    fn membership(
        self,
        list: Vec<TypedExpr<T>>,
        negated: bool,
    ) -> Result<TypedExpr<bool>, ExprError> {
        if list.is_empty() {
            return Err(ExprError::EmptyInList);
        }
        Ok(TypedExpr::from_node(Expr::In {
            needle: Box::new(self.into_node()),
            list: list.into_iter().map(TypedExpr::into_node).collect(),
            negated,
        }))
    }
}

impl<T: SqlOrd> TypedExpr<T> {
    pub fn lt(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Lt, self, other.into())
    }

    pub fn le(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Le, self, other.into())
    }

    pub fn gt(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Gt, self, other.into())
    }

    pub fn ge(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<bool> {
        binary(BinaryOp::Ge, self, other.into())
    }
}

impl<T: SqlNum> TypedExpr<T> {
    pub fn add(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<T> {
        TypedExpr::from_node(nary_append(
            NaryOp::Add,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn sub(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<T> {
        TypedExpr::from_node(nary_append(
            NaryOp::Sub,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn mul(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<T> {
        TypedExpr::from_node(nary_append(
            NaryOp::Mul,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn div(self, other: impl Into<TypedExpr<T>>) -> TypedExpr<T> {
        TypedExpr::from_node(nary_append(
            NaryOp::Div,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    /// Unary minus, expressed as a zero-seeded subtraction
    pub fn neg(self) -> TypedExpr<T> {
        TypedExpr::from_node(Expr::Nary {
            op: NaryOp::Sub,
            operands: vec![Expr::Literal(Value::Integer(0)), self.into_node()],
        })
    }
}

// Bitwise operators are integral-only.
impl TypedExpr<i64> {
    pub fn bit_and(self, other: impl Into<TypedExpr<i64>>) -> TypedExpr<i64> {
        TypedExpr::from_node(nary_append(
            NaryOp::BitAnd,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn bit_or(self, other: impl Into<TypedExpr<i64>>) -> TypedExpr<i64> {
        TypedExpr::from_node(nary_append(
            NaryOp::BitOr,
            self.into_node(),
            other.into().into_node(),
        ))
    }
}

impl TypedExpr<String> {
    pub fn like(self, pattern: impl Into<TypedExpr<String>>) -> TypedExpr<bool> {
        binary(BinaryOp::Like, self, pattern.into())
    }

    pub fn not_like(self, pattern: impl Into<TypedExpr<String>>) -> TypedExpr<bool> {
        binary(BinaryOp::NotLike, self, pattern.into())
    }
}

impl TypedExpr<bool> {
    pub fn and(self, other: impl Into<TypedExpr<bool>>) -> TypedExpr<bool> {
        TypedExpr::from_node(nary_append(
            NaryOp::And,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn or(self, other: impl Into<TypedExpr<bool>>) -> TypedExpr<bool> {
        TypedExpr::from_node(nary_append(
            NaryOp::Or,
            self.into_node(),
            other.into().into_node(),
        ))
    }

    pub fn not(self) -> TypedExpr<bool> {
        TypedExpr::from_node(Expr::Not(Box::new(self.into_node())))
    }
}

/// Conjunction over a non-empty predicate list
pub fn and_all(predicates: Vec<TypedExpr<bool>>) -> Result<TypedExpr<bool>, ExprError> {
    connective(NaryOp::And, predicates, "and")
}

/// Disjunction over a non-empty predicate list
pub fn or_all(predicates: Vec<TypedExpr<bool>>) -> Result<TypedExpr<bool>, ExprError> {
    connective(NaryOp::Or, predicates, "or")
}

fn connective(
    op: NaryOp,
    predicates: Vec<TypedExpr<bool>>,
    context: &'static str,
) -> Result<TypedExpr<bool>, ExprError> {
    if predicates.is_empty() {
        return Err(ExprError::EmptyOperandList { context });
    }
    Ok(TypedExpr::from_node(Expr::Nary {
        op,
        operands: predicates.into_iter().map(TypedExpr::into_node).collect(),
    }))
}

/// Sub-select existence test
pub fn exists(select: SelectStatement) -> TypedExpr<bool> {
    TypedExpr::from_node(Expr::Exists(Box::new(select)))
}

/// Entry point for a searched CASE; the first branch makes emptiness
/// unrepresentable.
pub fn case_when<T: SqlType>(
    condition: TypedExpr<bool>,
    result: TypedExpr<T>,
) -> CaseBuilder<T> {
    CaseBuilder {
        branches: vec![(condition.into_node(), result.into_node())],
        _marker: PhantomData,
    }
}

/// Accumulates CASE branches; finished by [`CaseBuilder::otherwise`] or
/// [`CaseBuilder::end`].
#[derive(Debug, Clone)]
pub struct CaseBuilder<T> {
    branches: Vec<(Expr, Expr)>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: SqlType> CaseBuilder<T> {
    pub fn when(mut self, condition: TypedExpr<bool>, result: TypedExpr<T>) -> Self {
        self.branches.push((condition.into_node(), result.into_node()));
        self
    }

    pub fn otherwise(self, fallback: TypedExpr<T>) -> TypedExpr<T> {
        TypedExpr::from_node(Expr::Case {
            branches: self.branches,
            otherwise: Some(Box::new(fallback.into_node())),
        })
    }

    pub fn end(self) -> TypedExpr<T> {
        TypedExpr::from_node(Expr::Case {
            branches: self.branches,
            otherwise: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TableRef;

    fn age() -> Column<i64> {
        Column::new(TableRef::new("people"), "age")
    }

    fn name() -> Column<String> {
        Column::new(TableRef::new("people"), "name")
    }

    #[test]
    fn test_comparison_builds_binary_node() {
        let expr = TypedExpr::from(age()).eq(lit(30));
        match expr.node() {
            Expr::Binary { op, left, right } => {
                assert_eq!(*op, BinaryOp::Eq);
                assert!(matches!(**left, Expr::Column(_)));
                assert!(matches!(**right, Expr::Literal(Value::Integer(30))));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_and_flattens() {
        let a = TypedExpr::from(age()).gt(lit(18));
        let b = TypedExpr::from(age()).lt(lit(65));
        let c = TypedExpr::from(name()).is_not_null();
        let expr = a.and(b).and(c);

        match expr.node() {
            Expr::Nary { op, operands } => {
                assert_eq!(*op, NaryOp::And);
                assert_eq!(operands.len(), 3);
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_arithmetic_flattens() {
        let expr = TypedExpr::from(age()).add(lit(1)).add(lit(2));
        match expr.node() {
            Expr::Nary { op, operands } => {
                assert_eq!(*op, NaryOp::Add);
                assert_eq!(operands.len(), 3);
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_neg_builds_zero_seeded_sub() {
        let expr = TypedExpr::from(age()).neg();
        match expr.node() {
            Expr::Nary { op, operands } => {
                assert_eq!(*op, NaryOp::Sub);
                assert_eq!(operands.len(), 2);
                assert_eq!(operands[0], Expr::Literal(Value::Integer(0)));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_empty_in_list_rejected() {
        let err = TypedExpr::from(age()).in_list(vec![]).unwrap_err();
        assert_eq!(err, ExprError::EmptyInList);
    }

    #[test]
    fn test_empty_connective_rejected() {
        assert_eq!(
            and_all(vec![]).unwrap_err(),
            ExprError::EmptyOperandList { context: "and" }
        );
        assert_eq!(
            or_all(vec![]).unwrap_err(),
            ExprError::EmptyOperandList { context: "or" }
        );
    }

    #[test]
    fn test_case_builder_keeps_branch_order() {
        let expr = case_when(TypedExpr::from(age()).lt(lit(13)), lit("child"))
            .when(TypedExpr::from(age()).lt(lit(20)), lit("teen"))
            .otherwise(lit("adult"));

        match expr.node() {
            Expr::Case {
                branches,
                otherwise,
            } => {
                assert_eq!(branches.len(), 2);
                assert!(otherwise.is_some());
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }
}
