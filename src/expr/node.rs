//! Expression tree definitions.

use std::collections::BTreeSet;

use crate::expr::function::FunctionCall;
use crate::expr::operator::{BinaryOp, NaryOp};
use crate::schema::{ColumnRef, TableRef};
use crate::statement::select::SelectStatement;
use crate::value::Value;

/// Expression tree node. The set of kinds is closed: both interpreters match
/// exhaustively, so adding a kind forces every interpreter to handle it.
///
/// Nodes are immutable once built and carry no execution state; the same tree
/// may be emitted and evaluated repeatedly, concurrently.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Table-qualified column reference
    Column(ColumnRef),

    /// Bound literal value; never `Value::Null` (absence is expressed through
    /// `IsNull`, not through a null-valued literal)
    Literal(Value),

    /// Binary operation: comparisons and pattern matches
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Variadic operation: boolean connectives, arithmetic, bitwise
    Nary { op: NaryOp, operands: Vec<Expr> },

    /// Logical negation
    Not(Box<Expr>),

    /// NULL test
    IsNull { operand: Box<Expr>, negated: bool },

    /// Set membership against a literal/expression list
    In {
        needle: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// Sub-select existence test
    Exists(Box<SelectStatement>),

    /// Searched CASE expression
    Case {
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Box<Expr>>,
    },

    /// SQL function call
    Function(FunctionCall),
}

impl Expr {
    /// Union, into `out`, every persistent record type this subtree reads
    /// from. Drives join validation and cache-invalidation scoping.
    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        match self {
            Expr::Column(col) => {
                out.insert(col.table);
            }
            Expr::Literal(_) => {}
            Expr::Binary { left, right, .. } => {
                left.collect_tables(out);
                right.collect_tables(out);
            }
            Expr::Nary { operands, .. } => {
                for operand in operands {
                    operand.collect_tables(out);
                }
            }
            Expr::Not(operand) => operand.collect_tables(out),
            Expr::IsNull { operand, .. } => operand.collect_tables(out),
            Expr::In { needle, list, .. } => {
                needle.collect_tables(out);
                for item in list {
                    item.collect_tables(out);
                }
            }
            Expr::Exists(select) => select.collect_tables(out),
            Expr::Case {
                branches,
                otherwise,
            } => {
                for (condition, result) in branches {
                    condition.collect_tables(out);
                    result.collect_tables(out);
                }
                if let Some(expr) = otherwise {
                    expr.collect_tables(out);
                }
            }
            Expr::Function(call) => {
                for arg in &call.args {
                    arg.collect_tables(out);
                }
            }
        }
    }

    /// Like [`Expr::collect_tables`] but does not descend into `exists`
    /// sub-selects: a sub-query declares its own from clause, so its tables do
    /// not need to appear in the outer statement's joins.
    pub fn collect_outer_tables(&self, out: &mut BTreeSet<TableRef>) {
        match self {
            Expr::Exists(_) => {}
            Expr::Column(col) => {
                out.insert(col.table);
            }
            Expr::Literal(_) => {}
            Expr::Binary { left, right, .. } => {
                left.collect_outer_tables(out);
                right.collect_outer_tables(out);
            }
            Expr::Nary { operands, .. } => {
                for operand in operands {
                    operand.collect_outer_tables(out);
                }
            }
            Expr::Not(operand) => operand.collect_outer_tables(out),
            Expr::IsNull { operand, .. } => operand.collect_outer_tables(out),
            Expr::In { needle, list, .. } => {
                needle.collect_outer_tables(out);
                for item in list {
                    item.collect_outer_tables(out);
                }
            }
            Expr::Case {
                branches,
                otherwise,
            } => {
                for (condition, result) in branches {
                    condition.collect_outer_tables(out);
                    result.collect_outer_tables(out);
                }
                if let Some(expr) = otherwise {
                    expr.collect_outer_tables(out);
                }
            }
            Expr::Function(call) => {
                for arg in &call.args {
                    arg.collect_outer_tables(out);
                }
            }
        }
    }

    /// Convenience form of [`Expr::collect_tables`]
    pub fn referenced_tables(&self) -> BTreeSet<TableRef> {
        let mut out = BTreeSet::new();
        self.collect_tables(&mut out);
        out
    }

    /// Check if this expression contains no column references
    pub fn is_constant(&self) -> bool {
        self.referenced_tables().is_empty()
    }
}
