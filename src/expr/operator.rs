//! Operator definitions for expressions.

/// Binary operators: comparisons and pattern matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    NotLike,
}

impl BinaryOp {
    /// SQL infix token. Tokens carry surrounding whitespace so emission never
    /// produces adjacent identifiers on dialects that are picky about it.
    pub fn token(&self) -> &'static str {
        match self {
            BinaryOp::Eq => " = ",
            BinaryOp::Ne => " <> ",
            BinaryOp::Lt => " < ",
            BinaryOp::Le => " <= ",
            BinaryOp::Gt => " > ",
            BinaryOp::Ge => " >= ",
            BinaryOp::Like => " like ",
            BinaryOp::NotLike => " not like ",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }
}

/// Variadic operators: boolean connectives and arithmetic/bitwise folds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaryOp {
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    BitAnd,
    BitOr,
}

impl NaryOp {
    /// SQL infix token, whitespace-padded like [`BinaryOp::token`]
    pub fn token(&self) -> &'static str {
        match self {
            NaryOp::And => " and ",
            NaryOp::Or => " or ",
            NaryOp::Add => " + ",
            NaryOp::Sub => " - ",
            NaryOp::Mul => " * ",
            NaryOp::Div => " / ",
            NaryOp::BitAnd => " & ",
            NaryOp::BitOr => " | ",
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, NaryOp::And | NaryOp::Or)
    }

    pub fn is_bitwise(&self) -> bool {
        matches!(self, NaryOp::BitAnd | NaryOp::BitOr)
    }
}
