pub mod clause;
pub mod emit;
pub mod error;
pub mod eval;
pub mod expr;
pub mod record;
pub mod schema;
pub mod statement;
pub mod value;
