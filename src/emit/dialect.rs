//! Target-dialect parameterization.

/// What varies between target databases during emission
pub trait Dialect {
    /// Placeholder for the bind parameter at 1-based `index`
    fn placeholder(&self, index: usize) -> String;

    /// Quote an identifier
    fn quote_ident(&self, ident: &str) -> String {
        format!("\"{}\"", ident)
    }
}

/// PostgreSQL: numbered `$n` placeholders
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }
}

/// SQLite: positional `?` placeholders
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }
}
