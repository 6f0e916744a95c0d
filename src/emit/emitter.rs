//! Dialect-parameterized SQL rendering.

use serde::{Deserialize, Serialize};

use crate::clause::{GroupBy, Limit, OrderBy, Projection, SelectItem};
use crate::emit::dialect::Dialect;
use crate::expr::{Expr, FunctionCall};
use crate::schema::ColumnRef;
use crate::statement::{
    CreateIndexStatement, DeleteStatement, DropIndexStatement, SelectStatement, Statement,
    UpdateSource, UpdateStatement,
};
use crate::value::Value;

/// Emitted SQL text plus its ordered bind values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Renders statements and expressions for one target dialect.
///
/// Stateless: every `emit_*` call builds a fresh text/parameter pair, so one
/// emitter may serve concurrent callers.
pub struct SqlEmitter<'a, D: Dialect> {
    dialect: &'a D,
}

struct Output {
    sql: String,
    params: Vec<Value>,
}

impl Output {
    fn new() -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn into_query(self) -> SqlQuery {
        SqlQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

impl<'a, D: Dialect> SqlEmitter<'a, D> {
    pub fn new(dialect: &'a D) -> Self {
        Self { dialect }
    }

    pub fn emit(&self, statement: &Statement) -> SqlQuery {
        match statement {
            Statement::Select(s) => self.emit_select(s),
            Statement::Update(s) => self.emit_update(s),
            Statement::Delete(s) => self.emit_delete(s),
            Statement::CreateIndex(s) => self.emit_create_index(s),
            Statement::DropIndex(s) => self.emit_drop_index(s),
        }
    }

    pub fn emit_select(&self, select: &SelectStatement) -> SqlQuery {
        let mut out = Output::new();
        self.write_select(select, &mut out);
        out.into_query()
    }

    pub fn emit_update(&self, update: &UpdateStatement) -> SqlQuery {
        let mut out = Output::new();
        out.push("update ");
        out.push(&self.dialect.quote_ident(update.table.name));
        out.push(" set ");
        match &update.source {
            UpdateSource::Assignments(assignments) => {
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        out.push(", ");
                    }
                    out.push(&self.dialect.quote_ident(assignment.column.name));
                    out.push(" = ");
                    self.write_expr(&assignment.value, &mut out);
                }
            }
            UpdateSource::Record(fields) => {
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push(", ");
                    }
                    out.push(&self.dialect.quote_ident(name));
                    out.push(" = ");
                    self.bind(value.clone(), &mut out);
                }
            }
        }
        if let Some(filter) = &update.filter {
            out.push(" where ");
            self.write_expr(filter, &mut out);
        }
        out.into_query()
    }

    pub fn emit_delete(&self, delete: &DeleteStatement) -> SqlQuery {
        let mut out = Output::new();
        out.push("delete from ");
        out.push(&self.dialect.quote_ident(delete.table.name));
        if let Some(filter) = &delete.filter {
            out.push(" where ");
            self.write_expr(filter, &mut out);
        }
        if let Some(limit) = &delete.limit {
            self.write_limit(limit, &mut out);
        }
        out.into_query()
    }

    pub fn emit_create_index(&self, index: &CreateIndexStatement) -> SqlQuery {
        let mut out = Output::new();
        out.push("create ");
        if index.unique {
            out.push("unique ");
        }
        out.push("index ");
        out.push(&self.dialect.quote_ident(&index.name));
        out.push(" on ");
        out.push(&self.dialect.quote_ident(index.table.name));
        out.push(" (");
        for (i, (expr, direction)) in index.columns.iter().enumerate() {
            if i > 0 {
                out.push(", ");
            }
            self.write_expr(expr, &mut out);
            out.push(" ");
            out.push(direction.token());
        }
        out.push(")");
        out.into_query()
    }

    pub fn emit_drop_index(&self, drop: &DropIndexStatement) -> SqlQuery {
        let mut out = Output::new();
        out.push("drop index ");
        if drop.if_exists {
            out.push("if exists ");
        }
        out.push(&self.dialect.quote_ident(&drop.name));
        out.into_query()
    }

    /// Render a bare expression (useful for predicate fragments)
    pub fn emit_expr(&self, expr: &Expr) -> SqlQuery {
        let mut out = Output::new();
        self.write_expr(expr, &mut out);
        out.into_query()
    }

    fn write_select(&self, select: &SelectStatement, out: &mut Output) {
        out.push("select ");
        if select.distinct {
            out.push("distinct ");
        }
        self.write_projection(&select.projection, out);
        out.push(" from ");
        out.push(&self.dialect.quote_ident(select.from.table.name));
        for join in &select.from.joins {
            out.push(join.kind.token());
            out.push(&self.dialect.quote_ident(join.table.name));
            if let Some(on) = &join.on {
                out.push(" on ");
                self.write_expr(on, out);
            }
        }
        if let Some(filter) = &select.filter {
            out.push(" where ");
            self.write_expr(filter, out);
        }
        if let Some(group_by) = &select.group_by {
            self.write_group_by(group_by, out);
        }
        if let Some(order_by) = &select.order_by {
            self.write_order_by(order_by, out);
        }
        if let Some(limit) = &select.limit {
            self.write_limit(limit, out);
        }
    }

    fn write_projection(&self, projection: &Projection, out: &mut Output) {
        for (i, item) in projection.items.iter().enumerate() {
            if i > 0 {
                out.push(", ");
            }
            match item {
                SelectItem::AllColumns => out.push("*"),
                SelectItem::Expr { expr, alias } => {
                    self.write_expr(expr, out);
                    if let Some(alias) = alias {
                        out.push(" as ");
                        out.push(&self.dialect.quote_ident(alias));
                    }
                }
            }
        }
    }

    fn write_group_by(&self, group_by: &GroupBy, out: &mut Output) {
        out.push(" group by ");
        for (i, expr) in group_by.exprs.iter().enumerate() {
            if i > 0 {
                out.push(", ");
            }
            self.write_expr(expr, out);
        }
        if let Some(having) = &group_by.having {
            out.push(" having ");
            self.write_expr(having, out);
        }
    }

    fn write_order_by(&self, order_by: &OrderBy, out: &mut Output) {
        out.push(" order by ");
        for (i, (expr, direction)) in order_by.items.iter().enumerate() {
            if i > 0 {
                out.push(", ");
            }
            self.write_expr(expr, out);
            out.push(" ");
            out.push(direction.token());
        }
    }

    fn write_limit(&self, limit: &Limit, out: &mut Output) {
        out.push(&format!(" limit {}", limit.count));
        if limit.offset > 0 {
            out.push(&format!(" offset {}", limit.offset));
        }
    }

    fn write_expr(&self, expr: &Expr, out: &mut Output) {
        match expr {
            Expr::Column(col) => self.write_column(col, out),

            Expr::Literal(value) => self.bind(value.clone(), out),

            Expr::Binary { op, left, right } => {
                out.push("(");
                self.write_expr(left, out);
                out.push(op.token());
                self.write_expr(right, out);
                out.push(")");
            }

            Expr::Nary { op, operands } => {
                out.push("(");
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        out.push(op.token());
                    }
                    self.write_expr(operand, out);
                }
                out.push(")");
            }

            Expr::Not(operand) => {
                out.push("not ");
                self.write_expr(operand, out);
            }

            Expr::IsNull { operand, negated } => {
                out.push("(");
                self.write_expr(operand, out);
                out.push(if *negated { " is not null" } else { " is null" });
                out.push(")");
            }

            Expr::In {
                needle,
                list,
                negated,
            } => {
                out.push("(");
                self.write_expr(needle, out);
                out.push(if *negated { " not in (" } else { " in (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        out.push(", ");
                    }
                    self.write_expr(item, out);
                }
                out.push("))");
            }

            Expr::Exists(select) => {
                out.push("exists (");
                self.write_select(select, out);
                out.push(")");
            }

            Expr::Case {
                branches,
                otherwise,
            } => {
                out.push("case");
                for (condition, result) in branches {
                    out.push(" when ");
                    self.write_expr(condition, out);
                    out.push(" then ");
                    self.write_expr(result, out);
                }
                if let Some(fallback) = otherwise {
                    out.push(" else ");
                    self.write_expr(fallback, out);
                }
                out.push(" end");
            }

            Expr::Function(call) => self.write_function(call, out),
        }
    }

    fn write_function(&self, call: &FunctionCall, out: &mut Output) {
        out.push(call.name);
        out.push("(");
        if call.args.is_empty() && call.name == "count" {
            out.push("*");
        } else {
            for (i, arg) in call.args.iter().enumerate() {
                if i > 0 {
                    out.push(", ");
                }
                self.write_expr(arg, out);
            }
        }
        out.push(")");
    }

    fn write_column(&self, col: &ColumnRef, out: &mut Output) {
        out.push(&self.dialect.quote_ident(col.table.name));
        out.push(".");
        out.push(&self.dialect.quote_ident(col.name));
    }

    fn bind(&self, value: Value, out: &mut Output) {
        let placeholder = self.dialect.placeholder(out.params.len() + 1);
        out.push(&placeholder);
        out.params.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::dialect::{Postgres, Sqlite};
    use crate::expr::{lit, TypedExpr};
    use crate::schema::{Column, TableRef};

    fn people() -> TableRef {
        TableRef::new("people")
    }

    fn age() -> Column<i64> {
        Column::new(people(), "age")
    }

    fn name() -> Column<String> {
        Column::new(people(), "name")
    }

    #[test]
    fn test_expr_rendering_postgres() {
        let emitter = SqlEmitter::new(&Postgres);
        let predicate = age().expr().ge(lit(18)).and(name().expr().like(lit("A%")));
        let query = emitter.emit_expr(predicate.node());

        assert_eq!(
            query.sql,
            "((\"people\".\"age\" >= $1) and (\"people\".\"name\" like $2))"
        );
        assert_eq!(
            query.params,
            vec![Value::Integer(18), Value::Text("A%".to_string())]
        );
    }

    #[test]
    fn test_expr_rendering_sqlite_placeholders() {
        let emitter = SqlEmitter::new(&Sqlite);
        let predicate = age().expr().ge(lit(18)).and(age().expr().lt(lit(65)));
        let query = emitter.emit_expr(predicate.node());

        assert_eq!(
            query.sql,
            "((\"people\".\"age\" >= ?) and (\"people\".\"age\" < ?))"
        );
        assert_eq!(query.params, vec![Value::Integer(18), Value::Integer(65)]);
    }

    #[test]
    fn test_params_follow_emission_order() {
        let emitter = SqlEmitter::new(&Postgres);
        let predicate = TypedExpr::from(age())
            .add(lit(1))
            .mul(lit(2))
            .eq(lit(64));
        let query = emitter.emit_expr(predicate.node());

        assert_eq!(
            query.sql,
            "(((\"people\".\"age\" + $1) * $2) = $3)"
        );
        assert_eq!(
            query.params,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(64)]
        );
    }

    #[test]
    fn test_neg_renders_as_subtraction_from_zero() {
        let emitter = SqlEmitter::new(&Postgres);
        let query = emitter.emit_expr(age().expr().neg().node());
        assert_eq!(query.sql, "($1 - \"people\".\"age\")");
        assert_eq!(query.params, vec![Value::Integer(0)]);
    }

    #[test]
    fn test_in_and_null_rendering() {
        let emitter = SqlEmitter::new(&Postgres);
        let predicate = age()
            .expr()
            .in_list(vec![lit(1), lit(2), lit(3)])
            .unwrap()
            .or(name().expr().is_not_null());
        let query = emitter.emit_expr(predicate.node());

        assert_eq!(
            query.sql,
            "((\"people\".\"age\" in ($1, $2, $3)) or (\"people\".\"name\" is not null))"
        );
        assert_eq!(query.params.len(), 3);
    }

    #[test]
    fn test_function_rendering() {
        use crate::expr::function::{coalesce, count_all, substr};

        let emitter = SqlEmitter::new(&Postgres);

        let query = emitter.emit_expr(count_all().node());
        assert_eq!(query.sql, "count(*)");

        let query = emitter.emit_expr(coalesce(name().expr(), vec![lit("-")]).node());
        assert_eq!(query.sql, "coalesce(\"people\".\"name\", $1)");

        let query = emitter.emit_expr(substr(name().expr(), lit(1), lit(3)).node());
        assert_eq!(query.sql, "substr(\"people\".\"name\", $1, $2)");
    }

    #[test]
    fn test_case_rendering() {
        use crate::expr::case_when;

        let emitter = SqlEmitter::new(&Postgres);
        let expr = case_when(age().expr().lt(lit(18)), lit("minor"))
            .otherwise(lit("adult"));
        let query = emitter.emit_expr(expr.node());

        assert_eq!(
            query.sql,
            "case when (\"people\".\"age\" < $1) then $2 else $3 end"
        );
    }

    #[test]
    fn test_emission_is_stateless_across_calls() {
        let emitter = SqlEmitter::new(&Postgres);
        let predicate = age().expr().eq(lit(30));
        let first = emitter.emit_expr(predicate.node());
        let second = emitter.emit_expr(predicate.node());
        assert_eq!(first, second);
        assert_eq!(first.params, vec![Value::Integer(30)]);
    }
}
