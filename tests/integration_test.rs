use sqlexpr::clause::{Direction, JoinKind, Limit};
use sqlexpr::emit::{Postgres, Sqlite, SqlEmitter};
use sqlexpr::eval::{Evaluator, Truth};
use sqlexpr::expr::{lit, TypedExpr};
use sqlexpr::record::ValueMap;
use sqlexpr::schema::{Column, TableRef};
use sqlexpr::statement::{
    CreateIndexStatement, DeleteStatement, DropIndexStatement, SelectStatement, Statement,
    UpdateStatement,
};
use sqlexpr::value::Value;

const PEOPLE: TableRef = TableRef::new("people");
const ORDERS: TableRef = TableRef::new("orders");

const PERSON_ID: Column<i64> = Column::new(PEOPLE, "id");
const PERSON_AGE: Column<i64> = Column::new(PEOPLE, "age");
const PERSON_NAME: Column<String> = Column::new(PEOPLE, "name");
const ORDER_PERSON: Column<i64> = Column::new(ORDERS, "person_id");
const ORDER_TOTAL: Column<f64> = Column::new(ORDERS, "total");

#[test]
fn select_with_join_renders_on_both_dialects() {
    let select = SelectStatement::builder(PEOPLE)
        .join(
            JoinKind::Inner,
            ORDERS,
            Some(PERSON_ID.expr().eq(ORDER_PERSON.expr())),
        )
        .filter(
            ORDER_TOTAL
                .expr()
                .gt(lit(100.0))
                .and(PERSON_AGE.expr().ge(lit(18))),
        )
        .order_by(PERSON_AGE.expr(), Direction::Desc)
        .limit(Limit::new(10).with_offset(20))
        .build()
        .unwrap();

    let query = SqlEmitter::new(&Postgres).emit_select(&select);
    assert_eq!(
        query.sql,
        "select * from \"people\" join \"orders\" on (\"people\".\"id\" = \"orders\".\"person_id\") \
         where ((\"orders\".\"total\" > $1) and (\"people\".\"age\" >= $2)) \
         order by \"people\".\"age\" desc limit 10 offset 20"
    );
    assert_eq!(query.params, vec![Value::Real(100.0), Value::Integer(18)]);

    let query = SqlEmitter::new(&Sqlite).emit_select(&select);
    assert!(query.sql.contains("> ?"));
    assert!(query.sql.contains(">= ?"));
    assert_eq!(query.params.len(), 2);
}

#[test]
fn statement_referenced_tables_cover_every_clause() {
    let select = SelectStatement::builder(PEOPLE)
        .join(
            JoinKind::Left,
            ORDERS,
            Some(PERSON_ID.expr().eq(ORDER_PERSON.expr())),
        )
        .build()
        .unwrap();

    let statement = Statement::Select(select);
    let tables = statement.referenced_tables();
    assert_eq!(tables.into_iter().collect::<Vec<_>>(), vec![ORDERS, PEOPLE]);
}

#[test]
fn update_from_assignments_binds_in_order() {
    let update = UpdateStatement::builder(PEOPLE)
        .set(PERSON_AGE, lit(31))
        .set(PERSON_NAME, lit("Alice"))
        .filter(PERSON_ID.expr().eq(lit(7)))
        .build()
        .unwrap();

    let query = SqlEmitter::new(&Postgres).emit_update(&update);
    assert_eq!(
        query.sql,
        "update \"people\" set \"age\" = $1, \"name\" = $2 where (\"people\".\"id\" = $3)"
    );
    assert_eq!(
        query.params,
        vec![
            Value::Integer(31),
            Value::Text("Alice".to_string()),
            Value::Integer(7),
        ]
    );
}

#[test]
fn update_from_record_binds_every_field() {
    let record = ValueMap::new().set("age", 31).set("name", "Alice");
    let update = UpdateStatement::builder(PEOPLE)
        .set_from_record(&record)
        .build()
        .unwrap();

    let query = SqlEmitter::new(&Postgres).emit_update(&update);
    assert_eq!(
        query.sql,
        "update \"people\" set \"age\" = $1, \"name\" = $2"
    );
    assert_eq!(
        query.params,
        vec![Value::Integer(31), Value::Text("Alice".to_string())]
    );
}

#[test]
fn delete_and_index_statements_render() {
    let delete = DeleteStatement::builder(PEOPLE)
        .filter(PERSON_AGE.expr().lt(lit(18)))
        .limit(Limit::new(100))
        .build()
        .unwrap();
    let query = SqlEmitter::new(&Postgres).emit_delete(&delete);
    assert_eq!(
        query.sql,
        "delete from \"people\" where (\"people\".\"age\" < $1) limit 100"
    );

    let index = CreateIndexStatement::builder("people_age_name", PEOPLE)
        .unique()
        .column(PERSON_AGE.expr(), Direction::Asc)
        .column(PERSON_NAME.expr(), Direction::Desc)
        .build()
        .unwrap();
    let query = SqlEmitter::new(&Postgres).emit_create_index(&index);
    assert_eq!(
        query.sql,
        "create unique index \"people_age_name\" on \"people\" \
         (\"people\".\"age\" asc, \"people\".\"name\" desc)"
    );

    let drop = DropIndexStatement::new("people_age_name").if_exists();
    let query = SqlEmitter::new(&Postgres).emit_drop_index(&drop);
    assert_eq!(query.sql, "drop index if exists \"people_age_name\"");
}

#[test]
fn grouped_select_renders_projection_and_having() {
    use sqlexpr::clause::{GroupBy, Projection, SelectItem};
    use sqlexpr::expr::function::count_all;

    let select = SelectStatement::builder(PEOPLE)
        .projection(Projection::new(vec![
            SelectItem::Expr {
                expr: PERSON_NAME.expr().into_node(),
                alias: None,
            },
            SelectItem::Expr {
                expr: count_all().into_node(),
                alias: Some("n"),
            },
        ]))
        .group_by(
            GroupBy::new(vec![PERSON_NAME.expr().into_node()])
                .with_having(count_all().gt(lit(1)).into_node()),
        )
        .build()
        .unwrap();

    let query = SqlEmitter::new(&Postgres).emit_select(&select);
    assert_eq!(
        query.sql,
        "select \"people\".\"name\", count(*) as \"n\" from \"people\" \
         group by \"people\".\"name\" having (count(*) > $1)"
    );
    assert_eq!(query.params, vec![Value::Integer(1)]);
}

#[test]
fn cache_match_decides_or_defers() {
    // One predicate, three cached records: match, no match, undecidable.
    let predicate = PERSON_AGE
        .expr()
        .ge(lit(18))
        .and(PERSON_NAME.expr().is_not_null().not().not());

    let adult = ValueMap::new().set("age", 30).set("name", "Alice");
    let minor = ValueMap::new().set("age", 12).set("name", "Bob");

    // is_not_null is SQL-only, so every record defers
    assert!(Evaluator::new(&adult).matches(predicate.node()).is_undecided());
    assert!(Evaluator::new(&minor).matches(predicate.node()).is_undecided());

    // A fully decidable predicate resolves in memory
    let predicate = PERSON_AGE.expr().ge(lit(18)).and(PERSON_NAME.expr().eq(lit("Alice")));
    assert_eq!(Evaluator::new(&adult).matches(predicate.node()), Truth::True);
    assert_eq!(Evaluator::new(&minor).matches(predicate.node()), Truth::False);

    let nameless = ValueMap::new().set("age", 30).set_null("name");
    assert_eq!(
        sqlexpr::eval::matches_record(predicate.node(), &nameless),
        Truth::Undecided("null operand".to_string())
    );
}

#[test]
fn same_tree_serves_both_interpreters() {
    let predicate = PERSON_AGE.expr().add(lit(1)).gt(lit(30));

    let query = SqlEmitter::new(&Postgres).emit_expr(predicate.node());
    assert_eq!(query.sql, "((\"people\".\"age\" + $1) > $2)");
    assert_eq!(query.params, vec![Value::Integer(1), Value::Integer(30)]);

    let record = ValueMap::new().set("age", 30);
    assert_eq!(
        Evaluator::new(&record).matches(predicate.node()),
        Truth::True
    );
    let record = ValueMap::new().set("age", 29);
    assert_eq!(
        Evaluator::new(&record).matches(predicate.node()),
        Truth::False
    );
}

#[test]
fn exists_subquery_renders_with_outer_parameters_ordered() {
    let subquery = SelectStatement::builder(ORDERS)
        .filter(ORDER_TOTAL.expr().gt(lit(100.0)))
        .build()
        .unwrap();

    let select = SelectStatement::builder(PEOPLE)
        .filter(
            PERSON_AGE
                .expr()
                .ge(lit(18))
                .and(sqlexpr::expr::exists(subquery)),
        )
        .build()
        .unwrap();

    let query = SqlEmitter::new(&Postgres).emit_select(&select);
    assert_eq!(
        query.sql,
        "select * from \"people\" where ((\"people\".\"age\" >= $1) and \
         exists (select * from \"orders\" where (\"orders\".\"total\" > $2)))"
    );
    assert_eq!(query.params, vec![Value::Integer(18), Value::Real(100.0)]);
}

#[test]
fn typed_expr_trees_are_reusable_and_immutable() {
    let predicate: TypedExpr<bool> = PERSON_AGE.expr().eq(lit(30));
    let record = ValueMap::new().set("age", 30);

    for _ in 0..3 {
        assert_eq!(
            Evaluator::new(&record).matches(predicate.node()),
            Truth::True
        );
        let query = SqlEmitter::new(&Sqlite).emit_expr(predicate.node());
        assert_eq!(query.sql, "(\"people\".\"age\" = ?)");
    }
}
