//! Parameterized SQL execution.
//!
//! Every catalog, user and profile statement goes through [`query_db`]. The
//! caller states whether the statement reads rows or only executes; nothing
//! is inferred from the SQL text.

use diesel::deserialize::QueryableByName;
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_query;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::sqlite::{Sqlite, SqliteConnection};

/// Positional value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i32),
    Null,
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Integer(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Returns the result rows
    Select,
    /// Returns the number of affected rows
    Execute,
}

#[derive(Debug, PartialEq)]
pub enum QueryOutcome<T> {
    Rows(Vec<T>),
    Executed(usize),
}

impl<T> QueryOutcome<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            QueryOutcome::Rows(rows) => rows,
            QueryOutcome::Executed(_) => Vec::new(),
        }
    }

    pub fn affected(&self) -> usize {
        match self {
            QueryOutcome::Rows(rows) => rows.len(),
            QueryOutcome::Executed(count) => *count,
        }
    }
}

/// Binds `params` in order and runs `sql`. Database errors are returned untouched.
pub fn query_db<T>(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[SqlParam],
    kind: StatementKind,
) -> Result<QueryOutcome<T>, diesel::result::Error>
where
    T: QueryableByName<Sqlite> + 'static,
{
    let query = bind_params(sql_query(sql).into_boxed(), params);

    match kind {
        StatementKind::Select => query.load::<T>(conn).map(QueryOutcome::Rows),
        StatementKind::Execute => query.execute(conn).map(QueryOutcome::Executed),
    }
}

pub fn select_rows<T>(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[SqlParam],
) -> Result<Vec<T>, diesel::result::Error>
where
    T: QueryableByName<Sqlite> + 'static,
{
    query_db::<T>(conn, sql, params, StatementKind::Select).map(QueryOutcome::into_rows)
}

pub fn execute(
    conn: &mut SqliteConnection,
    sql: &str,
    params: &[SqlParam],
) -> Result<usize, diesel::result::Error> {
    query_db::<NoRows>(conn, sql, params, StatementKind::Execute).map(|outcome| outcome.affected())
}

/// Row type for statements that never load rows
#[derive(QueryableByName, Debug)]
#[allow(dead_code)]
struct NoRows {
    #[diesel(sql_type = Integer)]
    unused: i32,
}

fn bind_params<'f>(
    mut query: BoxedSqlQuery<'f, Sqlite, SqlQuery>,
    params: &[SqlParam],
) -> BoxedSqlQuery<'f, Sqlite, SqlQuery> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind::<Text, _>(value.clone()),
            SqlParam::Integer(value) => query.bind::<Integer, _>(*value),
            SqlParam::Null => query.bind::<Nullable<Text>, _>(None::<String>),
        };
    }
    query
}

/// Wraps a search term for a `LIKE ? ESCAPE '\'` substring match.
/// Wildcards typed by the user match literally.
pub fn contains_pattern(term: &str) -> SqlParam {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    SqlParam::Text(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(QueryableByName, Debug, PartialEq)]
    struct Named {
        #[diesel(sql_type = Integer)]
        id: i32,
        #[diesel(sql_type = Text)]
        name: String,
    }

    fn memory_db() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").expect("in-memory database");
        execute(
            &mut conn,
            "CREATE TABLE things (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
            &[],
        )
        .expect("create table");
        conn
    }

    #[test]
    fn test_execute_reports_affected_rows() {
        let mut conn = memory_db();

        let outcome = query_db::<Named>(
            &mut conn,
            "INSERT INTO things (id, name) VALUES (?, ?), (?, ?)",
            &[1.into(), "Super Mario".into(), 2.into(), "Zelda".into()],
            StatementKind::Execute,
        )
        .expect("insert");

        assert_eq!(outcome, QueryOutcome::Executed(2));
    }

    #[test]
    fn test_select_returns_rows_in_bind_order() {
        let mut conn = memory_db();
        execute(
            &mut conn,
            "INSERT INTO things (id, name) VALUES (?, ?), (?, ?), (?, ?)",
            &[
                1.into(),
                "Super Mario".into(),
                2.into(),
                "Zelda".into(),
                3.into(),
                "Mario Kart".into(),
            ],
        )
        .expect("insert");

        let rows: Vec<Named> = select_rows(
            &mut conn,
            "SELECT id, name FROM things WHERE name LIKE ? ESCAPE '\\' AND id > ? ORDER BY id",
            &[contains_pattern("mario"), 1.into()],
        )
        .expect("select");

        assert_eq!(
            rows,
            vec![Named {
                id: 3,
                name: "Mario Kart".to_string()
            }]
        );
    }

    #[test]
    fn test_select_kind_is_explicit_not_sniffed() {
        let mut conn = memory_db();
        execute(&mut conn, "INSERT INTO things (id, name) VALUES (1, 'a')", &[]).expect("insert");

        // Leading whitespace and a CTE would defeat prefix sniffing
        let outcome = query_db::<Named>(
            &mut conn,
            "   WITH t AS (SELECT id, name FROM things) SELECT id, name FROM t",
            &[],
            StatementKind::Select,
        )
        .expect("select");

        assert_eq!(outcome.into_rows().len(), 1);
    }

    #[test]
    fn test_errors_propagate() {
        let mut conn = memory_db();
        let result = select_rows::<Named>(&mut conn, "SELECT id, name FROM missing_table", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_pattern_trims() {
        assert_eq!(contains_pattern("  Mario "), SqlParam::Text("%Mario%".into()));
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(
            contains_pattern("100%_done"),
            SqlParam::Text("%100\\%\\_done%".into())
        );

        let mut conn = memory_db();
        execute(
            &mut conn,
            "INSERT INTO things (id, name) VALUES (1, '100% Orange Juice'), (2, '1000 Piece Puzzle')",
            &[],
        )
        .expect("insert");

        let rows: Vec<Named> = select_rows(
            &mut conn,
            "SELECT id, name FROM things WHERE name LIKE ? ESCAPE '\\'",
            &[contains_pattern("100%")],
        )
        .expect("select");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }
}
