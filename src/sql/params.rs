//! Values bound to recipe queries.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A positional parameter for a PostgreSQL query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PgBindValue {
    I32(i32),
    I64(i64),
    String(String),
}

impl From<&str> for PgBindValue {
    fn from(s: &str) -> Self {
        PgBindValue::String(s.to_string())
    }
}

impl From<String> for PgBindValue {
    fn from(s: String) -> Self {
        PgBindValue::String(s)
    }
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::I32(n)
    }
}

impl From<i64> for PgBindValue {
    fn from(n: i64) -> Self {
        PgBindValue::I64(n)
    }
}

impl PgBindValue {
    /// Bind onto a typed query in parameter order.
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            PgBindValue::I32(n) => query.bind(n),
            PgBindValue::I64(n) => query.bind(n),
            PgBindValue::String(s) => query.bind(s),
        }
    }
}
