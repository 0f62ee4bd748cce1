//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the recipes table.

use crate::model::RecipeInput;
use crate::query::{RecipeQuery, SortKey};

use super::PgBindValue;

pub const RECIPES_TABLE: &str = "recipes";

const COLUMNS: &str = "id, name, ingredients, instructions, category, cooking_time";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<PgBindValue>) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v.into());
        n
    }

    /// `col ILIKE $n` for a literal substring.
    fn push_contains(&mut self, col: &str, term: &str) -> String {
        let n = self.push_param(format!("%{}%", escape_like(term)));
        format!("{} ILIKE ${} ESCAPE '\\'", col, n)
    }
}

/// Escape LIKE metacharacters so the pattern matches `term` literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// DDL for the recipes table and its name index. Idempotent.
pub fn create_table() -> [String; 2] {
    [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                instructions TEXT NOT NULL,
                category TEXT NOT NULL,
                cooking_time INTEGER NOT NULL
            )
            "#,
            RECIPES_TABLE
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS ix_{0}_name ON {0} (name)",
            RECIPES_TABLE
        ),
    ]
}

/// SELECT by primary key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", COLUMNS, RECIPES_TABLE, n);
    q
}

/// SELECT list: every set filter AND-ed, ordered by the sort key then id, then OFFSET/LIMIT.
pub fn select_list(query: &RecipeQuery) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();

    if let Some(term) = &query.search {
        let name = q.push_contains("name", term);
        let ingredients = q.push_contains("ingredients", term);
        where_parts.push(format!("({} OR {})", name, ingredients));
    }
    if let Some(term) = &query.name {
        where_parts.push(q.push_contains("name", term));
    }
    if let Some(term) = &query.ingredient {
        where_parts.push(q.push_contains("ingredients", term));
    }
    if let Some(term) = &query.category {
        where_parts.push(q.push_contains("category", term));
    }
    if let Some(max) = query.max_time {
        let n = q.push_param(max);
        where_parts.push(format!("cooking_time <= ${}", n));
    }

    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    // "C" collation keeps name order byte-wise, matching in-memory ordering.
    let order_clause = match query.sort {
        SortKey::Id => " ORDER BY id".to_string(),
        SortKey::Name => " ORDER BY name COLLATE \"C\", id".to_string(),
        SortKey::CookingTime => " ORDER BY cooking_time, id".to_string(),
    };
    let offset = q.push_param(i64::try_from(query.skip).unwrap_or(i64::MAX));
    let limit = q.push_param(i64::from(query.limit));
    q.sql = format!(
        "SELECT {} FROM {}{}{} OFFSET ${} LIMIT ${}",
        COLUMNS, RECIPES_TABLE, where_clause, order_clause, offset, limit
    );
    q
}

/// INSERT all five fields; id comes from the sequence.
pub fn insert(input: &RecipeInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders: Vec<String> = field_params(&mut q, input)
        .into_iter()
        .map(|(_, n)| format!("${}", n))
        .collect();
    q.sql = format!(
        "INSERT INTO {} (name, ingredients, instructions, category, cooking_time) VALUES ({}) RETURNING {}",
        RECIPES_TABLE,
        placeholders.join(", "),
        COLUMNS
    );
    q
}

/// UPDATE by id: SET every field, so nothing from the previous version survives.
pub fn update(id: i64, input: &RecipeInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = field_params(&mut q, input)
        .into_iter()
        .map(|(col, n)| format!("{} = ${}", col, n))
        .collect();
    let id_param = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        RECIPES_TABLE,
        sets.join(", "),
        id_param,
        COLUMNS
    );
    q
}

/// DELETE by id, returning the deleted id so absence is detectable.
pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE id = ${} RETURNING id", RECIPES_TABLE, n);
    q
}

fn field_params(q: &mut QueryBuf, input: &RecipeInput) -> Vec<(&'static str, u32)> {
    vec![
        ("name", q.push_param(input.name.as_str())),
        ("ingredients", q.push_param(input.ingredients.as_str())),
        ("instructions", q.push_param(input.instructions.as_str())),
        ("category", q.push_param(input.category.as_str())),
        ("cooking_time", q.push_param(input.cooking_time)),
    ]
}
