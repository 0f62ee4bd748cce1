//! Recipe list query: filters, ordering and pagination parsed from query-string parameters.
//!
//! Every filter narrows the result (AND). `search` alone spans two fields: it matches when
//! either `name` or `ingredients` contains the term. Text matching is case-insensitive
//! substring matching, defined once by [`contains_ignore_case`] so every store agrees.

use crate::model::Recipe;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Insertion (id) order.
    #[default]
    Id,
    Name,
    CookingTime,
}

impl SortKey {
    /// `"name"` and `"time"` are recognized; anything else falls back to id order.
    pub fn parse(s: &str) -> Self {
        match s {
            "name" => SortKey::Name,
            "time" => SortKey::CookingTime,
            _ => SortKey::Id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeQuery {
    pub search: Option<String>,
    pub name: Option<String>,
    pub ingredient: Option<String>,
    pub category: Option<String>,
    pub max_time: Option<i64>,
    pub sort: SortKey,
    pub skip: u64,
    pub limit: u32,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        RecipeQuery {
            search: None,
            name: None,
            ingredient: None,
            category: None,
            max_time: None,
            sort: SortKey::Id,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecipeQuery {
    /// Build from raw query parameters. Unknown keys, blank text and unparseable numbers are ignored.
    /// Integers beyond the `i64` range saturate rather than being dropped.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut q = RecipeQuery::default();
        for (k, v) in params {
            match k.as_str() {
                "search" => q.search = non_blank(v),
                "name" => q.name = non_blank(v),
                "ingredient" => q.ingredient = non_blank(v),
                "category" => q.category = non_blank(v),
                "max_time" => q.max_time = parse_int(v),
                "sort_by" => q.sort = SortKey::parse(v.trim()),
                "skip" => {
                    if let Some(n) = parse_int(v).and_then(|n| u64::try_from(n).ok()) {
                        q.skip = n;
                    }
                }
                "limit" => {
                    if let Some(n) = parse_int(v).and_then(|n| u64::try_from(n).ok()) {
                        q.limit = n.min(u64::from(MAX_LIMIT)) as u32;
                    }
                }
                _ => {}
            }
        }
        q
    }

    /// True when the recipe satisfies every filter that is set.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(term) = &self.search {
            if !contains_ignore_case(&recipe.name, term) && !contains_ignore_case(&recipe.ingredients, term) {
                return false;
            }
        }
        if let Some(term) = &self.name {
            if !contains_ignore_case(&recipe.name, term) {
                return false;
            }
        }
        if let Some(term) = &self.ingredient {
            if !contains_ignore_case(&recipe.ingredients, term) {
                return false;
            }
        }
        if let Some(term) = &self.category {
            if !contains_ignore_case(&recipe.category, term) {
                return false;
            }
        }
        if let Some(max) = self.max_time {
            if i64::from(recipe.cooking_time) > max {
                return false;
            }
        }
        true
    }

    /// Ordering for the requested sort key; ties break by ascending id.
    pub fn order(&self, a: &Recipe, b: &Recipe) -> Ordering {
        let primary = match self.sort {
            SortKey::Id => Ordering::Equal,
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::CookingTime => a.cooking_time.cmp(&b.cooking_time),
        };
        primary.then(a.id.cmp(&b.id))
    }

    /// Filter, sort, then apply skip/limit.
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut hits: Vec<&Recipe> = recipes.into_iter().filter(|r| self.matches(r)).collect();
        hits.sort_by(|a, b| self.order(a, b));
        hits.into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX))
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}

/// Blank means absent; anything else is matched verbatim.
fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Decimal integer with optional sign. Out-of-range values clamp to `i64::MIN`/`i64::MAX`.
fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let negative = s.starts_with('-');
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
