//! Request parameters → equality filters over player documents.
//!
//! Every lookup endpoint deserializes its query string into one of the
//! `*Params` structs below and hands it to the matching builder. Parameters
//! are never defaulted: an absent optional parameter adds no clause, an
//! absent required one is a [`ValidationError`].

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// A required parameter was missing or could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// Equality filter: dotted field path → expected value.
///
/// The empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: BTreeMap<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path == value`.
    pub fn eq(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.insert(path.into(), value.into());
        self
    }

    /// Add `path == value` only when `value` is present and non-empty.
    fn eq_opt(self, path: &str, value: Option<&str>) -> Self {
        match non_empty(value) {
            Some(v) => self.eq(path, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.clauses.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.clauses.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Expand dotted paths into a nested document, e.g.
    /// `team.abbreviation = "BOS"` → `{"team": {"abbreviation": "BOS"}}`.
    ///
    /// Postgres `jsonb @>` containment on this document is exactly the
    /// equality filter.
    pub fn to_document(&self) -> Value {
        let mut root = Map::new();
        for (path, value) in &self.clauses {
            insert_path(&mut root, path, value.clone());
        }
        Value::Object(root)
    }

    /// Whether `doc` satisfies every clause. Values compare strictly, so the
    /// string `"2003"` does not match the number `2003`.
    pub fn matches(&self, doc: &Value) -> bool {
        self.clauses
            .iter()
            .all(|(path, expected)| lookup(doc, path) == Some(expected))
    }
}

fn insert_path(node: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            node.insert(path.to_owned(), value);
        }
        Some((head, rest)) => {
            let child = node
                .entry(head.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(inner) = child {
                insert_path(inner, rest, value);
            }
        }
    }
}

fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |node, seg| node.get(seg))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_int(value: Option<&str>, msg: &'static str) -> Result<i64, ValidationError> {
    value
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(|_| ValidationError(msg))
}

//////////////////////////////////////////////////
// Query-string shapes
//////////////////////////////////////////////////

#[derive(Debug, Default, Deserialize)]
pub struct NameParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub team: Option<String>,
    pub position: Option<String>,
    pub country: Option<String>,
    pub draft_year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PositionParams {
    pub position: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    pub abbreviation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftParams {
    pub year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AveragesParams {
    pub player_id: Option<String>,
}

//////////////////////////////////////////////////
// Builders
//////////////////////////////////////////////////

/// Exact first + last name match. Both are required.
pub fn by_name(p: &NameParams) -> Result<Filter, ValidationError> {
    match (non_empty(p.first_name.as_deref()), non_empty(p.last_name.as_deref())) {
        (Some(first), Some(last)) => Ok(Filter::new()
            .eq("first_name", first)
            .eq("last_name", last)),
        _ => Err(ValidationError("firstName and/or lastName field is empty")),
    }
}

/// Optional listing filters; nothing set means every player.
///
/// `draft_year` stays a string here while `/players/drafted` parses it as an
/// integer. Documents storing the year as a number will not match.
pub fn listing(p: &ListParams) -> Filter {
    Filter::new()
        .eq_opt("team.full_name", p.team.as_deref())
        .eq_opt("position", p.position.as_deref())
        .eq_opt("country", p.country.as_deref())
        .eq_opt("draft_year", p.draft_year.as_deref())
}

pub fn by_id(p: &IdParams) -> Result<Filter, ValidationError> {
    player_id_filter(p.id.as_deref())
}

pub fn by_player_id(p: &AveragesParams) -> Result<Filter, ValidationError> {
    player_id_filter(p.player_id.as_deref())
}

fn player_id_filter(raw: Option<&str>) -> Result<Filter, ValidationError> {
    let id = parse_int(raw, "Invalid player ID")?;
    Ok(Filter::new().eq("id", id))
}

pub fn by_position(p: &PositionParams) -> Result<Filter, ValidationError> {
    non_empty(p.position.as_deref())
        .map(|pos| Filter::new().eq("position", pos))
        .ok_or(ValidationError("Missing position query parameter"))
}

pub fn by_team(p: &TeamParams) -> Result<Filter, ValidationError> {
    non_empty(p.abbreviation.as_deref())
        .map(|abbr| Filter::new().eq("team.abbreviation", abbr))
        .ok_or(ValidationError("Missing abbreviation query parameter"))
}

pub fn drafted(p: &DraftParams) -> Result<Filter, ValidationError> {
    let year = parse_int(p.year.as_deref(), "Invalid draft year")?;
    Ok(Filter::new().eq("draft_year", year))
}
