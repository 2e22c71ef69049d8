//! Comment submission payload and result

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fields whose values the API expects as integers
const INTEGER_FIELDS: &[&str] = &["commentOn", "parent"];

/// Flat key/value comment payload, taken verbatim from a form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentInput {
    fields: IndexMap<String, String>,
}

impl CommentInput {
    /// Build from submitted pairs; a repeated key keeps its last value
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = IndexMap::new();
        for (key, value) in pairs {
            fields.insert(key.into(), value.into());
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// The `input` argument of the `createComment` mutation
    pub fn to_graphql_input(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .map(|(key, value)| {
                let value = match value.trim().parse::<i64>() {
                    Ok(n) if INTEGER_FIELDS.contains(&key.as_str()) => serde_json::Value::from(n),
                    _ => serde_json::Value::String(value.clone()),
                };
                (key.clone(), value)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Outcome of `createComment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentResult {
    pub success: bool,
    pub comment: Option<CreatedComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedComment {
    pub id: Option<String>,
    pub database_id: Option<i64>,
}
