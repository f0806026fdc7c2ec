//! Products as served by the catalogue API.
//!
//! Products are display-only: the widgets never mutate one, they only copy it
//! into notifications and views.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque product identifier.
///
/// The catalogue stores products in MongoDB, so identifiers arrive as
/// extended JSON (`{"$oid": "..."}`). Plain strings and integers are accepted
/// too. Serialization always produces the `$oid` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Text(String),
    Number(serde_json::Number),
}

#[derive(Serialize)]
struct ObjectIdRef<'a> {
    #[serde(rename = "$oid")]
    oid: &'a str,
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawProductId::deserialize(deserializer)? {
            RawProductId::ObjectId { oid } => Self(oid),
            RawProductId::Text(text) => Self(text),
            RawProductId::Number(number) => Self(number.to_string()),
        })
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ObjectIdRef { oid: &self.0 }.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product without a description.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
