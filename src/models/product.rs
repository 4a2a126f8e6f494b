use super::Hashtag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Stored product. `price` is kept as whatever JSON value the document holds
/// and fields this type does not know about are carried through `extra`, so
/// rewriting the collection leaves other products untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: i64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: Value::Number(new.price),
            extra: Map::new(),
        }
    }
}

/// Create response: the stored product plus the hashtags it was created with.
/// Ids with no matching hashtag are kept as `null` entries.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithHashtags {
    #[serde(flatten)]
    pub product: Product,
    pub hashtags: Vec<Option<Hashtag>>,
}

/// Raw product body as sent by the client. Fields stay untyped until
/// validation so that missing and wrongly typed values can be told apart.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    #[serde(rename = "hashtagIds")]
    pub hashtag_ids: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub hashtag_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Number>,
}

impl ProductChanges {
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = Value::Number(price);
        }
    }
}
