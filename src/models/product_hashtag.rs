use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping entry linking a product to the hashtag ids it was created with.
/// Nothing keeps these in step with later deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHashtag {
    pub product_id: i64,
    pub hashtag_ids: Vec<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductHashtag {
    pub fn new(product_id: i64, hashtag_ids: Vec<i64>) -> Self {
        Self {
            product_id,
            hashtag_ids,
            extra: Map::new(),
        }
    }
}
