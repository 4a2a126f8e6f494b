use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    pub id: i64,
    pub hashtag_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hashtag {
    pub fn new(id: i64, hashtag_name: impl Into<String>) -> Self {
        Self {
            id,
            hashtag_name: hashtag_name.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HashtagPayload {
    pub hashtag_name: Option<Value>,
}
