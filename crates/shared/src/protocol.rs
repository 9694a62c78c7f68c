use serde::{Deserialize, Serialize};

use crate::domain::FilterId;

/// Request body accepted by the classification endpoint.
///
/// The desktop form forwards the user's raw text without re-serialization;
/// this type documents the shape and backs the mock endpoint used in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub data: Vec<String>,
}

/// Response body returned by the classification endpoint.
///
/// Fields the service adds beyond these three are ignored; a missing bucket
/// deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub numbers: Vec<String>,
    #[serde(default)]
    pub alphabets: Vec<String>,
    #[serde(default)]
    pub highest_alphabet: Vec<String>,
}

impl ClassifyResponse {
    pub fn field(&self, filter: FilterId) -> &[String] {
        match filter {
            FilterId::Numbers => &self.numbers,
            FilterId::Alphabets => &self.alphabets,
            FilterId::HighestAlphabet => &self.highest_alphabet,
        }
    }

    pub fn all_empty(&self) -> bool {
        FilterId::ALL.iter().all(|filter| self.field(*filter).is_empty())
    }
}
