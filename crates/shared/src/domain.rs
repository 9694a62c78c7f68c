use serde::{Deserialize, Serialize};

/// Response field selectable in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterId {
    Numbers,
    Alphabets,
    HighestAlphabet,
}

impl FilterId {
    /// All filters, in render order.
    pub const ALL: [FilterId; 3] = [
        FilterId::Numbers,
        FilterId::Alphabets,
        FilterId::HighestAlphabet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterId::Numbers => "Numbers",
            FilterId::Alphabets => "Alphabets",
            FilterId::HighestAlphabet => "Highest Alphabet",
        }
    }

    /// Field name carried by the classification response.
    pub fn wire_name(self) -> &'static str {
        match self {
            FilterId::Numbers => "numbers",
            FilterId::Alphabets => "alphabets",
            FilterId::HighestAlphabet => "highest_alphabet",
        }
    }
}
