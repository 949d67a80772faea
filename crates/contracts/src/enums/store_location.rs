use serde::{Deserialize, Serialize};

/// Точки продаж (хабы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreLocation {
    #[serde(rename = "London HQ")]
    LondonHq,
    #[serde(rename = "Toronto Hub")]
    TorontoHub,
    #[serde(rename = "Waterloo Node")]
    WaterlooNode,
}

impl StoreLocation {
    pub fn code(&self) -> &'static str {
        match self {
            StoreLocation::LondonHq => "London HQ",
            StoreLocation::TorontoHub => "Toronto Hub",
            StoreLocation::WaterlooNode => "Waterloo Node",
        }
    }

    pub fn all() -> Vec<StoreLocation> {
        vec![
            StoreLocation::LondonHq,
            StoreLocation::TorontoHub,
            StoreLocation::WaterlooNode,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "London HQ" => Some(StoreLocation::LondonHq),
            "Toronto Hub" => Some(StoreLocation::TorontoHub),
            "Waterloo Node" => Some(StoreLocation::WaterlooNode),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
