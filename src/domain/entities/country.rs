//! Country identity resolved for a league prefix.

use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-3 code and canonical country name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "ALPHA-3")]
    pub alpha3: String,
    #[serde(rename = "NAME")]
    pub name: String,
}

impl Country {
    pub fn new(alpha3: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alpha3: alpha3.into(),
            name: name.into(),
        }
    }
}
