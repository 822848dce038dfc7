use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A government support scheme from the bundled dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub description: String,
    pub category: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
    /// Free-form criteria map, rendered as bullet points by clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<Map<String, Value>>,
    /// "National" or "State"; assigned when the lists are merged.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
}

/// Layout of data/schemes.json.
#[derive(Debug, Deserialize)]
pub struct SchemesFile {
    pub national_schemes: Vec<Scheme>,
    #[serde(default)]
    pub state_specific_schemes: HashMap<String, Vec<Scheme>>,
}
