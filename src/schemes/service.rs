use std::collections::HashMap;

use crate::schemes::model::{Scheme, SchemesFile};

const SCHEMES_JSON: &str = include_str!("../../data/schemes.json");

/// In-memory schemes directory, loaded once from the dataset bundled into
/// the binary.
pub struct SchemesService {
    national: Vec<Scheme>,
    state_specific: HashMap<String, Vec<Scheme>>,
}

impl SchemesService {
    pub fn load() -> Result<Self, serde_json::Error> {
        let file: SchemesFile = serde_json::from_str(SCHEMES_JSON)?;
        Ok(SchemesService {
            national: file.national_schemes,
            state_specific: file.state_specific_schemes,
        })
    }

    /// National schemes plus the given state's, filtered by a free-text
    /// query matched against name, description and category.
    pub fn search(&self, query: Option<&str>, state: &str) -> Vec<Scheme> {
        let mut schemes: Vec<Scheme> = self
            .national
            .iter()
            .map(|scheme| labeled(scheme, "National"))
            .collect();
        if let Some(state_schemes) = self.state_specific.get(state) {
            schemes.extend(state_schemes.iter().map(|scheme| labeled(scheme, "State")));
        }

        let Some(query) = query.map(str::to_lowercase).filter(|q| !q.trim().is_empty()) else {
            return schemes;
        };

        schemes
            .into_iter()
            .filter(|scheme| {
                scheme.name.to_lowercase().contains(&query)
                    || scheme.description.to_lowercase().contains(&query)
                    || scheme.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}

fn labeled(scheme: &Scheme, scheme_type: &str) -> Scheme {
    let mut labeled = scheme.clone();
    labeled.scheme_type = Some(scheme_type.to_string());
    labeled
}
