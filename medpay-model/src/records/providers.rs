use super::ProviderId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
}

impl Provider {
    pub fn new(
        id: ProviderId,
        name: impl Into<String>,
        specialty: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            phone: phone.into(),
        }
    }
}

/// Look up a provider by id. Payments may reference providers that do not exist.
pub fn find_provider(providers: &[Provider], id: ProviderId) -> Option<&Provider> {
    providers.iter().find(|p| p.id == id)
}
