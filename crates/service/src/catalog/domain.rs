use serde::{Deserialize, Serialize};

use models::services::NewService;

/// Body of a create call. Every field is optional; unknown fields are ignored
/// and a client-supplied `id` never overrides the generated one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateServiceInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl From<CreateServiceInput> for NewService {
    fn from(i: CreateServiceInput) -> Self {
        NewService {
            title: i.title.unwrap_or_default(),
            description: i.description.unwrap_or_default(),
            icon: i.icon.unwrap_or_default(),
            features: i.features.unwrap_or_default(),
            category: i.category.unwrap_or_default(),
            image: i.image.unwrap_or_default(),
        }
    }
}

/// Body of an update call; only the fields present are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateServiceInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
}
