use sea_orm::{entity::prelude::*, FromJsonQueryResult, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Ordered feature bullet points, stored as a JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Features(pub Vec<String>);

impl From<Vec<String>> for Features {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Glyph name resolved by the frontend (Code, Cloud, Database, ...).
    pub icon: String,
    #[sea_orm(column_type = "Json")]
    pub features: Features,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    #[serde(skip)]
    pub seed_key: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Display fields of a service; every field may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub category: String,
    pub image: String,
}

impl NewService {
    /// Build an unsaved row with a fresh id and creation timestamp.
    pub fn into_active_model(self, seed_key: Option<String>) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(self.title),
            description: Set(self.description),
            icon: Set(self.icon),
            features: Set(Features(self.features)),
            category: Set(self.category),
            image: Set(self.image),
            seed_key: Set(seed_key),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: NewService) -> Result<Model, errors::ModelError> {
    input
        .into_active_model(None)
        .insert(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
