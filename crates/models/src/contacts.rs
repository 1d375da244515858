use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Status given to every stored submission; nothing in this system moves it on.
pub const STATUS_NEW: &str = "new";

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

fn present(v: &str) -> bool { !v.trim().is_empty() }

/// Presence check for the three mandatory fields.
pub fn validate_required(name: &str, email: &str, message: &str) -> Result<(), errors::ModelError> {
    if present(name) && present(email) && present(message) {
        Ok(())
    } else {
        Err(errors::ModelError::Validation(REQUIRED_FIELDS_MESSAGE.into()))
    }
}

fn optional(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    phone: Option<&str>,
    company: Option<&str>,
    message: &str,
) -> Result<Model, errors::ModelError> {
    validate_required(name, email, message)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(optional(phone)),
        company: Set(optional(company)),
        message: Set(message.to_string()),
        status: Set(STATUS_NEW.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
