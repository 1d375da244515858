use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A catalog entry as returned by the API.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub category: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceInputDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ContactDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct ContactInputDoc {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceEnvelope { pub success: bool, pub data: ServiceDoc }

#[derive(ToSchema)]
pub struct ServiceListEnvelope { pub success: bool, pub data: Vec<ServiceDoc> }

#[derive(ToSchema)]
pub struct ContactEnvelope { pub success: bool, pub data: ContactDoc, pub message: String }

#[derive(ToSchema)]
pub struct ContactListEnvelope { pub success: bool, pub data: Vec<ContactDoc> }

#[derive(ToSchema)]
pub struct MessageEnvelope { pub success: bool, pub message: String }

#[derive(ToSchema)]
pub struct ErrorEnvelope { pub success: bool, pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::contacts::submit,
        crate::routes::contacts::list,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            ServiceInputDoc,
            ContactDoc,
            ContactInputDoc,
            ServiceEnvelope,
            ServiceListEnvelope,
            ContactEnvelope,
            ContactListEnvelope,
            MessageEnvelope,
            ErrorEnvelope,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "contact")
    )
)]
pub struct ApiDoc;
