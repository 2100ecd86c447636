//! Client (tenant organization) domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tenant organization subscribing to the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub is_approved: bool,
    pub registration_date: NaiveDate,
}

/// Client response (shape returned to the console)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    #[schema(example = "Acme Retail")]
    pub name: String,
    #[schema(example = "Retail")]
    pub industry: String,
    pub is_approved: bool,
    pub registration_date: NaiveDate,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            industry: client.industry,
            is_approved: client.is_approved,
            registration_date: client.registration_date,
        }
    }
}
