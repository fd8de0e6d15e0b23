//! Read projections of the records served by the three endpoints.
//!
//! Field names follow the GraphQL schema (camelCase on the wire). Timestamps
//! are kept as the server's string so they render verbatim.

use serde::{Deserialize, Serialize};

/// A client record from the `clients` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Server-assigned id. `allClients` does not select it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub registered_at: String,
}

/// A pet record from the `pets` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Owner names only. `null` when the pet has no owner.
    #[serde(default)]
    pub owner: Option<PetOwner>,
}

/// The owner projection embedded in a [`Pet`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PetOwner {
    pub first_name: String,
    pub last_name: String,
}

/// A data document from the `documents` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub created_at: String,
}
