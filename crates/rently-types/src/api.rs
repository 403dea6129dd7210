use serde::{Deserialize, Serialize};

use crate::models::{Owner, Property, Renter};

// -- Auth --

/// Body for owner signup and for both login endpoints.
///
/// Fields default to empty so a missing key fails the presence check (400)
/// instead of body deserialization.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RenterSignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

// -- Response envelopes, all shaped {success, message?, ...payload} --

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OwnerLoginResponse {
    pub success: bool,
    pub owner: Owner,
}

#[derive(Debug, Serialize)]
pub struct RenterLoginResponse {
    pub success: bool,
    pub user: Renter,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub property: Property,
}

#[derive(Debug, Serialize)]
pub struct HousesResponse {
    pub success: bool,
    pub houses: Vec<Property>,
}
