//! Auth Commands
//!
//! Registration, login, and the admin-only user administration calls.

use serde::{Deserialize, Serialize};

use super::{fetch_json, fetch_unit, json_body, Body};
use crate::models::User;

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

pub async fn register(args: &RegisterArgs<'_>) -> Result<User, String> {
    fetch_json("POST", "/auth/register", json_body(args)?, None).await
}

/// Returns the bearer token for the credentials.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    let response: LoginResponse = fetch_json(
        "POST",
        "/auth/login",
        json_body(&LoginArgs { email, password })?,
        None,
    )
    .await?;
    Ok(response.access_token)
}

pub async fn get_users(token: &str) -> Result<Vec<User>, String> {
    fetch_json("GET", "/auth/get-users", Body::None, Some(token)).await
}

/// Admin only. The backend takes the new role as a query parameter.
pub async fn change_role(token: &str, user_id: u32, role: &str) -> Result<(), String> {
    fetch_unit(
        "PUT",
        &format!("/auth/change-role/{}?role={}", user_id, role),
        Body::None,
        Some(token),
    )
    .await
}

/// Admin only.
pub async fn delete_user(token: &str, user_id: u32) -> Result<(), String> {
    fetch_unit(
        "DELETE",
        &format!("/auth/users/{}", user_id),
        Body::None,
        Some(token),
    )
    .await
}
