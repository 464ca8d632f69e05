// ============================================================================
// API - Sobres (envelopes) de respuesta del backend
// ============================================================================
// Todas las respuestas llevan `success`; con `success: false` el backend
// suele incluir `message`.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::ingredient::Ingredient;
use crate::models::order::Order;
use crate::models::user::User;

/// Acceso común a `success` / `message`
pub trait ApiEnvelope {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiEnvelope for $ty {
                fn success(&self) -> bool {
                    self.success
                }

                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )*
    };
}

#[derive(Debug, Deserialize)]
pub struct IngredientsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_today: u64,
}

#[derive(Debug, Deserialize)]
pub struct NewOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: String,
    pub order: Option<Order>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<User>,
}

/// logout, password-reset y errores genéricos
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl_envelope!(
    IngredientsResponse,
    OrdersResponse,
    NewOrderResponse,
    AuthResponse,
    UserResponse,
    MessageResponse,
);

#[derive(Debug, Serialize)]
pub struct NewOrderRequest<'a> {
    pub ingredients: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub password: &'a str,
    pub token: &'a str,
}
