use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct User {
    pub email: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterData {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// PATCH /auth/user: solo se envían los campos presentes
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none()
    }
}

/// Tokens devueltos por login/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Incluye el prefijo "Bearer "
    pub access_token: String,
    pub refresh_token: String,
}

/// Resultado de un login/register exitoso
#[derive(Clone, PartialEq, Debug)]
pub struct AuthSession {
    pub user: User,
    pub tokens: AuthTokens,
}
