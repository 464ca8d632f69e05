// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado: los tokens llegan como parámetros
// y los viewmodels deciden qué hacer con cada resultado.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::api::{
    ApiEnvelope, AuthResponse, ForgotPasswordRequest, IngredientsResponse, MessageResponse,
    NewOrderRequest, NewOrderResponse, OrdersResponse, ResetPasswordRequest, TokenRequest,
    UserResponse,
};
use crate::models::{
    AuthSession, AuthTokens, FeedSnapshot, Ingredient, LoginData, Order, RegisterData, User,
    UserUpdate,
};
use crate::services::error::ApiError;

/// Contrato REST del backend de Stellar Burgers
#[async_trait(?Send)]
pub trait BurgerApi {
    /// GET /ingredients
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError>;
    /// GET /orders/all
    async fn get_feed(&self) -> Result<FeedSnapshot, ApiError>;
    /// GET /orders (autenticado)
    async fn get_user_orders(&self, access_token: &str) -> Result<Vec<Order>, ApiError>;
    /// POST /orders (autenticado)
    async fn create_order(
        &self,
        access_token: &str,
        ingredients: &[String],
    ) -> Result<Order, ApiError>;
    /// GET /orders/{number}
    async fn get_order_by_number(&self, number: u64) -> Result<Vec<Order>, ApiError>;
    /// GET /auth/user
    async fn get_user(&self, access_token: &str) -> Result<User, ApiError>;
    /// PATCH /auth/user
    async fn update_user(&self, access_token: &str, update: &UserUpdate)
        -> Result<User, ApiError>;
    async fn login(&self, data: &LoginData) -> Result<AuthSession, ApiError>;
    async fn register(&self, data: &RegisterData) -> Result<AuthSession, ApiError>;
    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError>;
    /// POST /password-reset
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
    /// POST /password-reset/reset
    async fn reset_password(&self, password: &str, token: &str) -> Result<(), ApiError>;
}

/// Cliente HTTP real sobre gloo-net
#[derive(Clone, Debug)]
pub struct HttpApiClient {
    base_url: String,
}

impl HttpApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for HttpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send<T>(builder: RequestBuilder) -> Result<T, ApiError>
where
    T: DeserializeOwned + ApiEnvelope,
{
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned + ApiEnvelope,
{
    let request = builder
        .json(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Serialization error: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn read_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + ApiEnvelope,
{
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_envelope(status, &status_text, &body)
}

/// Convierte status + cuerpo en la taxonomía de `ApiError`
pub fn parse_envelope<T>(status: u16, status_text: &str, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + ApiEnvelope,
{
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<MessageResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| status_text.to_string());
        return Err(match status {
            401 | 403 => ApiError::Unauthorized(message),
            _ => ApiError::Http { status, message },
        });
    }

    let parsed: T = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if !parsed.success() {
        let message = parsed.message().unwrap_or("success: false").to_string();
        return Err(ApiError::Rejected(message));
    }
    Ok(parsed)
}

fn into_auth_session(response: AuthResponse) -> Result<AuthSession, ApiError> {
    match (response.user, response.access_token, response.refresh_token) {
        (Some(user), Some(access_token), Some(refresh_token)) => Ok(AuthSession {
            user,
            tokens: AuthTokens {
                access_token,
                refresh_token,
            },
        }),
        _ => Err(ApiError::Parse(
            "respuesta de auth sin usuario o tokens".to_string(),
        )),
    }
}

fn into_user(response: UserResponse) -> Result<User, ApiError> {
    response
        .user
        .ok_or_else(|| ApiError::Parse("respuesta sin usuario".to_string()))
}

#[async_trait(?Send)]
impl BurgerApi for HttpApiClient {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        log::info!("🥬 [API] GET /ingredients");
        let response: IngredientsResponse = send(Request::get(&self.url("ingredients"))).await?;
        Ok(response.data)
    }

    async fn get_feed(&self) -> Result<FeedSnapshot, ApiError> {
        log::info!("📰 [API] GET /orders/all");
        let response: OrdersResponse = send(Request::get(&self.url("orders/all"))).await?;
        Ok(FeedSnapshot {
            orders: response.orders,
            total: response.total,
            total_today: response.total_today,
        })
    }

    async fn get_user_orders(&self, access_token: &str) -> Result<Vec<Order>, ApiError> {
        log::info!("📋 [API] GET /orders");
        let request = Request::get(&self.url("orders")).header("authorization", access_token);
        let response: OrdersResponse = send(request).await?;
        Ok(response.orders)
    }

    async fn create_order(
        &self,
        access_token: &str,
        ingredients: &[String],
    ) -> Result<Order, ApiError> {
        log::info!("🍔 [API] POST /orders ({} ingredientes)", ingredients.len());
        let request = Request::post(&self.url("orders")).header("authorization", access_token);
        let response: NewOrderResponse =
            send_json(request, &NewOrderRequest { ingredients }).await?;
        let order = response
            .order
            .ok_or_else(|| ApiError::Parse("respuesta sin pedido".to_string()))?;
        log::info!("✅ [API] Pedido #{} creado: {}", order.number, response.name);
        Ok(order)
    }

    async fn get_order_by_number(&self, number: u64) -> Result<Vec<Order>, ApiError> {
        log::info!("🔍 [API] GET /orders/{}", number);
        let response: OrdersResponse =
            send(Request::get(&self.url(&format!("orders/{}", number)))).await?;
        Ok(response.orders)
    }

    async fn get_user(&self, access_token: &str) -> Result<User, ApiError> {
        log::info!("👤 [API] GET /auth/user");
        let request = Request::get(&self.url("auth/user")).header("authorization", access_token);
        into_user(send(request).await?)
    }

    async fn update_user(
        &self,
        access_token: &str,
        update: &UserUpdate,
    ) -> Result<User, ApiError> {
        log::info!("✏️ [API] PATCH /auth/user");
        let request =
            Request::patch(&self.url("auth/user")).header("authorization", access_token);
        into_user(send_json(request, update).await?)
    }

    async fn login(&self, data: &LoginData) -> Result<AuthSession, ApiError> {
        log::info!("🔐 [API] Login para: {}", data.email);
        into_auth_session(send_json(Request::post(&self.url("auth/login")), data).await?)
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthSession, ApiError> {
        log::info!("📝 [API] Registro para: {}", data.email);
        into_auth_session(send_json(Request::post(&self.url("auth/register")), data).await?)
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        log::info!("🚪 [API] POST /auth/logout");
        let body = TokenRequest {
            token: refresh_token,
        };
        let _: MessageResponse = send_json(Request::post(&self.url("auth/logout")), &body).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        log::info!("📧 [API] POST /password-reset para: {}", email);
        let body = ForgotPasswordRequest { email };
        let _: MessageResponse =
            send_json(Request::post(&self.url("password-reset")), &body).await?;
        Ok(())
    }

    async fn reset_password(&self, password: &str, token: &str) -> Result<(), ApiError> {
        log::info!("🔑 [API] POST /password-reset/reset");
        let body = ResetPasswordRequest { password, token };
        let _: MessageResponse =
            send_json(Request::post(&self.url("password-reset/reset")), &body).await?;
        Ok(())
    }
}
