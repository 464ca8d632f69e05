// Fixtures y API falsa para los tests

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::models::{
    AuthSession, AuthTokens, FeedSnapshot, Ingredient, IngredientType, LoginData, Order,
    OrderStatus, RegisterData, User, UserUpdate,
};
use crate::services::{ApiError, BurgerApi, SessionStorage};
use crate::utils::storage::MemoryStore;

pub fn named(name: &str, kind: IngredientType, price: u32) -> Ingredient {
    Ingredient {
        id: format!("id-{}", name),
        name: name.to_string(),
        kind,
        proteins: 10,
        fat: 5,
        carbohydrates: 20,
        calories: 100,
        price,
        image: String::new(),
        image_large: String::new(),
        image_mobile: String::new(),
    }
}

pub fn bun() -> Ingredient {
    named("Краторная булка N-200i", IngredientType::Bun, 1255)
}

pub fn sauce() -> Ingredient {
    named("Соус Spicy-X", IngredientType::Sauce, 90)
}

pub fn main() -> Ingredient {
    named("Биокотлета из марсианской Магнолии", IngredientType::Main, 424)
}

pub fn catalog() -> Vec<Ingredient> {
    vec![
        bun(),
        main(),
        sauce(),
        named("Флюоресцентная булка R2-D3", IngredientType::Bun, 988),
        named("Филе Люминесцентного тетраодонтимформа", IngredientType::Main, 988),
    ]
}

pub fn order_with_status(number: u64, status: OrderStatus) -> Order {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    Order {
        id: format!("order-{}", number),
        status,
        name: "Краторный бургер".to_string(),
        created_at: at,
        updated_at: at,
        number,
        ingredients: Vec::new(),
    }
}

pub fn order_with(number: u64, ingredients: Vec<String>) -> Order {
    Order {
        ingredients,
        ..order_with_status(number, OrderStatus::Done)
    }
}

pub fn user() -> User {
    User {
        email: "cosmo@example.com".to_string(),
        name: "Cosmo".to_string(),
    }
}

pub fn auth_session() -> AuthSession {
    AuthSession {
        user: user(),
        tokens: AuthTokens {
            access_token: "Bearer access".to_string(),
            refresh_token: "refresh".to_string(),
        },
    }
}

/// SessionStorage en memoria + acceso directo a ambos almacenes
pub fn memory_session() -> (SessionStorage, MemoryStore, MemoryStore) {
    let cookies = MemoryStore::new();
    let local = MemoryStore::new();
    let storage = SessionStorage::new(Rc::new(cookies.clone()), Rc::new(local.clone()));
    (storage, cookies, local)
}

fn network_down() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

/// API con respuestas programadas; registra cada llamada
pub struct FakeApi {
    pub calls: RefCell<Vec<&'static str>>,
    pub ingredients: RefCell<Result<Vec<Ingredient>, ApiError>>,
    pub feed: RefCell<Result<FeedSnapshot, ApiError>>,
    pub user_orders: RefCell<Result<Vec<Order>, ApiError>>,
    pub created_order: RefCell<Result<Order, ApiError>>,
    pub order_lookup: RefCell<Result<Vec<Order>, ApiError>>,
    pub user: RefCell<Result<User, ApiError>>,
    pub updated_user: RefCell<Result<User, ApiError>>,
    pub login: RefCell<Result<AuthSession, ApiError>>,
    pub register: RefCell<Result<AuthSession, ApiError>>,
    pub logout: RefCell<Result<(), ApiError>>,
    pub password_reset: RefCell<Result<(), ApiError>>,
    pub last_token: RefCell<Option<String>>,
    pub last_order_ids: RefCell<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            ingredients: RefCell::new(Err(network_down())),
            feed: RefCell::new(Err(network_down())),
            user_orders: RefCell::new(Err(network_down())),
            created_order: RefCell::new(Err(network_down())),
            order_lookup: RefCell::new(Err(network_down())),
            user: RefCell::new(Err(network_down())),
            updated_user: RefCell::new(Err(network_down())),
            login: RefCell::new(Err(network_down())),
            register: RefCell::new(Err(network_down())),
            logout: RefCell::new(Err(network_down())),
            password_reset: RefCell::new(Err(network_down())),
            last_token: RefCell::new(None),
            last_order_ids: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str, token: Option<&str>) {
        self.calls.borrow_mut().push(call);
        if let Some(token) = token {
            *self.last_token.borrow_mut() = Some(token.to_string());
        }
    }
}

#[async_trait(?Send)]
impl BurgerApi for FakeApi {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        self.record("get_ingredients", None);
        self.ingredients.borrow().clone()
    }

    async fn get_feed(&self) -> Result<FeedSnapshot, ApiError> {
        self.record("get_feed", None);
        self.feed.borrow().clone()
    }

    async fn get_user_orders(&self, access_token: &str) -> Result<Vec<Order>, ApiError> {
        self.record("get_user_orders", Some(access_token));
        self.user_orders.borrow().clone()
    }

    async fn create_order(
        &self,
        access_token: &str,
        ingredients: &[String],
    ) -> Result<Order, ApiError> {
        self.record("create_order", Some(access_token));
        *self.last_order_ids.borrow_mut() = ingredients.to_vec();
        self.created_order.borrow().clone()
    }

    async fn get_order_by_number(&self, _number: u64) -> Result<Vec<Order>, ApiError> {
        self.record("get_order_by_number", None);
        self.order_lookup.borrow().clone()
    }

    async fn get_user(&self, access_token: &str) -> Result<User, ApiError> {
        self.record("get_user", Some(access_token));
        self.user.borrow().clone()
    }

    async fn update_user(
        &self,
        access_token: &str,
        _update: &UserUpdate,
    ) -> Result<User, ApiError> {
        self.record("update_user", Some(access_token));
        self.updated_user.borrow().clone()
    }

    async fn login(&self, _data: &LoginData) -> Result<AuthSession, ApiError> {
        self.record("login", None);
        self.login.borrow().clone()
    }

    async fn register(&self, _data: &RegisterData) -> Result<AuthSession, ApiError> {
        self.record("register", None);
        self.register.borrow().clone()
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        self.record("logout", Some(refresh_token));
        self.logout.borrow().clone()
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        self.record("forgot_password", None);
        self.password_reset.borrow().clone()
    }

    async fn reset_password(&self, _password: &str, token: &str) -> Result<(), ApiError> {
        self.record("reset_password", Some(token));
        self.password_reset.borrow().clone()
    }
}
