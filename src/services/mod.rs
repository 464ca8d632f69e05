pub mod api_client;
pub mod error;
pub mod session_storage;

pub use api_client::{BurgerApi, HttpApiClient};
pub use error::ApiError;
pub use session_storage::SessionStorage;
