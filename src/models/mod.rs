pub mod api;
pub mod ingredient;
pub mod order;
pub mod user;

pub use ingredient::{ConstructorIngredient, Ingredient, IngredientType};
pub use order::{FeedSnapshot, Order, OrderComposition, OrderLine, OrderStatus};
pub use user::{AuthSession, AuthTokens, LoginData, RegisterData, User, UserUpdate};
