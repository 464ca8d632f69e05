// ============================================================================
// STATE MODULE - Slices + store raíz con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod ingredients_state;
pub mod constructor_state;
pub mod order_state;
pub mod feed_state;
pub mod placed_orders_state;
pub mod user_state;
pub mod app_state;

pub use reactivity::*;
pub use ingredients_state::*;
pub use constructor_state::*;
pub use order_state::*;
pub use feed_state::*;
pub use placed_orders_state::*;
pub use user_state::*;
pub use app_state::*;
