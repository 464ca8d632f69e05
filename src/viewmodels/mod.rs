// ============================================================================
// VIEWMODELS - Operaciones asíncronas: pending -> API -> fulfilled/rejected
// ============================================================================

pub mod catalog_viewmodel;
pub mod feed_viewmodel;
pub mod order_viewmodel;
pub mod user_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
pub use feed_viewmodel::FeedViewModel;
pub use order_viewmodel::OrderViewModel;
pub use user_viewmodel::UserViewModel;
