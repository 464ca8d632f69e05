// ============================================================================
// FEED STATE - Feed global de pedidos + contadores
// ============================================================================

use serde::Serialize;

use crate::models::{FeedSnapshot, Order, OrderStatus};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeedState {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedAction {
    FetchPending,
    FetchFulfilled(FeedSnapshot),
    FetchRejected(String),
}

impl FeedState {
    pub fn reduce(&mut self, action: FeedAction) {
        match action {
            FeedAction::FetchPending => {
                self.is_loading = true;
                self.error = None;
            }
            FeedAction::FetchFulfilled(snapshot) => {
                self.is_loading = false;
                self.orders = snapshot.orders;
                self.total = snapshot.total;
                self.total_today = snapshot.total_today;
            }
            FeedAction::FetchRejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
        }
    }

    /// Números para las columnas "listos" / "en preparación"
    pub fn order_numbers_with_status(&self, status: OrderStatus, limit: usize) -> Vec<u64> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.number)
            .take(limit)
            .collect()
    }

    pub fn find(&self, number: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::order_with_status;

    fn snapshot() -> FeedSnapshot {
        FeedSnapshot {
            orders: vec![
                order_with_status(10, OrderStatus::Done),
                order_with_status(11, OrderStatus::Pending),
                order_with_status(12, OrderStatus::Done),
            ],
            total: 900,
            total_today: 30,
        }
    }

    #[test]
    fn fulfilled_replaces_orders_and_counters() {
        let mut state = FeedState::default();
        state.reduce(FeedAction::FetchPending);
        assert!(state.is_loading);

        state.reduce(FeedAction::FetchFulfilled(snapshot()));

        assert!(!state.is_loading);
        assert_eq!(state.orders.len(), 3);
        assert_eq!(state.total, 900);
        assert_eq!(state.total_today, 30);
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let mut state = FeedState::default();
        state.reduce(FeedAction::FetchRejected("offline".to_string()));

        state.reduce(FeedAction::FetchPending);

        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejection_keeps_previous_feed() {
        let mut state = FeedState::default();
        state.reduce(FeedAction::FetchFulfilled(snapshot()));
        state.reduce(FeedAction::FetchPending);
        state.reduce(FeedAction::FetchRejected("offline".to_string()));

        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_eq!(state.orders.len(), 3);
        assert_eq!(state.total, 900);
    }

    #[test]
    fn status_columns_respect_limit() {
        let mut state = FeedState::default();
        state.reduce(FeedAction::FetchFulfilled(snapshot()));

        assert_eq!(state.order_numbers_with_status(OrderStatus::Done, 20), vec![10, 12]);
        assert_eq!(state.order_numbers_with_status(OrderStatus::Done, 1), vec![10]);
        assert_eq!(state.order_numbers_with_status(OrderStatus::Pending, 20), vec![11]);
        assert_eq!(state.find(11).map(|o| o.status), Some(OrderStatus::Pending));
        assert_eq!(state.find(99), None);
    }
}
