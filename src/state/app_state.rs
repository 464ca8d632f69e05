// ============================================================================
// APP STATE - Estado global de la aplicación (composición de slices)
// ============================================================================

use serde::Serialize;

use crate::state::constructor_state::{ConstructorAction, ConstructorState};
use crate::state::feed_state::{FeedAction, FeedState};
use crate::state::ingredients_state::{IngredientsAction, IngredientsState};
use crate::state::order_state::{OrderAction, OrderState};
use crate::state::placed_orders_state::{PlacedOrdersAction, PlacedOrdersState};
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::state::user_state::{UserAction, UserState};

/// Estado raíz: cada slice es dueño de sus campos
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RootState {
    pub ingredients: IngredientsState,
    pub burger_constructor: ConstructorState,
    pub order: OrderState,
    pub feed: FeedState,
    pub placed_orders: PlacedOrdersState,
    pub user: UserState,
}

/// Toda intención que puede llegar al store
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Ingredients(IngredientsAction),
    Constructor(ConstructorAction),
    Order(OrderAction),
    Feed(FeedAction),
    PlacedOrders(PlacedOrdersAction),
    User(UserAction),
}

impl AppAction {
    /// Nombre corto para logs ("slice/acción")
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ingredients(a) => match a {
                IngredientsAction::FetchPending => "ingredients/pending",
                IngredientsAction::FetchFulfilled(_) => "ingredients/fulfilled",
                IngredientsAction::FetchRejected(_) => "ingredients/rejected",
            },
            Self::Constructor(a) => match a {
                ConstructorAction::Add(_) => "constructor/add",
                ConstructorAction::Remove { .. } => "constructor/remove",
                ConstructorAction::Move { .. } => "constructor/move",
                ConstructorAction::Clear => "constructor/clear",
            },
            Self::Order(a) => match a {
                OrderAction::SubmitPending => "order/submit/pending",
                OrderAction::SubmitFulfilled(_) => "order/submit/fulfilled",
                OrderAction::SubmitRejected(_) => "order/submit/rejected",
                OrderAction::LookupPending => "order/lookup/pending",
                OrderAction::LookupFulfilled(_) => "order/lookup/fulfilled",
                OrderAction::LookupRejected(_) => "order/lookup/rejected",
                OrderAction::ClearOrderData => "order/clear",
            },
            Self::Feed(a) => match a {
                FeedAction::FetchPending => "feed/pending",
                FeedAction::FetchFulfilled(_) => "feed/fulfilled",
                FeedAction::FetchRejected(_) => "feed/rejected",
            },
            Self::PlacedOrders(a) => match a {
                PlacedOrdersAction::FetchPending => "placed_orders/pending",
                PlacedOrdersAction::FetchFulfilled(_) => "placed_orders/fulfilled",
                PlacedOrdersAction::FetchRejected(_) => "placed_orders/rejected",
            },
            Self::User(a) => match a {
                UserAction::Pending => "user/pending",
                UserAction::Rejected(_) => "user/rejected",
                UserAction::UserLoaded(_) => "user/loaded",
                UserAction::Authenticated(_) => "user/authenticated",
                UserAction::AuthChecked => "user/auth_checked",
                UserAction::LoggedOut => "user/logged_out",
                UserAction::PasswordResetRequested => "user/password_reset_requested",
                UserAction::PasswordResetCompleted => "user/password_reset_completed",
            },
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident($action:ty)),* $(,)?) => {
        $(
            impl From<$action> for AppAction {
                fn from(action: $action) -> Self {
                    AppAction::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    Ingredients(IngredientsAction),
    Constructor(ConstructorAction),
    Order(OrderAction),
    Feed(FeedAction),
    PlacedOrders(PlacedOrdersAction),
    User(UserAction),
);

impl RootState {
    pub fn reduce(&mut self, action: AppAction) {
        match action {
            AppAction::Ingredients(a) => self.ingredients.reduce(a),
            AppAction::Constructor(a) => self.burger_constructor.reduce(a),
            AppAction::Order(a) => self.order.reduce(a),
            AppAction::Feed(a) => self.feed.reduce(a),
            AppAction::PlacedOrders(a) => self.placed_orders.reduce(a),
            AppAction::User(a) => self.user.reduce(a),
        }
    }
}

/// Contenedor de estado del proceso. Los clones comparten el mismo estado.
#[derive(Clone)]
pub struct AppStore {
    state: ReactiveState<RootState>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        Self {
            state: ReactiveState::new(state),
        }
    }

    /// Aplica la acción de forma síncrona y notifica a los subscribers
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        let action = action.into();
        log::debug!("🔁 [STORE] {}", action.name());
        self.state.update(|root| root.reduce(action));
    }

    pub fn snapshot(&self) -> RootState {
        self.state.snapshot()
    }

    /// Selector: lee una parte del estado sin clonar el resto
    pub fn select<R>(&self, selector: impl FnOnce(&RootState) -> R) -> R {
        self.state.with(selector)
    }

    pub fn subscribe(&self, callback: impl Fn(&RootState) + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
