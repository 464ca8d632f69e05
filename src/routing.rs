// ============================================================================
// ROUTING - Tabla de rutas + guardas de acceso
// ============================================================================
// La vista pregunta a `resolve` qué hacer con la ruta actual: mostrar un
// loader, renderizar o redirigir (recordando de dónde venía el usuario).
// ============================================================================

use std::fmt;

use crate::state::UserState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Constructor,
    Feed,
    FeedOrder(u64),
    Ingredient(String),
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Profile,
    ProfileOrders,
    ProfileOrder(u64),
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Solo sin sesión (login, registro...)
    OnlyUnauth,
    Protected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Todavía no se sabe si hay sesión
    Loading,
    Render,
    Redirect { to: Route, from: Option<Route> },
}

impl Route {
    /// Ignora query, fragmento y barras repetidas
    pub fn parse(path: &str) -> Self {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Constructor,
            ["feed"] => Self::Feed,
            ["feed", number] => parse_number(number).map_or(Self::NotFound, Self::FeedOrder),
            ["ingredients", id] => Self::Ingredient((*id).to_string()),
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["forgot-password"] => Self::ForgotPassword,
            ["reset-password"] => Self::ResetPassword,
            ["profile"] => Self::Profile,
            ["profile", "orders"] => Self::ProfileOrders,
            ["profile", "orders", number] => {
                parse_number(number).map_or(Self::NotFound, Self::ProfileOrder)
            }
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Constructor => "/".to_string(),
            Self::Feed => "/feed".to_string(),
            Self::FeedOrder(number) => format!("/feed/{}", number),
            Self::Ingredient(id) => format!("/ingredients/{}", id),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword => "/reset-password".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::ProfileOrders => "/profile/orders".to_string(),
            Self::ProfileOrder(number) => format!("/profile/orders/{}", number),
            Self::NotFound => "/404".to_string(),
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword => {
                RouteAccess::OnlyUnauth
            }
            Self::Profile | Self::ProfileOrders | Self::ProfileOrder(_) => RouteAccess::Protected,
            Self::Constructor
            | Self::Feed
            | Self::FeedOrder(_)
            | Self::Ingredient(_)
            | Self::NotFound => RouteAccess::Public,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_number(segment: &str) -> Option<u64> {
    segment.parse().ok()
}

/// `from` es la ruta recordada cuando se redirigió al login
pub fn resolve(route: &Route, user: &UserState, from: Option<&Route>) -> RouteDecision {
    let access = route.access();
    if access == RouteAccess::Public {
        return RouteDecision::Render;
    }
    if !user.is_auth_checked {
        return RouteDecision::Loading;
    }

    match (access, user.is_authenticated()) {
        (RouteAccess::Protected, false) => RouteDecision::Redirect {
            to: Route::Login,
            from: Some(route.clone()),
        },
        (RouteAccess::OnlyUnauth, true) => RouteDecision::Redirect {
            to: from.cloned().unwrap_or(Route::Constructor),
            from: None,
        },
        (RouteAccess::OnlyUnauth, false)
            if *route == Route::ResetPassword && !user.password_reset_requested =>
        {
            RouteDecision::Redirect {
                to: Route::ForgotPassword,
                from: None,
            }
        }
        _ => RouteDecision::Render,
    }
}
