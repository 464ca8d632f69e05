// ============================================================================
// USER STATE - Usuario actual + comprobación de sesión
// ============================================================================
// `is_auth_checked` pasa a true cuando termina la comprobación inicial y ya
// no vuelve a false: las rutas protegidas dependen de ello.
// ============================================================================

use serde::Serialize;

use crate::models::User;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserState {
    pub user: Option<User>,
    pub is_auth_checked: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub password_reset_requested: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UserAction {
    /// Inicio de cualquier petición de auth/perfil
    Pending,
    Rejected(String),
    /// GET/PATCH /auth/user: el servidor manda
    UserLoaded(User),
    /// Login o registro exitoso
    Authenticated(User),
    AuthChecked,
    LoggedOut,
    PasswordResetRequested,
    PasswordResetCompleted,
}

impl UserState {
    pub fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::Pending => {
                self.is_loading = true;
                self.error = None;
            }
            UserAction::Rejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
            UserAction::UserLoaded(user) => {
                self.is_loading = false;
                self.user = Some(user);
            }
            UserAction::Authenticated(user) => {
                self.is_loading = false;
                self.user = Some(user);
                self.is_auth_checked = true;
            }
            UserAction::AuthChecked => {
                self.is_auth_checked = true;
            }
            UserAction::LoggedOut => {
                self.is_loading = false;
                self.user = None;
                self.password_reset_requested = false;
            }
            UserAction::PasswordResetRequested => {
                self.is_loading = false;
                self.password_reset_requested = true;
            }
            UserAction::PasswordResetCompleted => {
                self.is_loading = false;
                self.password_reset_requested = false;
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
