// ============================================================================
// USER VIEWMODEL - Sesión, perfil y recuperación de contraseña
// ============================================================================
// Los tokens solo se guardan tras un login/registro exitoso. El logout borra
// credenciales y usuario aunque el servidor falle.
// ============================================================================

use std::rc::Rc;

use crate::models::{AuthSession, LoginData, RegisterData, User, UserUpdate};
use crate::services::{ApiError, BurgerApi, SessionStorage};
use crate::state::{AppStore, UserAction};

const FETCH_USER_ERROR: &str = "Error cargando el usuario";
const LOGIN_ERROR: &str = "Error iniciando sesión";
const REGISTER_ERROR: &str = "Error en el registro";
const LOGOUT_ERROR: &str = "Error cerrando sesión";
const UPDATE_ERROR: &str = "Error actualizando el perfil";
const FORGOT_PASSWORD_ERROR: &str = "Error solicitando el cambio de contraseña";
const RESET_PASSWORD_ERROR: &str = "Error cambiando la contraseña";

pub struct UserViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    session: SessionStorage,
}

impl UserViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>, session: SessionStorage) -> Self {
        Self {
            store,
            api,
            session,
        }
    }

    /// Comprobación inicial al arrancar. Termina siempre con `is_auth_checked`.
    pub async fn check_session(&self) {
        if self.session.password_reset_requested() {
            self.store.dispatch(UserAction::PasswordResetRequested);
        }

        if self.session.has_session() {
            log::info!("🔑 [AUTH] Token encontrado, cargando usuario...");
            if let Err(e) = self.fetch_user().await {
                log::warn!("⚠️ [AUTH] Sesión guardada no válida: {}", e);
            }
        } else {
            log::info!("ℹ️ [AUTH] Sin sesión guardada");
        }

        self.store.dispatch(UserAction::AuthChecked);
    }

    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        self.store.dispatch(UserAction::Pending);
        let result = match self.session.access_token() {
            Some(token) => self.api.get_user(&token).await,
            None => Err(ApiError::MissingCredentials),
        };
        self.settle(result, UserAction::UserLoaded, FETCH_USER_ERROR)
    }

    pub async fn login(&self, data: &LoginData) -> Result<User, ApiError> {
        log::info!("🔐 [AUTH] Login de {}", data.email);
        self.store.dispatch(UserAction::Pending);
        let result = self.persist_session(self.api.login(data).await);
        self.settle(result, UserAction::Authenticated, LOGIN_ERROR)
    }

    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        log::info!("📝 [AUTH] Registro de {}", data.email);
        self.store.dispatch(UserAction::Pending);
        let result = self.persist_session(self.api.register(data).await);
        self.settle(result, UserAction::Authenticated, REGISTER_ERROR)
    }

    /// Devuelve el resultado del servidor; el estado local se limpia igual
    pub async fn logout(&self) -> Result<(), ApiError> {
        log::info!("🚪 [AUTH] Cerrando sesión...");
        self.store.dispatch(UserAction::Pending);

        let server = match self.session.refresh_token() {
            Some(token) => self.api.logout(&token).await,
            None => Ok(()),
        };

        if let Err(e) = self.session.clear_session() {
            log::error!("❌ [AUTH] No se pudieron borrar las credenciales: {}", e);
        }
        self.store.dispatch(UserAction::LoggedOut);

        if let Err(e) = &server {
            log::warn!("⚠️ [AUTH] {}: {}", LOGOUT_ERROR, e);
            self.store
                .dispatch(UserAction::Rejected(format!("{}: {}", LOGOUT_ERROR, e)));
        }
        server
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.store.dispatch(UserAction::Pending);
        let result = if update.is_empty() {
            Err(ApiError::InvalidRequest("no hay cambios".to_string()))
        } else {
            match self.session.access_token() {
                Some(token) => self.api.update_user(&token, update).await,
                None => Err(ApiError::MissingCredentials),
            }
        };
        self.settle(result, UserAction::UserLoaded, UPDATE_ERROR)
    }

    /// Pide el código por email y habilita /reset-password
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.store.dispatch(UserAction::Pending);
        let result = match self.api.forgot_password(email).await {
            Ok(()) => self.session.mark_password_reset().map_err(ApiError::from),
            Err(e) => Err(e),
        };
        self.settle(result, |_| UserAction::PasswordResetRequested, FORGOT_PASSWORD_ERROR)
    }

    pub async fn reset_password(&self, password: &str, token: &str) -> Result<(), ApiError> {
        self.store.dispatch(UserAction::Pending);
        let result = match self.api.reset_password(password, token).await {
            Ok(()) => self.session.clear_password_reset().map_err(ApiError::from),
            Err(e) => Err(e),
        };
        self.settle(result, |_| UserAction::PasswordResetCompleted, RESET_PASSWORD_ERROR)
    }

    fn persist_session(&self, result: Result<AuthSession, ApiError>) -> Result<User, ApiError> {
        let session = result?;
        if let Err(e) = self.session.save_tokens(&session.tokens) {
            // Nada de credenciales a medias
            if let Err(rollback) = self.session.clear_tokens() {
                log::error!(
                    "❌ [AUTH] No se pudieron borrar credenciales parciales: {}",
                    rollback
                );
            }
            return Err(e.into());
        }
        Ok(session.user)
    }

    fn settle<T: Clone>(
        &self,
        result: Result<T, ApiError>,
        on_success: impl FnOnce(T) -> UserAction,
        failure: &str,
    ) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                self.store.dispatch(on_success(value.clone()));
                Ok(value)
            }
            Err(e) => {
                log::error!("❌ [AUTH] {}: {}", failure, e);
                self.store
                    .dispatch(UserAction::Rejected(format!("{}: {}", failure, e)));
                Err(e)
            }
        }
    }
}
