/// URL base del backend por defecto (sobrescribible con BURGER_API_URL)
pub const DEFAULT_API_URL: &str = "https://norma.nomoreparties.space/api";

/// Cookie con el access token ("Bearer ...")
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// localStorage: refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// localStorage: marca de "se pidió restablecer la contraseña"
pub const PASSWORD_RESET_KEY: &str = "resetPassword";

pub const DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS: u32 = 20 * 60;
