// ============================================================================
// STORAGE - Almacenes clave/valor (cookie, localStorage, memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("almacenamiento no disponible: {0}")]
    Unavailable(String),
    #[error("error guardando '{key}': {message}")]
    Write { key: String, message: String },
}

/// Almacén clave/valor externo (cookie, localStorage, memoria)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage del navegador vía gloo-storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// document.cookie con `max-age` (el access token vive poco)
#[derive(Debug, Clone, Copy)]
pub struct CookieStore {
    max_age_secs: u32,
}

impl CookieStore {
    pub fn new(max_age_secs: u32) -> Self {
        Self { max_age_secs }
    }

    fn document() -> Result<HtmlDocument, StorageError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| StorageError::Unavailable("document.cookie".to_string()))
    }

    fn write(&self, header: &str, key: &str) -> Result<(), StorageError> {
        Self::document()?
            .set_cookie(header)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        find_cookie(&cookies, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write(&set_cookie_header(key, value, self.max_age_secs), key)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        // max-age=0 expira la cookie inmediatamente
        self.write(&set_cookie_header(key, "", 0), key)
    }
}

/// Almacén en memoria: tests y hosts sin navegador
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Construye el valor para `document.cookie = ...`
pub fn set_cookie_header(key: &str, value: &str, max_age_secs: u32) -> String {
    format!(
        "{}={}; path=/; max-age={}",
        key,
        encode_cookie_value(value),
        max_age_secs
    )
}

/// Busca `key` en una cadena "a=1; b=2"
pub fn find_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| decode_cookie_value(value))
        .filter(|value| !value.is_empty())
}

// Mismo formato que encodeURIComponent: "Bearer xxx" lleva espacio
fn encode_cookie_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

// Si la secuencia no es UTF-8 válida se devuelve tal cual
fn decode_cookie_value(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("refreshToken"), None);

        store.set("refreshToken", "abc").unwrap();
        assert_eq!(store.get("refreshToken").as_deref(), Some("abc"));

        store.remove("refreshToken").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.set("k", "v").unwrap();
        assert!(store.contains("k"));
    }

    #[test]
    fn cookie_header_encodes_bearer_token() {
        let header = set_cookie_header("accessToken", "Bearer abc.def", 1200);
        assert_eq!(header, "accessToken=Bearer%20abc.def; path=/; max-age=1200");
    }

    #[test]
    fn find_cookie_decodes_value_among_others() {
        let cookies = "theme=dark; accessToken=Bearer%20abc.def; lang=ru";
        assert_eq!(
            find_cookie(cookies, "accessToken").as_deref(),
            Some("Bearer abc.def")
        );
        assert_eq!(find_cookie(cookies, "missing"), None);
    }

    #[test]
    fn cookie_value_with_reserved_characters_survives_round_trip() {
        let header = set_cookie_header("accessToken", "Bearer a/b+c=", 1200);
        assert_eq!(
            header,
            "accessToken=Bearer%20a%2Fb%2Bc%3D; path=/; max-age=1200"
        );

        let cookie = header.split(';').next().unwrap_or_default();
        assert_eq!(
            find_cookie(cookie, "accessToken").as_deref(),
            Some("Bearer a/b+c=")
        );
    }

    #[test]
    fn find_cookie_decodes_standard_uri_escapes() {
        let cookies = "accessToken=Bearer%20a%2Fb%2Bc%3D; lang=ru";
        assert_eq!(
            find_cookie(cookies, "accessToken").as_deref(),
            Some("Bearer a/b+c=")
        );
    }

    #[test]
    fn expired_cookie_with_empty_value_is_absent() {
        assert_eq!(find_cookie("accessToken=", "accessToken"), None);
    }
}
