use std::env;
use std::fs;
use std::path::Path;

// Solo las variables con este prefijo llegan a `option_env!` en config.rs
const ENV_PREFIX: &str = "BURGER_";

fn main() {
    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");

    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        // Quitar comillas opcionales: BURGER_API_URL="https://..."
        let value = value.trim().trim_matches('"');

        if !key.starts_with(ENV_PREFIX) {
            continue;
        }
        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
