use std::env;
use std::fs;
use std::path::Path;

// Variables que `config.rs` lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
];

fn main() {
    let env_file = Path::new(".env");

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    if !env_file.exists() {
        println!("cargo:warning=No hay archivo .env, se usan valores por defecto (ver .env.example)");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
                continue;
            }

            // El entorno del proceso tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
