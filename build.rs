use std::env;
use std::fs;
use std::path::Path;

// Carga variables de .env (BACKEND_URL, PHOTO_URL) como rustc-env para que
// config.rs las resuelva con option_env! en tiempo de compilación.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using localhost backend URLs.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
