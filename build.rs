use std::env;
use std::fs;
use std::path::Path;

/// Only keys with this prefix are forwarded to `option_env!` in `src/config.rs`.
const ENV_PREFIX: &str = "BOOKINGS_";

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

                let Some((key, value)) = line.split_once('=') else {
                    println!("cargo:warning=Ignoring malformed .env line: {}", line);
                    continue;
                };

                let key = key.trim();
                let value = value.trim().trim_matches('"');
                if !key.starts_with(ENV_PREFIX) {
                    continue;
                }

                // Real environment wins over .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (see .env.example).");
    }

    for key in ["BOOKINGS_API_URL", "BOOKINGS_USER_ID", "BOOKINGS_LOG_LEVEL"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
