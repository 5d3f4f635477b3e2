use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const FORWARDED_KEYS: &[&str] = &["NEAR_ENV", "CONTRACT_NAME"];

fn main() {
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, solo claves conocidas
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');
                    if !FORWARDED_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown key '{}' in .env", key);
                        continue;
                    }

                    // La variable del entorno real tiene prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using testnet defaults. Copy .env.example to .env to change them.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
