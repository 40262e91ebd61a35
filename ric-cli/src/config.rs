//! Environment loading
//!
//! Priority order (highest to lowest):
//! 1. Flags on the command line
//! 2. Variables already set in the environment
//! 3. ./.env
//! 4. ~/.ric/.env

use std::path::PathBuf;

/// Get the ric config directory path (~/.ric)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ric"))
}

/// Load `.env` files. dotenvy never overwrites variables that are already
/// set, so loading the local file first gives it precedence.
///
/// Runs before tracing is initialised, so the sources are returned for the
/// caller to log.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_dot_ric() {
        if let Some(path) = config_dir() {
            assert!(path.ends_with(".ric"));
        }
    }

    #[test]
    fn load_dotenv_doesnt_panic() {
        // Should never panic, even if no .env exists
        let _ = load_dotenv();
    }
}
