use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, SortMode};

/// Accepted range for `ARABUL_REQUEST_TIMEOUT_SECS`.
pub const REQUEST_TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 5..=15;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let api_base_url = require("ARABUL_API_BASE_URL")?;
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(invalid(
            "ARABUL_API_BASE_URL",
            format!("expected an http(s) URL, got '{api_base_url}'"),
        ));
    }

    let env = parse_environment(&or_default("ARABUL_ENV", "development"))?;
    let log_level = or_default("ARABUL_LOG_LEVEL", "info");

    let request_timeout_secs = or_default("ARABUL_REQUEST_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("ARABUL_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if !REQUEST_TIMEOUT_RANGE_SECS.contains(&request_timeout_secs) {
        return Err(invalid(
            "ARABUL_REQUEST_TIMEOUT_SECS",
            format!(
                "{request_timeout_secs} is outside {}..={}",
                REQUEST_TIMEOUT_RANGE_SECS.start(),
                REQUEST_TIMEOUT_RANGE_SECS.end()
            ),
        ));
    }

    let user_agent = or_default("ARABUL_USER_AGENT", "AraBul-Mobile-App/1.0");

    let default_sort = or_default("ARABUL_DEFAULT_SORT", "nearest")
        .parse::<SortMode>()
        .map_err(|e| invalid("ARABUL_DEFAULT_SORT", e.to_string()))?;

    Ok(AppConfig {
        api_base_url,
        env,
        log_level,
        request_timeout_secs,
        user_agent,
        default_sort,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ARABUL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
