/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads and parses an environment variable
///
/// Blank values count as missing, so `CMDBUILD_URL=` behaves like an unset variable.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if set, non-blank and valid, `None` otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("{} is set but empty, ignoring it", env_var);
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {}={}: {:?}", env_var, trimmed, e);
            None
        }
    }
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable is missing, blank or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    get_env_or_none(env_var).unwrap_or(default)
}
