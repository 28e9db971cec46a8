/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Reads `env_var` and parses it, falling back to `default` when the variable
/// is unset or does not parse
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is absent or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Overwrites `target` with the value of `env_var` when the variable is set
///
/// Returns `true` when an override was applied.
pub fn override_from_env(env_var: &str, target: &mut String) -> bool {
    match env::var(env_var) {
        Ok(val) => {
            debug!("Using {} from environment", env_var);
            *target = val;
            true
        }
        Err(_) => false,
    }
}
