//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Bare `$VAR` is left alone so base paths and URLs containing `$` survive.

use std::borrow::Cow;

use crate::ConfigError;

/// Unset variable referenced from a config field.
#[derive(Debug)]
struct MissingVar<'a> {
    field: &'a str,
    var: String,
}

impl From<MissingVar<'_>> for ConfigError {
    fn from(missing: MissingVar<'_>) -> Self {
        ConfigError::EnvVar {
            field: missing.field.to_owned(),
            message: format!("${{{}}} not set", missing.var),
        }
    }
}

/// Expand environment variable references in `value`.
///
/// `field` is the config path reported when a variable is unset
/// (e.g. `theme.social_links[0].link`).
pub(crate) fn expand_env<'v>(value: &'v str, field: &str) -> Result<Cow<'v, str>, ConfigError> {
    if !value.contains("${") {
        return Ok(Cow::Borrowed(value));
    }

    let lookup = |var: &str| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(MissingVar {
            field,
            var: var.to_owned(),
        }),
    };

    shellexpand::env_with_context(value, lookup).map_err(|e| e.cause.into())
}

/// Expand a config string field in place.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    let expanded = match expand_env(value, field)? {
        Cow::Borrowed(_) => return Ok(()),
        Cow::Owned(expanded) => expanded,
    };
    *value = expanded;
    Ok(())
}
