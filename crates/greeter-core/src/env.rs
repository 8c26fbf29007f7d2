//! Boolean environment toggles

/// Environment variable that switches on debug mode
pub const DEBUG_VAR: &str = "DEBUG";

/// Values accepted as "enabled", compared case-insensitively
pub const TRUTHY_VALUES: [&str; 3] = ["1", "true", "yes"];

/// Check whether a raw environment value counts as enabled.
///
/// Surrounding whitespace is not stripped: `" true"` is not truthy.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

/// Read a boolean toggle from the process environment.
///
/// Unset and non-unicode values are treated as disabled.
pub fn flag(name: &str) -> bool {
    std::env::var(name).map(|v| is_truthy(&v)).unwrap_or(false)
}
