//! Redacting wrapper for credentials
//!
//! The Nexus API key and the Discord bot token travel inside the
//! application config, which derives `Debug`. `Sensitive<T>` keeps them out
//! of `Debug` and `Display` output.

use std::fmt;

/// Wrapper for secret values that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use modiff_core_types::Sensitive;
///
/// let api_key = Sensitive::new("nexus-key".to_string());
/// assert_eq!(format!("{:?}", api_key), "***REDACTED***");
/// assert_eq!(api_key.expose(), "nexus-key");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value, only where it is put on the wire
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
