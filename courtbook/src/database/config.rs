//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for database connections.
///
/// This struct contains all parameters needed to open and configure
/// a database connection, including the database file path, timeout
/// settings, and access modes.
///
/// # Examples
///
/// ```
/// use courtbook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/courtbook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/courtbook.db");
    /// assert!(config.auto_create);
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the connection will wait on a
    /// locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtbook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/courtbook.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            DatabaseConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(10000));
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

}
