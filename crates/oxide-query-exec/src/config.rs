//! Connection configuration.

/// Default database URL: a private in-memory SQLite database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Default size of the connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings used to open a [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite connection URL or path.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Creates a configuration for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new("sqlite:app.db").max_connections(1);
        assert_eq!(config.url, "sqlite:app.db");
        assert_eq!(config.max_connections, 1);
    }
}
