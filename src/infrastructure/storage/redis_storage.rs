use crate::config::RedisConfig;
use crate::domain::KeyValueStorage;
use anyhow::{Context, Result};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

/// Redis-backed storage. Each document is a plain string value under
/// `<key_prefix><key>`.
pub struct RedisStorage {
    // ---
    client: Client,
    key_prefix: String,
}

impl RedisStorage {
    // ---
    pub fn new(config: &RedisConfig) -> Result<Self> {
        // ---
        let client = Client::open(config.url.clone())
            .with_context(|| format!("invalid Redis URL: {}", config.url))?;

        Ok(Self {
            client,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.key_prefix)
    }

    /// Creates a new multiplexed Redis connection.
    async fn get_conn(&self) -> Result<MultiplexedConnection> {
        // ---
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|err| {
                tracing::error!("Failed to connect to Redis: {:?}", err);
                anyhow::Error::new(err).context("failed to connect to Redis")
            })
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for RedisStorage {
    // ---
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        // ---
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: () = conn.set(self.key(key), value).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        // ---
        let mut conn = self.get_conn().await?;
        let _: u64 = conn.del(self.key(key)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn config(url: &str) -> RedisConfig {
        RedisConfig {
            url: url.to_string(),
            key_prefix: "deckstore-test:".to_string(),
        }
    }

    #[test]
    fn keys_are_prefixed() {
        // ---
        let storage = RedisStorage::new(&config("redis://127.0.0.1:6379")).unwrap();
        assert_eq!(storage.key("decks"), "deckstore-test:decks");
    }

    #[test]
    fn malformed_url_is_rejected() {
        // ---
        assert!(RedisStorage::new(&config("not a url")).is_err());
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error_not_a_panic() {
        // ---
        let storage = RedisStorage::new(&config("redis://invalid-host:6379")).unwrap();
        assert!(storage.get_item("decks").await.is_err());
    }
}
