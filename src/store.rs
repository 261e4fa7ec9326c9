use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::config::Config;

/// Key-value store capability the HTTP handlers delegate to
///
/// The handlers issue exactly one call per request and keep no state of
/// their own, so anything implementing this trait can back the service.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key exists
    /// * `Ok(None)` - Key does not exist
    /// * `Err(_)` - Store operation failed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Verify the store is reachable and responsive
    async fn health_check(&self) -> Result<()>;
}

/// Shareable Redis client for use across async handlers
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Create a new Redis client from configuration
    ///
    /// The connection manager multiplexes every command over a single
    /// connection and transparently reconnects if it drops. Cloning it is
    /// cheap, so each command runs on its own clone.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())
            .context("Invalid REDIS_URL")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        tracing::info!("Successfully connected to Redis");

        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .context("Failed to execute SET against Redis")?;

        tracing::debug!("SET key: {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let reply: redis::Value = conn
            .get(key)
            .await
            .context("Failed to execute GET against Redis")?;
        let value = decode_value(&reply)?;

        tracing::debug!("GET key: {} (hit: {})", key, value.is_some());
        Ok(value)
    }

    /// Sends a PING and expects PONG back
    async fn health_check(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to execute PING against Redis")?;

        if reply == "PONG" {
            tracing::debug!("Health check PING succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Unexpected PING reply: {}", reply))
        }
    }
}

/// Turn a GET reply into text, replacing invalid UTF-8 rather than failing
///
/// Other clients may have written arbitrary bytes under a key; the value is
/// still relayed as its textual form. `Nil` means the key does not exist.
fn decode_value(reply: &redis::Value) -> Result<Option<String>> {
    let bytes: Option<Vec<u8>> = redis::from_redis_value(reply)
        .context("Unexpected reply type for GET")?;
    Ok(bytes.map(|b| String::from_utf8_lossy(&b).into_owned()))
}
