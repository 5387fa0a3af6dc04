use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value capability with expiry, used to keep draws retrievable by id.
///
/// Implementations may perform network I/O; callers own any retry policy.
#[async_trait]
pub trait DrawStore: Send + Sync {
    /// A zero `ttl` leaves the key absent for every later `get`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// `Ok(None)` when the key is absent or its retention window has passed.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<T: DrawStore + ?Sized> DrawStore for Box<T> {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        (**self).put(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn retention(&self) -> Duration;
    fn key_prefix(&self) -> &str;
    fn output_directory(&self) -> &str;
    fn export_formats(&self) -> &[String];
}
