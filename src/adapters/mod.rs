// Adapters layer: concrete DrawStore backends (in-memory, local files, Upstash Redis REST).

pub mod file_store;
pub mod memory_store;
pub mod upstash_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use upstash_store::UpstashStore;
