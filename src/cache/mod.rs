// Cache module for GitHub responses.
// TTL-bounded key/value store over pluggable storage, with an injectable clock.

pub mod clock;
pub mod paths;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use paths::{cache_dir, log_path};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::Cache;
