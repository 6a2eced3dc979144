pub mod counters;
pub mod files;

pub use counters::{session_key, CounterStore, JsonCounterStore, MemoryCounterStore};
pub use files::{atomic_write, read_file, DataDir, DATA_DIR_ENV};
