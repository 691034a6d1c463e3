//! Memory Layer - In-Memory State Storage
//!
//! 不落盘的客户端状态存储，进程退出即丢失

mod state_storage;

pub use state_storage::InMemoryStateStorage;
