//! State Storage Port - 客户端状态的持久化存储
//!
//! 按 key 保存一段 JSON 文本，类似浏览器 localStorage

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// State Storage Port
pub trait StateStoragePort: Send + Sync {
    /// 读取条目，不存在时返回 None
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入条目（覆盖）
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除条目
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
