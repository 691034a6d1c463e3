//! Sled-based Client State Storage

use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{StateStoragePort, StorageError};
use crate::application::store::AppStore;
use crate::config::StorageConfig;

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStorageConfig {
    /// 数据库路径
    pub db_path: String,
}

impl From<&StorageConfig> for SledStorageConfig {
    fn from(config: &StorageConfig) -> Self {
        Self {
            db_path: config.db_path.clone(),
        }
    }
}

impl Default for SledStorageConfig {
    fn default() -> Self {
        Self {
            db_path: "data/client-state.sled".to_string(),
        }
    }
}

/// Sled 客户端状态存储
///
/// 条目以 `storage:{key}` 保存 UTF-8 JSON 文本，每次写入后 flush
pub struct SledStateStorage {
    db: Db,
}

impl SledStateStorage {
    pub fn new(config: &SledStorageConfig) -> Result<Self, StorageError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledStateStorage initialized");

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let config = SledStorageConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn entry_key(key: &str) -> String {
        format!("storage:{}", key)
    }
}

impl StateStoragePort for SledStateStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(Self::entry_key(key)) {
            Ok(Some(data)) => String::from_utf8(data.to_vec())
                .map(Some)
                .map_err(|e| StorageError::SerializationError(e.to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::DatabaseError(e.to_string())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(Self::entry_key(key), value.as_bytes())
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        tracing::trace!(key = %key, size_bytes = value.len(), "Client state saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .remove(Self::entry_key(key))
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

/// 按存储配置打开持久化的客户端状态容器
///
/// 数据库目录不存在时自动创建，随后从 `config.key` 条目恢复状态
pub fn open_client_store(config: &StorageConfig) -> Result<Arc<AppStore>, StorageError> {
    if let Some(parent) = Path::new(&config.db_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::DatabaseError(e.to_string()))?;
    }

    let storage = SledStateStorage::new(&SledStorageConfig::from(config))?.arc();
    Ok(AppStore::new(storage, config.key.as_str()).arc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::DEFAULT_STORAGE_KEY;
    use crate::domain::User;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_remove() {
        let dir = tempdir().unwrap();
        let storage = SledStateStorage::open(dir.path().join("test.sled")).unwrap();

        assert_eq!(storage.load("app-storage").unwrap(), None);

        storage.save("app-storage", r#"{"state":{},"version":0}"#).unwrap();
        assert_eq!(
            storage.load("app-storage").unwrap().as_deref(),
            Some(r#"{"state":{},"version":0}"#)
        );

        storage.remove("app-storage").unwrap();
        assert_eq!(storage.load("app-storage").unwrap(), None);
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.sled");

        {
            let storage = SledStateStorage::open(&path).unwrap().arc();
            let store = AppStore::new(storage, DEFAULT_STORAGE_KEY);
            store.set_user(Some(User::new("u1", "choi")));
            store.set_selected_tab("stadiums");
            store.set_sidebar_open(true);
        }

        let storage = SledStateStorage::open(&path).unwrap().arc();
        let state = AppStore::new(storage, DEFAULT_STORAGE_KEY).snapshot();

        assert!(state.user.is_authenticated);
        assert_eq!(state.user.user.map(|u| u.name), Some("choi".to_string()));
        assert_eq!(state.ui.selected_tab, "stadiums");
        assert!(!state.ui.sidebar_open);
    }

    #[test]
    fn test_open_client_store_from_config() {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            db_path: dir
                .path()
                .join("nested/client-state.sled")
                .to_string_lossy()
                .to_string(),
            key: "portal-state".to_string(),
        };

        {
            let store = open_client_store(&config).unwrap();
            store.set_search_input("울산");
        }

        {
            let store = open_client_store(&config).unwrap();
            assert_eq!(store.select(|s| s.ui.search_input.clone()), "울산");
        }

        let storage = SledStateStorage::new(&SledStorageConfig::from(&config)).unwrap();
        assert!(storage.load("portal-state").unwrap().is_some());
        assert_eq!(storage.load(DEFAULT_STORAGE_KEY).unwrap(), None);
    }
}
