use crate::domain::ports::{CollectionStore, Record};
use crate::error::{HotelError, Result, StorageError};
use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Persists each collection as a pretty-printed JSON array in `<dir>/<name>.json`.
///
/// Saves are atomic: the new content is written to a temporary file in the
/// same directory and renamed over the old one, so readers see either the
/// previous or the new collection, never a torn write.
///
/// This struct is cheap to clone; clones share the directory path.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: Arc<PathBuf>,
}

impl JsonFileStore {
    /// Uses `dir` as the data directory. The directory is created on first save.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Arc::new(dir.as_ref().to_path_buf()),
        }
    }

    pub fn path_for<T: Record>(&self) -> PathBuf {
        self.dir.join(format!("{}.json", T::COLLECTION.name()))
    }
}

#[async_trait]
impl<T: Record> CollectionStore<T> for JsonFileStore {
    async fn load(&self) -> Result<Vec<T>> {
        let path = self.path_for::<T>();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HotelError::storage(T::COLLECTION, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|e| HotelError::storage(T::COLLECTION, e))?;
        tracing::debug!(
            collection = T::COLLECTION.name(),
            count = records.len(),
            "loaded collection"
        );
        Ok(records)
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| HotelError::storage(T::COLLECTION, e))?;
        let dir = self.dir.clone();
        let path = self.path_for::<T>();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &json))
            .await
            .map_err(|e| HotelError::storage(T::COLLECTION, StorageError::Task(e.to_string())))?
            .map_err(|e| HotelError::storage(T::COLLECTION, e))?;

        tracing::debug!(
            collection = T::COLLECTION.name(),
            count = records.len(),
            "saved collection"
        );
        Ok(())
    }
}

fn write_atomically(dir: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
