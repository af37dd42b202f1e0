use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use manager_core::repository::error::DataLayerError;
use tokio::sync::RwLock;

use crate::document::StoreDocument;
use crate::mapper::to_data_layer_error;

/// JSON document store backing all repositories.
///
/// The document is loaded once and kept in memory behind a [`RwLock`].
/// Mutations run on a draft copy under the write lock and only replace the
/// in-memory document after the file write succeeded, so readers never see a
/// state that is not on disk.
pub struct FileStore {
    path: PathBuf,
    document: RwLock<StoreDocument>,
}

impl FileStore {
    /// Loads the store file, creating an empty document if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DataLayerError> {
        let path = path.into();

        let document = match tokio::fs::read(&path).await {
            Ok(content) => serde_json::from_slice(&content).map_err(to_data_layer_error)?,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty())
                {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(to_data_layer_error)?;
                }

                let document = StoreDocument::default();
                persist(&path, &document).await?;
                tracing::info!(path = %path.display(), "created empty store file");
                document
            }
            Err(error) => return Err(to_data_layer_error(error)),
        };

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    pub(crate) async fn read<T>(&self, read: impl FnOnce(&StoreDocument) -> T) -> T {
        let document = self.document.read().await;
        read(&document)
    }

    /// Applies `mutate` to a draft of the document and persists the result.
    /// When the mutation or the file write fails, the in-memory document and
    /// the store file both keep their previous state.
    pub(crate) async fn write<T>(
        &self,
        mutate: impl FnOnce(&mut StoreDocument) -> Result<T, DataLayerError>,
    ) -> Result<T, DataLayerError> {
        let mut document = self.document.write().await;

        let mut draft = document.clone();
        let value = mutate(&mut draft)?;
        persist(&self.path, &draft).await?;
        *document = draft;

        Ok(value)
    }
}

/// Serializes the whole document next to the store file and renames it over
/// the store path, so a crash mid-write never leaves a truncated document.
async fn persist(path: &Path, document: &StoreDocument) -> Result<(), DataLayerError> {
    let serialized = serde_json::to_vec_pretty(document).map_err(to_data_layer_error)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &serialized)
        .await
        .map_err(to_data_layer_error)?;
    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(to_data_layer_error)?;

    Ok(())
}
