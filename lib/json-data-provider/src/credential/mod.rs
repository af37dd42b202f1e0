use std::sync::Arc;

use crate::store::FileStore;

pub mod repository;


pub(crate) struct CredentialProvider {
    pub store: Arc<FileStore>,
}
