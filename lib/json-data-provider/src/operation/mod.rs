use std::sync::Arc;

use crate::store::FileStore;

pub mod repository;


pub(crate) struct OperationProvider {
    pub store: Arc<FileStore>,
}
