use std::sync::Arc;

use crate::store::FileStore;

pub mod repository;


pub(crate) struct ParticipantProvider {
    pub store: Arc<FileStore>,
}
