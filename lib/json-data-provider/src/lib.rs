#![cfg_attr(feature = "strict", deny(warnings))]

//! JSON-file-backed implementation of the manager-core repository traits.
//!
//! All entities live in one document behind a [`FileStore`]; every mutation
//! rewrites the file atomically, so the store survives crashes and can be
//! inspected or seeded by hand.

use std::sync::Arc;

use manager_core::repository::DataRepository;
use manager_core::repository::credential_repository::CredentialRepository;
use manager_core::repository::operation_repository::OperationRepository;
use manager_core::repository::participant_repository::ParticipantRepository;

use crate::credential::CredentialProvider;
use crate::operation::OperationProvider;
use crate::participant::ParticipantProvider;

pub mod credential;
pub mod operation;
pub mod participant;

mod document;
mod mapper;
mod store;

#[cfg(test)]
pub(crate) mod test_utilities;

pub use store::FileStore;

#[derive(Clone)]
pub struct DataLayer {
    participant_repository: Arc<dyn ParticipantRepository>,
    credential_repository: Arc<dyn CredentialRepository>,
    operation_repository: Arc<dyn OperationRepository>,
}

impl DataLayer {
    pub fn build(store: Arc<FileStore>) -> Self {
        Self {
            participant_repository: Arc::new(ParticipantProvider {
                store: store.clone(),
            }),
            credential_repository: Arc::new(CredentialProvider {
                store: store.clone(),
            }),
            operation_repository: Arc::new(OperationProvider { store }),
        }
    }
}

impl DataRepository for DataLayer {
    fn get_participant_repository(&self) -> Arc<dyn ParticipantRepository> {
        self.participant_repository.clone()
    }

    fn get_credential_repository(&self) -> Arc<dyn CredentialRepository> {
        self.credential_repository.clone()
    }

    fn get_operation_repository(&self) -> Arc<dyn OperationRepository> {
        self.operation_repository.clone()
    }
}
