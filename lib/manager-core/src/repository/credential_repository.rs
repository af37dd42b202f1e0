use shared_types::{CredentialId, ParticipantId};

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::credential::{Credential, CredentialListQuery};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Inserts the whole batch in one storage transaction.
    async fn create_credentials(&self, credentials: Vec<Credential>)
    -> Result<(), DataLayerError>;

    async fn get_credential(
        &self,
        participant_id: &ParticipantId,
        id: &CredentialId,
    ) -> Result<Option<Credential>, DataLayerError>;

    async fn get_credential_list(
        &self,
        query: CredentialListQuery,
    ) -> Result<GetListResponse<Credential>, DataLayerError>;

    /// Drops every credential of the participant and stores the given set
    /// instead, returning the stored records.
    async fn replace_credentials(
        &self,
        participant_id: &ParticipantId,
        credentials: Vec<Credential>,
    ) -> Result<Vec<Credential>, DataLayerError>;
}
