mod credential_id;
mod macros;
mod operation_id;
mod participant_id;
mod tenant_id;

pub use credential_id::CredentialId;
pub use operation_id::OperationId;
pub use participant_id::ParticipantId;
pub use tenant_id::TenantId;
