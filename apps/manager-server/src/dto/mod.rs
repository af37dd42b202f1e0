pub mod common;
pub mod error;
pub(crate) mod response;
