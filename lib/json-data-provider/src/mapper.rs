use manager_core::repository::error::DataLayerError;

pub(crate) fn to_data_layer_error(error: impl Into<anyhow::Error>) -> DataLayerError {
    DataLayerError::Db(error.into())
}
