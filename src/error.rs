use thiserror::Error;

use crate::suggest::SuggestError;

#[derive(Debug, Error)]
pub enum BuscaError {
    #[error("Invalid suggest endpoint: {0}")]
    Endpoint(#[source] SuggestError),

    #[error("max_items must be at least 1")]
    NoItems,
}
