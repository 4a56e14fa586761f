use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::ChatResponse;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
    pub index_name: String,
}

/// Document query service that produces answers. Transport, auth and retries
/// belong to the implementor.
pub trait QueryBackend {
    fn query(&self, request: &QueryRequest) -> Result<ChatResponse, AppError>;
}
