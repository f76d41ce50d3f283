use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    /// JSON-encoded quiz array, already validated server-side.
    pub quiz: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub quiz_generation: &'static str,
}
