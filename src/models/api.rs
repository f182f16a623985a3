//! Response models shared by the ambient endpoints and error paths.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Body returned with every non-login error
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of tasks currently held in memory
    pub tasks: usize,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}
