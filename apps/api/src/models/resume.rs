use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploads are analyzed inline, so the server itself only reports `Completed`;
/// the other states belong to the wire contract clients render.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    Pending,
    Analyzing,
    Completed,
    Error,
}

/// An uploaded resume as reported back to the client and listed in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub status: ResumeStatus,
}
