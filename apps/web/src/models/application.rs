use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned application identifier.
pub type ApplicationId = i64;

/// One lifecycle stage of a tracked application.
///
/// The set is closed and ordered: `ALL` drives both the column order of the
/// dashboard and the options offered by each card's status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Applied,
    Interview,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Applied, Status::Interview, Status::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Rejected => "Rejected",
        }
    }

    /// Looks up a wire value. Unknown stages yield `None`.
    pub fn parse(value: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A tracked job application as served by `GET /api/dashboard`.
///
/// `status` stays a raw, possibly absent string: the server may hand back
/// stages this client does not know, and those must be dropped at grouping
/// time rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Application {
    pub fn known_status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub id: ApplicationId,
    pub status: Status,
}
