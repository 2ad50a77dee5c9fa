use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a review record (`REV-NNN`).
pub type ReviewId = String;

/// Builds a review identifier from its sequence number, zero-padded to
/// three digits (`REV-001`, `REV-013`, ...).
pub fn format_review_id(seq: u32) -> ReviewId {
    format!("REV-{seq:03}")
}

/// A unit of tracked data-review work shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier, assigned sequentially and never reused.
    pub id: ReviewId,
    /// Label of the data source under review (e.g. "Customer Database").
    pub data_source: String,
    /// Current status of the review.
    #[serde(default)]
    pub status: ReviewStatus,
    /// Priority assigned when the review was filed.
    pub priority: ReviewPriority,
    /// Calendar date the review was created.
    pub created: NaiveDate,
    /// Free-text description.
    pub description: String,
}

/// Fields supplied when filing a new review from the board form.
///
/// Status is not part of the form: new reviews always start out pending.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub data_source: String,
    pub priority: ReviewPriority,
    pub description: String,
    /// Creation date override; defaults to the current date when `None`.
    pub created: Option<NaiveDate>,
}

/// Lifecycle status of a review record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    /// Not started yet.
    #[default]
    Pending,
    /// Actively being worked.
    InProgress,
    /// Finished without findings.
    Completed,
    /// Needs attention; something suspicious was found.
    Flagged,
}

impl ReviewStatus {
    /// Human-readable label as shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Flagged => "Flagged",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Flagged => write!(f, "flagged"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "flagged" => Ok(Self::Flagged),
            _ => Err(format!("unknown review status: {s}")),
        }
    }
}

/// Priority assigned to a review record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl ReviewPriority {
    /// Human-readable label (capitalized variant name).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for ReviewPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for ReviewPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("unknown review priority: {s}")),
        }
    }
}
