//! Demo data shown when the board starts without any other source.

use super::feed::{ActivityEntry, ActivityFeed, ActivityKind};
use super::store::ReviewBoard;
use crate::domain::{Review, ReviewPriority, ReviewStatus};
use chrono::NaiveDate;

/// The twelve sample review records, newest last by creation date.
pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "REV-001".to_string(),
            data_source: "Customer Database".to_string(),
            status: ReviewStatus::Completed,
            priority: ReviewPriority::High,
            created: date(2024, 1, 15),
            description: "Quarterly customer data review completed successfully".to_string(),
        },
        Review {
            id: "REV-002".to_string(),
            data_source: "Financial Records".to_string(),
            status: ReviewStatus::InProgress,
            priority: ReviewPriority::Critical,
            created: date(2024, 1, 16),
            description: "Monthly financial records audit in progress".to_string(),
        },
        Review {
            id: "REV-003".to_string(),
            data_source: "Employee Files".to_string(),
            status: ReviewStatus::Pending,
            priority: ReviewPriority::Medium,
            created: date(2024, 1, 17),
            description: "Annual employee file review scheduled".to_string(),
        },
        Review {
            id: "REV-004".to_string(),
            data_source: "Transaction Logs".to_string(),
            status: ReviewStatus::Flagged,
            priority: ReviewPriority::Critical,
            created: date(2024, 1, 18),
            description: "Suspicious activity detected in transaction logs".to_string(),
        },
        Review {
            id: "REV-005".to_string(),
            data_source: "Backup Systems".to_string(),
            status: ReviewStatus::Completed,
            priority: ReviewPriority::High,
            created: date(2024, 1, 19),
            description: "Backup system integrity check completed".to_string(),
        },
        Review {
            id: "REV-006".to_string(),
            data_source: "API Endpoints".to_string(),
            status: ReviewStatus::InProgress,
            priority: ReviewPriority::Medium,
            created: date(2024, 1, 20),
            description: "Security review of API endpoints".to_string(),
        },
        Review {
            id: "REV-007".to_string(),
            data_source: "Cloud Storage".to_string(),
            status: ReviewStatus::Pending,
            priority: ReviewPriority::Low,
            created: date(2024, 1, 21),
            description: "Cloud storage access review pending".to_string(),
        },
        Review {
            id: "REV-008".to_string(),
            data_source: "Network Traffic".to_string(),
            status: ReviewStatus::Completed,
            priority: ReviewPriority::Medium,
            created: date(2024, 1, 22),
            description: "Network traffic analysis completed".to_string(),
        },
        Review {
            id: "REV-009".to_string(),
            data_source: "User Permissions".to_string(),
            status: ReviewStatus::InProgress,
            priority: ReviewPriority::High,
            created: date(2024, 1, 23),
            description: "User permission audit in progress".to_string(),
        },
        Review {
            id: "REV-010".to_string(),
            data_source: "Compliance Reports".to_string(),
            status: ReviewStatus::Pending,
            priority: ReviewPriority::Medium,
            created: date(2024, 1, 24),
            description: "GDPR compliance review scheduled".to_string(),
        },
        Review {
            id: "REV-011".to_string(),
            data_source: "Security Logs".to_string(),
            status: ReviewStatus::Completed,
            priority: ReviewPriority::High,
            created: date(2024, 1, 25),
            description: "Security log analysis completed".to_string(),
        },
        Review {
            id: "REV-012".to_string(),
            data_source: "Data Retention".to_string(),
            status: ReviewStatus::Flagged,
            priority: ReviewPriority::Critical,
            created: date(2024, 1, 26),
            description: "Data retention policy violation detected".to_string(),
        },
    ]
}

/// Demo activity entries, newest first.
pub fn sample_activities() -> Vec<ActivityEntry> {
    vec![
        activity(ActivityKind::Info, "New review created", "2 minutes ago"),
        activity(ActivityKind::Success, "Data backup completed", "15 minutes ago"),
        activity(
            ActivityKind::Warning,
            "High priority review flagged",
            "1 hour ago",
        ),
        activity(ActivityKind::Info, "System update installed", "2 hours ago"),
        activity(
            ActivityKind::Success,
            "Security scan completed",
            "3 hours ago",
        ),
    ]
}

/// A board preloaded with the sample reviews and activity entries.
pub fn sample_board(page_size: usize) -> ReviewBoard {
    let mut board = ReviewBoard::with_reviews(sample_reviews(), page_size);
    board.set_feed(ActivityFeed::with_entries(sample_activities()));
    board
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

fn activity(kind: ActivityKind, title: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        kind,
        title: title.to_string(),
        time: time.to_string(),
    }
}
