use super::pagination::PageControl;
use super::store::ReviewBoard;
use chrono::{Local, NaiveDate};

/// "No results" placeholder shown instead of the table.
pub const NO_RESULTS: &str = "No reviews found matching your criteria.";

/// Renders a creation date relative to `today`: "Today", "Yesterday",
/// "N days ago" up to six days back, then the plain date ("Jan 15, 2024").
pub fn format_created(created: NaiveDate, today: NaiveDate) -> String {
    match (today - created).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{days} days ago"),
        _ => created.format("%b %-d, %Y").to_string(),
    }
}

pub struct BoardRenderer;

impl BoardRenderer {
    pub fn render(board: &ReviewBoard) -> String {
        Self::render_at(board, Local::now().date_naive())
    }

    pub fn render_at(board: &ReviewBoard, today: NaiveDate) -> String {
        let mut out = String::new();

        out.push_str("Data Reviews\n\n");

        let records = board.current_page_records();
        if records.is_empty() {
            out.push_str(NO_RESULTS);
            out.push('\n');
        } else {
            out.push_str(&format!(
                "{:<8} {:<20} {:<12} {:<9} {:<13} {}\n",
                "ID", "Data Source", "Status", "Priority", "Created", "Description"
            ));
            for review in records {
                out.push_str(&format!(
                    "{:<8} {:<20} {:<12} {:<9} {:<13} {}\n",
                    review.id,
                    review.data_source,
                    review.status.label(),
                    review.priority.label(),
                    format_created(review.created, today),
                    review.description
                ));
            }
        }

        if board.total_pages() > 1 {
            let mut parts: Vec<String> = Vec::new();
            if board.current_page() > 1 {
                parts.push("Previous".to_string());
            }
            for control in board.page_controls() {
                match control {
                    PageControl::Page {
                        number,
                        current: true,
                    } => parts.push(format!("[{number}]")),
                    PageControl::Page { number, .. } => parts.push(number.to_string()),
                    PageControl::Ellipsis => parts.push("...".to_string()),
                }
            }
            if board.current_page() < board.total_pages() {
                parts.push("Next".to_string());
            }
            out.push('\n');
            out.push_str(&parts.join(" "));
            out.push('\n');
        }

        if !board.feed().is_empty() {
            out.push_str("\nRecent Activity\n");
            for entry in board.feed().entries() {
                out.push_str(&format!(
                    "  [{}] {} ({})\n",
                    entry.kind, entry.title, entry.time
                ));
            }
        }

        out
    }
}
