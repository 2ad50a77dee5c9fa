use super::feed::{ActivityFeed, ActivityKind};
use super::pagination::{self, PageControl};
use crate::domain::{Review, ReviewDraft, ReviewId, ReviewStatus, format_review_id};
use chrono::Local;
use std::fmt;
use std::str::FromStr;

/// Status filter input: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReviewStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            ReviewStatus::from_str(s).map(Self::Only)
        }
    }
}

pub fn passes_filters(review: &Review, query: &str, filter: StatusFilter) -> bool {
    let matches_query = query.is_empty() || {
        let query = query.to_lowercase();
        review.id.to_lowercase().contains(&query)
            || review.data_source.to_lowercase().contains(&query)
            || review.description.to_lowercase().contains(&query)
    };
    let matches_status = match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => review.status == status,
    };
    matches_query && matches_status
}

/// Records passing both predicates, in original relative order.
pub fn filter_reviews(reviews: &[Review], query: &str, filter: StatusFilter) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| passes_filters(review, query, filter))
        .cloned()
        .collect()
}

/// Owns the review collection and its view state.
///
/// All mutation goes through the command methods; each one recomputes the
/// derived filtered view, so the view is always a pure function of
/// (collection, search query, status filter).
#[derive(Debug, Clone)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
    filtered: Vec<Review>,
    query: String,
    status_filter: StatusFilter,
    current_page: usize,
    page_size: usize,
    next_seq: u32,
    feed: ActivityFeed,
}

impl ReviewBoard {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    pub fn new(page_size: usize) -> Self {
        Self::with_reviews(Vec::new(), page_size)
    }

    pub fn with_reviews(reviews: Vec<Review>, page_size: usize) -> Self {
        // Identifiers continue past the highest existing one, so freed ids
        // are never handed out again.
        let next_seq = reviews
            .iter()
            .filter_map(|review| review.id.strip_prefix("REV-"))
            .filter_map(|digits| digits.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let mut board = Self {
            reviews,
            filtered: Vec::new(),
            query: String::new(),
            status_filter: StatusFilter::All,
            current_page: 1,
            page_size: page_size.max(1),
            next_seq,
            feed: ActivityFeed::new(),
        };
        board.recompute();
        board
    }

    /// Files a new review: next sequential id, pending status, creation date
    /// defaulting to today. The record is prepended and the view resets to
    /// page 1.
    pub fn add_review(&mut self, draft: ReviewDraft) -> ReviewId {
        let id = format_review_id(self.next_seq);
        self.next_seq += 1;
        let review = Review {
            id: id.clone(),
            data_source: draft.data_source,
            status: ReviewStatus::Pending,
            priority: draft.priority,
            created: draft.created.unwrap_or_else(|| Local::now().date_naive()),
            description: draft.description,
        };
        self.reviews.insert(0, review);
        self.feed
            .record(ActivityKind::Success, format!("New review {id} created"));
        self.recompute();
        id
    }

    /// Removes the review with the given id. Absent ids are a silent no-op;
    /// the return value reports whether anything was removed.
    pub fn delete_review(&mut self, id: &str) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|review| review.id != id);
        let removed = self.reviews.len() != before;
        if removed {
            self.feed
                .record(ActivityKind::Info, format!("Review {id} deleted"));
        }
        self.recompute();
        removed
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.recompute();
    }

    /// Navigates to a page, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// The slice of the filtered view shown on `page` (1-based). Out-of-range
    /// pages yield an empty slice rather than an error.
    pub fn page(&self, page: usize) -> &[Review] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1) * self.page_size;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn current_page_records(&self) -> &[Review] {
        self.page(self.current_page)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        pagination::page_controls(self.current_page, self.total_pages())
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn filtered(&self) -> &[Review] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    pub fn set_feed(&mut self, feed: ActivityFeed) {
        self.feed = feed;
    }

    // Every command funnels through here: the filter inputs changed or the
    // collection did, and both reset the view to the first page.
    fn recompute(&mut self) {
        self.filtered = filter_reviews(&self.reviews, &self.query, self.status_filter);
        self.current_page = 1;
    }
}
