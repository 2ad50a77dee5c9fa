use std::fmt;

/// Kind of a feed entry, used for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Info,
    Success,
    Warning,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    /// Relative description of when the entry was recorded ("Just now",
    /// "2 minutes ago").
    pub time: String,
}

/// Bounded list of the most recent activity entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    pub const MAX_ENTRIES: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a feed from entries already ordered newest first, keeping at
    /// most [`Self::MAX_ENTRIES`] of them.
    pub fn with_entries(entries: Vec<ActivityEntry>) -> Self {
        let mut feed = Self { entries };
        feed.entries.truncate(Self::MAX_ENTRIES);
        feed
    }

    /// Prepends a fresh entry, dropping the oldest beyond the bound.
    pub fn record(&mut self, kind: ActivityKind, title: impl Into<String>) {
        self.push(ActivityEntry {
            kind,
            title: title.into(),
            time: "Just now".to_string(),
        });
    }

    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
