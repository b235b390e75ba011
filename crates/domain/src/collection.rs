use std::fmt::{Display, Formatter};

/// Stable reference to persisted image bytes: a local file path or a remote
/// URL, depending on which collection holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Recent,
    Trashed,
    Cloud,
    TrashedCloud,
}

impl CollectionName {
    pub const ALL: [Self; 4] = [Self::Recent, Self::Trashed, Self::Cloud, Self::TrashedCloud];

    /// Key the index list is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Trashed => "trashed",
            Self::Cloud => "cloud",
            Self::TrashedCloud => "trashed_cloud",
        }
    }
}

impl Display for CollectionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Slice of an index for 1-based page numbers. Pages past the end are empty,
/// never an error; page or page size of zero selects nothing.
pub fn page_slice<T>(entries: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= entries.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(entries.len());
    &entries[start..end]
}
