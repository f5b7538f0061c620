//! Sort and filter view state.
//!
//! Both are derived from query parameters on every render and applied to
//! the listing in order: filter first, then sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::{EntryKind, FileOrDir};

// =============================================================================
// Sort Spec
// =============================================================================

/// Column a listing can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Modified,
    Size,
    Type,
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Name, Self::Modified, Self::Type, Self::Size];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Modified => "modified",
            Self::Size => "size",
            Self::Type => "type",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Modified => "Modified",
            Self::Size => "Size",
            Self::Type => "Type",
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "modified" => Ok(Self::Modified),
            "size" => Ok(Self::Size),
            "type" => Ok(Self::Type),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse `<field>:<direction>`. Anything unrecognized means "no sort".
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, direction) = raw.split_once(':')?;
        Some(Self::new(field.parse().ok()?, direction.parse().ok()?))
    }

    /// Sort after clicking `clicked`'s header.
    ///
    /// The active column toggles direction; any other column becomes active
    /// and keeps the current direction. An unsorted listing counts as
    /// `name:asc`, so the first click on Name gives `name:desc`.
    pub fn after_click(current: Option<SortSpec>, clicked: SortField) -> SortSpec {
        let current = current.unwrap_or(Self::new(SortField::Name, SortDirection::Asc));
        if current.field == clicked {
            Self::new(clicked, current.direction.toggled())
        } else {
            Self::new(clicked, current.direction)
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.as_str(), self.direction.as_str())
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Normalize a raw filter parameter: trimmed, lower-cased, `None` if blank.
pub fn filter_term(raw: Option<&str>) -> Option<String> {
    let term = raw?.trim();
    (!term.is_empty()).then(|| term.to_lowercase())
}

/// Case-insensitive substring match on the entry name.
pub fn matches_filter(entry: &FileOrDir, term: &str) -> bool {
    entry.name.to_lowercase().contains(&term.to_lowercase())
}

// =============================================================================
// Sorting
// =============================================================================

/// Key approximating locale collation: accents stripped, case folded.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style comparison. Ties on the collation key fall back to the raw
/// strings so the order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn compare(a: &FileOrDir, b: &FileOrDir, spec: SortSpec) -> Ordering {
    match spec.field {
        SortField::Name => spec.direction.apply(locale_compare(&a.name, &b.name)),
        SortField::Type => spec
            .direction
            .apply(locale_compare(a.kind.as_str(), b.kind.as_str())),
        // ISO-8601 strings order lexicographically the same as chronologically.
        SortField::Modified => spec.direction.apply(a.modified.cmp(&b.modified)),
        // Directories have no byte size and always sort last.
        SortField::Size => match (a.kind, b.kind) {
            (EntryKind::Dir, EntryKind::Dir) => Ordering::Equal,
            (EntryKind::Dir, EntryKind::File) => Ordering::Greater,
            (EntryKind::File, EntryKind::Dir) => Ordering::Less,
            (EntryKind::File, EntryKind::File) => spec.direction.apply(a.size.cmp(&b.size)),
        },
    }
}

/// Stable in-place sort.
pub fn sort_entries(entries: &mut [FileOrDir], spec: SortSpec) {
    entries.sort_by(|a, b| compare(a, b, spec));
}

/// Visible entries: filtered by `filter`, then ordered by `sort`. Without a
/// sort the original order is kept.
pub fn apply_view(
    entries: &[FileOrDir],
    filter: Option<&str>,
    sort: Option<SortSpec>,
) -> Vec<FileOrDir> {
    let mut visible: Vec<FileOrDir> = match filter {
        Some(term) => entries
            .iter()
            .filter(|e| matches_filter(e, term))
            .cloned()
            .collect(),
        None => entries.to_vec(),
    };

    if let Some(spec) = sort {
        sort_entries(&mut visible, spec);
    }

    visible
}
