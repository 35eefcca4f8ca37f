//! Filter criteria parsed from user input.

use agromarket_types::{Availability, Category, Priority};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

/// One criterion: match everything, match a single value, or a value that
/// did not parse.
///
/// An unrecognized value can never equal a record field, so it matches
/// nothing instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FromStr> Selector<T> {
    /// Parses raw input. Empty input and `"all"` select everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Self::All;
        }
        match trimmed.parse() {
            Ok(value) => Self::Only(value),
            Err(_) => Self::Unrecognized(trimmed.to_string()),
        }
    }
}

impl<T> Selector<T> {
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Evaluates the criterion, consulting `pred` only for a concrete value.
    pub fn allows(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => pred(value),
            Self::Unrecognized(_) => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => fmt::Display::fmt(value, f),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Selector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// The full set of filter parameters for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub status: Selector<Availability>,
    pub category: Selector<Category>,
    pub priority: Selector<Priority>,
    /// Free-text query matched against name and description.
    pub search: String,
}

impl FilterCriteria {
    /// Builds criteria from raw form values.
    #[must_use]
    pub fn from_raw(status: &str, category: &str, priority: &str, search: &str) -> Self {
        Self {
            status: Selector::parse(status),
            category: Selector::parse(category),
            priority: Selector::parse(priority),
            search: search.to_string(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: Availability) -> Self {
        self.status = Selector::Only(status);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Selector::Only(category);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Selector::Only(priority);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Trimmed, lower-cased search text, or `None` when there is nothing to match.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// True when every criterion is a pass-through.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_all()
            && self.category.is_all()
            && self.priority.is_all()
            && self.search_term().is_none()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status={} category={} priority={} search={:?}",
            self.status, self.category, self.priority, self.search
        )
    }
}
