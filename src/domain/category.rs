// SPDX-License-Identifier: MPL-2.0
//! Quiz categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of categories served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Flags,
    Animals,
    Words,
}

impl CategoryId {
    pub const ALL: [CategoryId; 3] = [CategoryId::Flags, CategoryId::Animals, CategoryId::Words];

    /// Identifier as used in URLs and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Flags => "flags",
            CategoryId::Animals => "animals",
            CategoryId::Words => "words",
        }
    }

    /// Translation key of the localized display name.
    #[must_use]
    pub fn name_key(self) -> &'static str {
        match self {
            CategoryId::Flags => "category-name-flags",
            CategoryId::Animals => "category-name-animals",
            CategoryId::Words => "category-name-words",
        }
    }

    /// Emoji shown on the category card in place of a thumbnail.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            CategoryId::Flags => "🏳️",
            CategoryId::Animals => "🦁",
            CategoryId::Words => "📝",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A themed group of questions, as listed by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}
