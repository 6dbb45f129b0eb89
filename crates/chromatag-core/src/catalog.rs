//! Catalog entry handed to the recommendation backend.
//!
//! Field names follow the backend's item schema (`ItemId`, `Labels`, ...).
//! Building and serializing an entry is in scope here; submitting it is not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::taxonomy::classify_rgb;

/// Category tag attached to every generated color.
pub const DEFAULT_CATEGORY: &str = "color";

/// Comment attached to generated colors.
pub const DEFAULT_COMMENT: &str = "Generated color";

/// One recommendable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItem {
    /// Canonical `#rrggbb` form of the color.
    pub item_id: String,
    pub is_hidden: bool,
    pub categories: Vec<String>,
    pub timestamp: DateTime<Utc>,
    /// Taxonomy tags in classifier order.
    pub labels: Vec<String>,
    pub comment: String,
}

impl CatalogItem {
    /// Build a visible entry for `color` with its full label set.
    ///
    /// The timestamp is supplied by the caller so that entries stay
    /// reproducible under test.
    pub fn for_color(
        color: Rgb,
        category: &str,
        comment: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            item_id: color.to_hex(),
            is_hidden: false,
            categories: vec![category.to_owned()],
            timestamp,
            labels: classify_rgb(color).to_vec(),
            comment: comment.to_owned(),
        }
    }

    /// Decode the item id back into a color.
    pub fn color(&self) -> Result<Rgb, crate::FormatError> {
        self.item_id.parse()
    }
}
