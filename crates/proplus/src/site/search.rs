use super::{action_stub, search_notice};
use crate::catalog::PropertyCategory;
use crate::notifications::NotificationCenter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    UpTo300M,
    From300To700M,
    Over700M,
}

impl PriceRange {
    pub const fn ordered() -> [Self; 3] {
        [Self::UpTo300M, Self::From300To700M, Self::Over700M]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo300M => "Hasta $300M",
            Self::From300To700M => "$300M - $700M",
            Self::Over700M => "Más de $700M",
        }
    }
}

/// The collapsible hero search controls. No search ever executes; the
/// submit paths only raise notifications.
#[derive(Debug, Default)]
pub struct SearchBar {
    location: String,
    category: Option<PropertyCategory>,
    price_range: Option<PriceRange>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
    }

    pub fn category(&self) -> Option<PropertyCategory> {
        self.category
    }

    pub fn select_category(&mut self, category: PropertyCategory) {
        self.category = Some(category);
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn select_price_range(&mut self, range: PriceRange) {
        self.price_range = Some(range);
    }

    /// Magnifier click or Enter in the location field. Blank input raises
    /// nothing and reports false.
    pub fn submit_location(&self, center: &NotificationCenter) -> bool {
        let trimmed = self.location.trim();
        if trimmed.is_empty() {
            return false;
        }
        center.notify(search_notice(trimmed));
        true
    }

    /// The main search button.
    pub fn search(&self, center: &NotificationCenter) {
        center.notify(action_stub("Búsqueda"));
    }
}
