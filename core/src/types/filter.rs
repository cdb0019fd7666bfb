use crate::types::{Field, Treasure};

/// Read-side narrowing of the catalogue by category and/or country.
///
/// `None` is the distinguished "no filter" state and matches every record.
/// A present term must equal the record's field exactly (case-sensitive);
/// because a `Field` cannot be empty, an empty-string filter value is
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: Option<Field>,
    pub country: Option<Field>,
}

impl Filter {
    pub fn matches(&self, treasure: &Treasure) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| *category == treasure.category)
            && self
                .country
                .as_ref()
                .is_none_or(|country| *country == treasure.country)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.country.is_none()
    }

    pub fn clear(&mut self) {
        self.category = None;
        self.country = None;
    }
}

#[cfg(test)]
mod tests;
