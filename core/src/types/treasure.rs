use std::fmt;

use crate::error::ValidationError;
use crate::types::Field;

/// A catalogued museum item. Field declaration order matches the on-disk
/// column order, so the derived `Ord` sorts the catalogue by number first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Treasure {
    pub catalogue_number: Field,
    pub name: Field,
    pub image_path: Field,
    pub category: Field,
    pub country: Field,
}

impl Treasure {
    /// Builds a record from raw input, naming the first empty field in the
    /// error.
    pub fn new(
        catalogue_number: &str,
        name: &str,
        image_path: &str,
        category: &str,
        country: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            catalogue_number: field(catalogue_number, "catalogue number")?,
            name: field(name, "name")?,
            image_path: field(image_path, "image path")?,
            category: field(category, "category")?,
            country: field(country, "country")?,
        })
    }
}

fn field(value: &str, field: &'static str) -> Result<Field, ValidationError> {
    Field::try_from(value).map_err(|_| ValidationError::EmptyField { field })
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.catalogue_number, self.name)
    }
}

#[cfg(test)]
mod tests;
