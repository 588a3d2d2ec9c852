//! Field validation rules
//!
//! Lengths are counted in Unicode scalar values, not bytes, so a title of
//! five accented letters is as valid as one of five ASCII letters.

use crate::{ModelError, Result};
use std::ops::RangeInclusive;

/// Accepted magazine name lengths
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;

/// Accepted article title lengths
pub const TITLE_LEN: RangeInclusive<usize> = 5..=50;

/// Validate an author name (non-empty)
pub fn author_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ModelError::InvalidName);
    }
    Ok(())
}

/// Validate a magazine name (2 to 16 characters)
pub fn magazine_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if !MAGAZINE_NAME_LEN.contains(&len) {
        return Err(ModelError::InvalidMagazineName {
            len,
            min: *MAGAZINE_NAME_LEN.start(),
            max: *MAGAZINE_NAME_LEN.end(),
        });
    }
    Ok(())
}

/// Validate a magazine category (non-empty)
pub fn category(category: &str) -> Result<()> {
    if category.is_empty() {
        return Err(ModelError::InvalidCategory);
    }
    Ok(())
}

/// Validate an article title (5 to 50 characters)
pub fn title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if !TITLE_LEN.contains(&len) {
        return Err(ModelError::InvalidTitle {
            len,
            min: *TITLE_LEN.start(),
            max: *TITLE_LEN.end(),
        });
    }
    Ok(())
}
