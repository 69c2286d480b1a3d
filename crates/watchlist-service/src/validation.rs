//! Field rules for movie entries and the owner's display name.

use watchlist_core::error::ValidationError;

/// Which write a movie payload is destined for.
///
/// The two modes disagree on the year rule: creation caps the length at
/// four characters, editing demands exactly four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A new entry.
    Create,
    /// Overwrite of an existing entry.
    Edit,
}

/// Pure checks run before any write reaches storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryValidator;

impl EntryValidator {
    /// Maximum title length in characters.
    pub const TITLE_MAX: usize = 60;
    /// Year length in characters (upper bound on create, exact on edit).
    pub const YEAR_LEN: usize = 4;
    /// Maximum display name length in characters.
    pub const NAME_MAX: usize = 20;

    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks a movie payload, reporting the first violation found.
    pub fn validate_movie(
        &self,
        title: &str,
        year: &str,
        mode: ValidationMode,
    ) -> Result<(), ValidationError> {
        if is_blank(title) {
            return Err(ValidationError::TitleEmpty);
        }
        if char_len(title) > Self::TITLE_MAX {
            return Err(ValidationError::TitleTooLong);
        }
        if is_blank(year) {
            return Err(ValidationError::YearEmpty);
        }

        let year_len = char_len(year);
        match mode {
            ValidationMode::Create if year_len > Self::YEAR_LEN => {
                Err(ValidationError::YearTooLong)
            }
            ValidationMode::Edit if year_len != Self::YEAR_LEN => {
                Err(ValidationError::YearWrongLength)
            }
            _ => Ok(()),
        }
    }

    /// Checks a new display name.
    pub fn validate_display_name(&self, name: &str) -> Result<(), ValidationError> {
        if is_blank(name) {
            return Err(ValidationError::NameEmpty);
        }
        if char_len(name) > Self::NAME_MAX {
            return Err(ValidationError::NameTooLong);
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
