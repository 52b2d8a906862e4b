// Movie record model
// Field values, validation, and record identity. The derived scariness
// score lives in the scoring module.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::constants::{RATING_MAX, RATING_MIN, YEAR_FLOOR};
use crate::error::{Result, VaultError};

/// A single movie record.
///
/// `id == 0` means the record has not been persisted yet; the database
/// assigns a permanent id on insert and it never changes afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub rating: f64,
    pub runtime_minutes: i32,
    pub votes: i64,
    pub watched: bool,
}

impl Movie {
    /// Build a transient (not yet persisted) record.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        director: impl Into<String>,
        rating: f64,
        runtime_minutes: i32,
        votes: i64,
        watched: bool,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            year,
            director: director.into(),
            rating,
            runtime_minutes,
            votes,
            watched,
        }
    }

    /// True once the record has a database identity.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Two values name the same stored record iff both are persisted and
    /// their ids match. Transient records (id 0) have no identity yet.
    pub fn same_record(&self, other: &Movie) -> bool {
        self.is_persisted() && self.id == other.id
    }

    /// Check every field constraint, in order: title, director, year,
    /// rating, runtime, votes. The first violation fails with a message
    /// naming the offending field. Mutates nothing.
    pub fn validate(&self) -> Result<()> {
        let current_year = chrono::Local::now().year();

        if self.title.trim().is_empty() {
            return Err(VaultError::Validation("Title cannot be empty.".to_string()));
        }
        if self.director.trim().is_empty() {
            return Err(VaultError::Validation(
                "Director cannot be empty.".to_string(),
            ));
        }
        if self.year < YEAR_FLOOR || self.year > current_year {
            return Err(VaultError::Validation(format!(
                "Year must be between {} and {}.",
                YEAR_FLOOR, current_year
            )));
        }
        // NaN fails the range check like any out-of-range value
        if !self.rating.is_finite() || self.rating < RATING_MIN || self.rating > RATING_MAX {
            return Err(VaultError::Validation(
                "Rating must be between 0 and 10.".to_string(),
            ));
        }
        if self.runtime_minutes <= 0 {
            return Err(VaultError::Validation(
                "Runtime must be positive.".to_string(),
            ));
        }
        if self.votes < 0 {
            return Err(VaultError::Validation(
                "Votes cannot be negative.".to_string(),
            ));
        }

        Ok(())
    }

    /// Derived scariness score on the 0-10 scale. Recomputed on demand,
    /// never stored.
    pub fn scariness(&self) -> f64 {
        crate::scoring::score(self).overall
    }
}
