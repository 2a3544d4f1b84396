//! Field-level validation and normalization of request payloads.
//!
//! `Validator` accumulates every failing field so a request is rejected with the
//! complete list instead of the first problem found. All functions here are pure.

use url::Url;

use crate::{
    model::{api::MemberIdDto, member::CharacteristicsDto},
    server::{
        error::{validation::FieldError, AppError},
        util::parse::parse_id_from_string,
    },
};

/// Collects field errors while normalizing a request payload.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`.
    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Returns the trimmed value of a required text field.
    ///
    /// Missing, null and blank values are recorded as failures; the returned empty
    /// string is never persisted because `finish` rejects the payload.
    pub fn required(&mut self, field: &str, value: Option<String>) -> String {
        match optional_text(value) {
            Some(value) => value,
            None => {
                self.fail(field, "is required");
                String::new()
            }
        }
    }

    /// Validates an optional replacement for a required field during updates.
    ///
    /// Absent stays absent; a provided value must not be blank.
    pub fn replacement(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value?;
        let trimmed = optional_text(Some(value));
        if trimmed.is_none() {
            self.fail(field, "must not be blank");
        }
        trimmed
    }

    /// Normalizes an optional URL. Blank input means no URL.
    pub fn optional_url(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = optional_text(value)?;
        match Url::parse(&value) {
            Ok(_) => Some(value),
            Err(e) => {
                self.fail(field, format!("must be a valid URL: {}", e));
                None
            }
        }
    }

    /// Resolves an optional member reference to an id. Blank input means no member.
    pub fn member_id(&mut self, field: &str, value: Option<MemberIdDto>) -> Option<i32> {
        match value? {
            MemberIdDto::Id(id) => Some(id),
            MemberIdDto::Text(text) => {
                let text = optional_text(Some(text))?;
                match parse_id_from_string(field, &text) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        self.errors.push(e);
                        None
                    }
                }
            }
        }
    }

    /// Resolves a member reference that must be present.
    pub fn required_member_id(&mut self, field: &str, value: Option<MemberIdDto>) -> i32 {
        let before = self.errors.len();
        match self.member_id(field, value) {
            Some(id) => id,
            None => {
                if self.errors.len() == before {
                    self.fail(field, "is required");
                }
                0
            }
        }
    }

    /// Resolves a list of member references, skipping blanks and duplicates.
    pub fn member_ids(&mut self, field: &str, values: Vec<MemberIdDto>) -> Vec<i32> {
        let mut ids = Vec::with_capacity(values.len());
        for value in values {
            if let Some(id) = self.member_id(field, Some(value)) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Returns `ValidationFailed` with every recorded failure, if any.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(self.errors))
        }
    }
}

/// Trims optional text; blank becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes characteristics into an ordered list of non-blank entries.
///
/// A list keeps its order with each entry trimmed; text is split on commas first.
/// Blank entries are dropped in both cases.
pub fn normalize_characteristics(input: CharacteristicsDto) -> Vec<String> {
    match input {
        CharacteristicsDto::List(items) => items
            .into_iter()
            .filter_map(|item| optional_text(Some(item)))
            .collect(),
        CharacteristicsDto::Text(text) => text
            .split(',')
            .filter_map(|piece| optional_text(Some(piece.to_string())))
            .collect(),
    }
}
