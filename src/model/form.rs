//! New-party form input.

use chrono::{Local, TimeZone};
use serde::Deserialize;
use thiserror::Error;

use super::{combine_date_time_in, PartyDraft};

/// Raw field values submitted by the creation form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPartyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

/// Errors turning form input into a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("Local time {0} does not exist in this time zone")]
    NonexistentLocalTime(String),
}

impl NewPartyForm {
    /// Build a draft, reading date and time as local wall-clock time
    pub fn into_draft(self) -> Result<PartyDraft, DraftError> {
        self.into_draft_in(&Local)
    }

    /// Build a draft, reading date and time as wall-clock time in `tz`
    pub fn into_draft_in<Tz: TimeZone>(self, tz: &Tz) -> Result<PartyDraft, DraftError> {
        let name = required("name", &self.name)?;
        let date = required("date", &self.date)?;
        let time = required("time", &self.time)?;
        let location = required("location", &self.location)?;

        Ok(PartyDraft {
            name,
            description: self.description.trim().to_string(),
            date: combine_date_time_in(&date, &time, tz)?,
            location,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}
