//! Comic Data Types
//!
//! The decoded payload of a single `info.0.json` document. Only the fields the
//! corpus keeps are declared; anything else in the remote payload is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single comic as published by the endpoint.
///
/// Dates stay as the strings the source publishes (`"1"`, `"2006"`), with no
/// calendar normalization. Fields absent from the payload decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comic {
    pub num: i64,
    pub day: String,
    pub month: String,
    pub year: String,
    pub transcript: String,
    pub img: String,
    pub title: String,
}

impl fmt::Display for Comic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comic")?;
        writeln!(f, "Num: {}", self.num)?;
        writeln!(f, "Day: {}", self.day)?;
        writeln!(f, "Month: {}", self.month)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Transcript: {}", self.transcript)?;
        writeln!(f, "Img: {}", self.img)?;
        writeln!(f, "Title: {}", self.title)
    }
}
