use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the six Holland interest types.
///
/// Declaration order (R, I, A, S, E, C) is the tie-break order when two
/// scales score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiasecLetter {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl RiasecLetter {
    pub const ALL: [RiasecLetter; 6] = [
        RiasecLetter::Realistic,
        RiasecLetter::Investigative,
        RiasecLetter::Artistic,
        RiasecLetter::Social,
        RiasecLetter::Enterprising,
        RiasecLetter::Conventional,
    ];

    pub fn as_char(self) -> char {
        match self {
            RiasecLetter::Realistic => 'R',
            RiasecLetter::Investigative => 'I',
            RiasecLetter::Artistic => 'A',
            RiasecLetter::Social => 'S',
            RiasecLetter::Enterprising => 'E',
            RiasecLetter::Conventional => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RiasecLetter::Realistic => "Realistic",
            RiasecLetter::Investigative => "Investigative",
            RiasecLetter::Artistic => "Artistic",
            RiasecLetter::Social => "Social",
            RiasecLetter::Enterprising => "Enterprising",
            RiasecLetter::Conventional => "Conventional",
        }
    }

    pub fn from_char(c: char) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_char() == c.to_ascii_uppercase())
            .ok_or(CoreError::InvalidRiasecLetter(c))
    }
}

impl fmt::Display for RiasecLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered career code of up to three letters, highest interest first.
///
/// Normally exactly three letters; shorter only when fewer than three
/// interest scales had any answered item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct RiasecCode(String);

impl RiasecCode {
    pub const MAX_LEN: usize = 3;

    pub fn from_letters(letters: &[RiasecLetter]) -> Result<Self, CoreError> {
        let code: String = letters.iter().map(|l| l.as_char()).collect();
        if letters.len() > Self::MAX_LEN {
            return Err(CoreError::RiasecCodeTooLong(code));
        }
        Ok(Self(code))
    }

    pub fn parse(code: &str) -> Result<Self, CoreError> {
        let letters = code
            .chars()
            .map(RiasecLetter::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(&letters)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> Vec<RiasecLetter> {
        // Construction only admits valid letters.
        self.0
            .chars()
            .filter_map(|c| RiasecLetter::from_char(c).ok())
            .collect()
    }

    /// True when fewer than three scales had data.
    pub fn is_partial(&self) -> bool {
        self.0.len() < Self::MAX_LEN
    }
}

impl<'de> Deserialize<'de> for RiasecCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RiasecCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
