use crate::error::{EcorecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Yes/No answer for a sustainability attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    #[default]
    No,
}

impl Flag {
    /// Interpret a raw catalog cell.
    ///
    /// Only an exact `Yes` counts; blanks, typos and any other text read as `No`.
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim() == "Yes" {
            Flag::Yes
        } else {
            Flag::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == Flag::Yes
    }
}

impl FromStr for Flag {
    type Err = EcorecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Flag::Yes),
            "no" | "n" | "false" => Ok(Flag::No),
            other => Err(EcorecError::invalid_value(
                "flag",
                format!("{} (expected: yes or no)", other),
            )),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Yes => write!(f, "Yes"),
            Flag::No => write!(f, "No"),
        }
    }
}

/// The three self-reported sustainability attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EcoFlags {
    pub recyclable: Flag,
    pub organic: Flag,
    pub carbon_neutral: Flag,
}

impl EcoFlags {
    pub fn new(recyclable: Flag, organic: Flag, carbon_neutral: Flag) -> Self {
        Self {
            recyclable,
            organic,
            carbon_neutral,
        }
    }

    /// Value of a single attribute
    pub fn get(&self, attribute: Attribute) -> Flag {
        match attribute {
            Attribute::Recyclable => self.recyclable,
            Attribute::Organic => self.organic,
            Attribute::CarbonNeutral => self.carbon_neutral,
        }
    }
}

/// Names of the sustainability attributes, in catalog column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Recyclable,
    Organic,
    CarbonNeutral,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Recyclable,
        Attribute::Organic,
        Attribute::CarbonNeutral,
    ];

    /// Column header used in the catalog file
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Recyclable => "Recyclable",
            Attribute::Organic => "Organic",
            Attribute::CarbonNeutral => "Carbon Neutral",
        }
    }

    /// Snake-case key used in JSON and records output
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Recyclable => "recyclable",
            Attribute::Organic => "organic",
            Attribute::CarbonNeutral => "carbon_neutral",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
