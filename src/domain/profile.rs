//! User profile and saved addresses

use crate::domain::format::delimited::{join_record, split_record};
use crate::domain::format::{DelimitedRecord, FormatError};
use crate::error::{QuestlogError, Result};
use std::fmt;
use std::str::FromStr;

/// A saved address, stored as one pipe-delimited line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    /// Home, Work, School, Other...
    pub kind: String,
}

impl Address {
    pub fn validate(&self) -> Result<()> {
        self.check_fields()
    }

    /// One-line form used in listings
    pub fn full(&self) -> String {
        format!(
            "{}, {}, {} {}, {} ({})",
            self.street, self.city, self.state, self.zip, self.country, self.kind
        )
    }
}

impl DelimitedRecord for Address {
    const DELIMITER: char = '|';
    const LABELS: &'static [&'static str] = &["street", "city", "state", "zip", "country", "type"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.street.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip.clone(),
            self.country.clone(),
            self.kind.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> std::result::Result<Self, FormatError> {
        Ok(Address {
            street: fields[0].to_string(),
            city: fields[1].to_string(),
            state: fields[2].to_string(),
            zip: fields[3].to_string(),
            country: fields[4].to_string(),
            kind: fields[5].to_string(),
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_record(self))
    }
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        split_record(s)
    }
}

/// Personal details kept by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub full_name: String,
    pub username: String,
    pub health_conditions: Vec<String>,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub organ_donor: bool,
    pub addresses: Vec<Address>,
}

/// Profile keys that can be set from the command line
pub const PROFILE_KEYS: &[&str] = &[
    "full_name",
    "username",
    "health_conditions",
    "blood_type",
    "allergies",
    "medications",
    "organ_donor",
];

impl Profile {
    /// Addresses of one kind (case-insensitive)
    pub fn addresses_of(&self, kind: &str) -> Vec<&Address> {
        self.addresses
            .iter()
            .filter(|a| a.kind.eq_ignore_ascii_case(kind))
            .collect()
    }

    pub fn add_address(&mut self, address: Address) -> Result<()> {
        address.validate()?;
        self.addresses.push(address);
        Ok(())
    }

    /// Set a scalar or list field by key; lists are comma or semicolon separated
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if value.contains(['\n', '\r']) {
            return Err(QuestlogError::InvalidInput(
                "Profile values cannot contain line breaks".to_string(),
            ));
        }
        let list = || -> Vec<String> {
            value
                .split([',', ';'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };

        match key {
            "full_name" => self.full_name = value.trim().to_string(),
            "username" => self.username = value.trim().to_string(),
            "blood_type" => self.blood_type = value.trim().to_string(),
            "health_conditions" => self.health_conditions = list(),
            "allergies" => self.allergies = list(),
            "medications" => self.medications = list(),
            "organ_donor" => {
                self.organ_donor = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "y" => true,
                    "false" | "no" | "n" => false,
                    _ => {
                        return Err(QuestlogError::InvalidInput(format!(
                            "Invalid value for organ_donor: '{}'. Use yes or no",
                            value
                        )))
                    }
                }
            }
            _ => {
                return Err(QuestlogError::InvalidInput(format!(
                    "Unknown profile key: '{}'. Valid keys are: {}",
                    key,
                    PROFILE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Address {
        Address {
            street: "12 Main St".to_string(),
            city: "Rexburg".to_string(),
            state: "ID".to_string(),
            zip: "83440".to_string(),
            country: "USA".to_string(),
            kind: "Home".to_string(),
        }
    }

    #[test]
    fn test_address_line_round_trip() {
        let line = home().to_string();
        assert_eq!(line, "12 Main St|Rexburg|ID|83440|USA|Home");
        assert_eq!(line.parse::<Address>().unwrap(), home());
    }

    #[test]
    fn test_address_wrong_field_count() {
        let err = "a|b|c".parse::<Address>().unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldCount {
                expected: 6,
                found: 3
            }
        );
    }

    #[test]
    fn test_address_full() {
        assert_eq!(home().full(), "12 Main St, Rexburg, ID 83440, USA (Home)");
    }

    #[test]
    fn test_add_address_rejects_pipe() {
        let mut profile = Profile::default();
        let mut address = home();
        address.street = "1|2".to_string();
        assert!(profile.add_address(address).is_err());
        assert!(profile.add_address(home()).is_ok());
        assert_eq!(profile.addresses_of("home").len(), 1);
        assert!(profile.addresses_of("work").is_empty());
    }

    #[test]
    fn test_set_fields() {
        let mut profile = Profile::default();
        profile.set("full_name", "Ada Lovelace").unwrap();
        profile.set("allergies", "peanuts, dust;; pollen").unwrap();
        profile.set("organ_donor", "Yes").unwrap();

        assert_eq!(profile.full_name, "Ada Lovelace");
        assert_eq!(profile.allergies, vec!["peanuts", "dust", "pollen"]);
        assert!(profile.organ_donor);

        assert!(profile.set("organ_donor", "maybe").is_err());
        assert!(profile.set("shoe_size", "9").is_err());
    }
}
