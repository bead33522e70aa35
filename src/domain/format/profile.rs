//! Profile file format: one `Label:value` line per field, with
//! `;`-joined lists and one pipe-delimited `Address:` line per address

use super::{
    parse_bool, split_list, BlockLayout, BlockRecord, Boundary, Codec, Decoded, FormatError,
    LabeledBlock, Skipped,
};
use crate::domain::{Address, Profile};

pub const LAYOUT: BlockLayout = BlockLayout {
    boundary: Boundary::Whole,
    labels: &[
        "FullName",
        "Username",
        "HealthConditions",
        "BloodType",
        "Allergies",
        "CurrentMedications",
        "IsOrganDonor",
        "Address",
    ],
    separator: ":",
};

/// Read a profile, collecting problems with individual fields
fn read_profile(block: &LabeledBlock, problems: &mut Vec<FormatError>) -> Profile {
    let organ_donor = match block.get("IsOrganDonor") {
        Some(value) if !value.is_empty() => parse_bool("IsOrganDonor", value)
            .map_err(|e| problems.push(e))
            .unwrap_or(false),
        _ => false,
    };

    let mut addresses = Vec::new();
    for line in block.get_all("Address") {
        match line.parse::<Address>() {
            Ok(address) => addresses.push(address),
            Err(e) => problems.push(e),
        }
    }

    Profile {
        full_name: block.get_or_empty("FullName").to_string(),
        username: block.get_or_empty("Username").to_string(),
        health_conditions: split_list(block.get_or_empty("HealthConditions"), ';'),
        blood_type: block.get_or_empty("BloodType").to_string(),
        allergies: split_list(block.get_or_empty("Allergies"), ';'),
        medications: split_list(block.get_or_empty("CurrentMedications"), ';'),
        organ_donor,
        addresses,
    }
}

impl BlockRecord for Profile {
    fn to_block(&self) -> LabeledBlock {
        let mut block = LabeledBlock::new()
            .with("FullName", self.full_name.as_str())
            .with("Username", self.username.as_str())
            .with("HealthConditions", self.health_conditions.join(";"))
            .with("BloodType", self.blood_type.as_str())
            .with("Allergies", self.allergies.join(";"))
            .with("CurrentMedications", self.medications.join(";"))
            .with("IsOrganDonor", self.organ_donor.to_string());
        for address in &self.addresses {
            block.push("Address", address.to_string());
        }
        block
    }

    fn from_block(block: &LabeledBlock) -> Result<Self, FormatError> {
        let mut problems = Vec::new();
        let profile = read_profile(block, &mut problems);
        match problems.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(profile),
        }
    }
}

/// Codec for the profile file
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileCodec;

impl Codec for ProfileCodec {
    type Value = Profile;

    fn encode(&self, value: &Self::Value) -> String {
        LAYOUT.serialize(value)
    }

    fn decode(&self, text: &str) -> Result<Decoded<Self::Value>, FormatError> {
        let parsed = LAYOUT.parse(text);
        let mut skipped = parsed.stray;

        let Some(first) = parsed.blocks.into_iter().next() else {
            return Ok(Decoded {
                value: Profile::default(),
                records: 0,
                skipped,
            });
        };

        let mut problems = Vec::new();
        let profile = read_profile(&first.block, &mut problems);
        skipped.extend(
            problems
                .into_iter()
                .map(|e| Skipped::new(first.line, e.to_string())),
        );

        Ok(Decoded {
            value: profile,
            records: 1,
            skipped,
        })
    }

    fn count(&self, _value: &Self::Value) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            full_name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            health_conditions: vec!["Asthma".to_string()],
            blood_type: "O+".to_string(),
            allergies: vec!["Peanuts".to_string(), "Dust".to_string()],
            medications: Vec::new(),
            organ_donor: true,
            addresses: vec![Address {
                street: "1 Analytical Way".to_string(),
                city: "London".to_string(),
                state: "LDN".to_string(),
                zip: "N1".to_string(),
                country: "UK".to_string(),
                kind: "Home".to_string(),
            }],
        }
    }

    #[test]
    fn test_encode_layout() {
        let text = ProfileCodec.encode(&sample());
        assert!(text.starts_with("FullName:Ada Lovelace\nUsername:ada\n"));
        assert!(text.contains("Allergies:Peanuts;Dust\n"));
        assert!(text.contains("CurrentMedications:\n"));
        assert!(text.contains("IsOrganDonor:true\n"));
        assert!(text.contains("Address:1 Analytical Way|London|LDN|N1|UK|Home\n"));
    }

    #[test]
    fn test_round_trip() {
        let profile = sample();
        let decoded = ProfileCodec.decode(&ProfileCodec.encode(&profile)).unwrap();
        assert_eq!(decoded.value, profile);
        assert!(decoded.skipped.is_empty());
        assert_eq!(LAYOUT.deserialize::<Profile>(&LAYOUT.serialize(&profile)), Ok(profile));
    }

    #[test]
    fn test_bad_address_is_skipped() {
        let text = "FullName:Ada\nAddress:only|three|parts\nAddress:a|b|c|d|e|Work\nIsOrganDonor:True\n";
        let decoded = ProfileCodec.decode(text).unwrap();

        assert_eq!(decoded.value.full_name, "Ada");
        assert!(decoded.value.organ_donor);
        assert_eq!(decoded.value.addresses.len(), 1);
        assert_eq!(decoded.value.addresses[0].kind, "Work");
        assert_eq!(decoded.skipped.len(), 1);

        assert!(matches!(
            LAYOUT.deserialize::<Profile>(text),
            Err(FormatError::FieldCount { .. })
        ));
    }

    #[test]
    fn test_empty_file_is_default_profile() {
        let decoded = ProfileCodec.decode("").unwrap();
        assert_eq!(decoded.value, Profile::default());
        assert_eq!(decoded.records, 0);
    }
}
