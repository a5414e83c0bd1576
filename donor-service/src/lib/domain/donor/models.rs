use std::fmt;
use std::str::FromStr;

use crate::donor::errors::ValidationError;

/// Stored donor submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub id: DonorId,
    pub name: DonorName,
    pub blood_group: BloodGroup,
}

/// Database-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DonorId(pub i32);

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorName(String);

impl DonorName {
    const MAX_LENGTH: usize = 100;

    /// Create a donor name. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// * `MissingField` - Name is empty or whitespace only
    /// * `TooLong` - Name is longer than 100 characters
    pub fn new(name: String) -> Result<Self, ValidationError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(ValidationError::MissingField("name"))
        } else if length > Self::MAX_LENGTH {
            Err(ValidationError::TooLong {
                field: "name",
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ABO group with Rh factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl FromStr for BloodGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::MissingField("bloodGroup"));
        }

        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidBloodGroup(s.to_string()))
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to record a new donor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitDonorCommand {
    pub name: DonorName,
    pub blood_group: BloodGroup,
}

impl SubmitDonorCommand {
    pub fn new(name: DonorName, blood_group: BloodGroup) -> Self {
        Self { name, blood_group }
    }
}
