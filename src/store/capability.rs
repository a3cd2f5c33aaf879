use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access permission for one domain's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Activity,
    Body,
    Breathing,
    HeartBlood,
    Mindfulness,
    MedicalProfile,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Self::Activity,
        Self::Body,
        Self::Breathing,
        Self::HeartBlood,
        Self::Mindfulness,
        Self::MedicalProfile,
    ];

    /// Platform permission string.
    pub fn permission(self) -> &'static str {
        match self {
            Self::Activity => "healthstore.permission.ACTIVITY",
            Self::Body => "healthstore.permission.BODY",
            Self::Breathing => "healthstore.permission.BREATHING",
            Self::HeartBlood => "healthstore.permission.HEART_BLOOD",
            Self::Mindfulness => "healthstore.permission.MINDFULNESS",
            Self::MedicalProfile => "healthstore.permission.MEDICAL_PROFILE",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Body => "body",
            Self::Breathing => "breathing",
            Self::HeartBlood => "heart_blood",
            Self::Mindfulness => "mindfulness",
            Self::MedicalProfile => "medical_profile",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.permission())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s || c.permission() == s)
            .ok_or_else(|| format!("unknown capability: {s}"))
    }
}
