use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::store::Capability;

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// A health data category. Each domain has its own address and capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Activity,
    Body,
    Breathing,
    HeartBlood,
    Mindfulness,
    MedicalProfile,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Self::Activity,
        Self::Body,
        Self::Breathing,
        Self::HeartBlood,
        Self::Mindfulness,
        Self::MedicalProfile,
    ];

    /// Last segment of the domain's store authority.
    pub fn authority(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Body => "body",
            Self::Breathing => "breathing",
            Self::HeartBlood => "heart",
            Self::Mindfulness => "mindfulness",
            Self::MedicalProfile => "profile",
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

    /// The one capability that governs every operation on this domain.
    pub fn capability(self) -> Capability {
        match self {
            Self::Activity => Capability::Activity,
            Self::Body => Capability::Body,
            Self::Breathing => Capability::Breathing,
            Self::HeartBlood => Capability::HeartBlood,
            Self::Mindfulness => Capability::Mindfulness,
            Self::MedicalProfile => Capability::MedicalProfile,
        }
    }

    /// Metrics partitioned into this domain, in code order.
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Activity => &ACTIVITY_METRICS,
            Self::Body => &BODY_METRICS,
            Self::Breathing => &BREATHING_METRICS,
            Self::HeartBlood => &HEART_BLOOD_METRICS,
            Self::Mindfulness => &MINDFULNESS_METRICS,
            Self::MedicalProfile => &[],
        }
    }

    pub fn from_authority(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.authority() == segment)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "activity" => Ok(Self::Activity),
            "body" => Ok(Self::Body),
            "breathing" => Ok(Self::Breathing),
            "heart_blood" | "heart" => Ok(Self::HeartBlood),
            "mindfulness" => Ok(Self::Mindfulness),
            "medical_profile" | "profile" => Ok(Self::MedicalProfile),
            other => Err(format!("unknown domain: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

macro_rules! metric_catalog {
    ($($variant:ident = $code:literal, $name:literal, $domain:ident;)*) => {
        /// A measurable quantity. The integer code is what gets stored.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Metric {
            $($variant,)*
        }

        impl Metric {
            pub const ALL: &'static [Metric] = &[$(Self::$variant,)*];

            pub fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Reverse lookup of a stored discriminator. Unknown codes yield `None`.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            pub fn domain(self) -> Domain {
                match self {
                    $(Self::$variant => Domain::$domain,)*
                }
            }
        }

        impl FromStr for Metric {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().replace('-', "_").as_str() {
                    $($name => Ok(Self::$variant),)*
                    other => Err(format!("unknown metric: {other}")),
                }
            }
        }
    };
}

metric_catalog! {
    // Activity
    Cycling = 100, "cycling", Activity;
    Running = 101, "running", Activity;
    Walking = 102, "walking", Activity;
    Workout = 103, "workout", Activity;
    // Body
    AbdominalCircumference = 200, "abdominal_circumference", Body;
    BodyMassIndex = 201, "body_mass_index", Body;
    BodyTemperature = 202, "body_temperature", Body;
    LeanBodyMass = 203, "lean_body_mass", Body;
    MenstrualCycle = 204, "menstrual_cycle", Body;
    UvIndex = 205, "uv_index", Body;
    WaterIntake = 206, "water_intake", Body;
    Weight = 207, "weight", Body;
    // Breathing
    InhalerUsage = 300, "inhaler_usage", Breathing;
    OxygenSaturation = 301, "oxygen_saturation", Breathing;
    PeakExpiratoryFlow = 302, "peak_expiratory_flow", Breathing;
    RespiratoryRate = 303, "respiratory_rate", Breathing;
    VitalCapacity = 304, "vital_capacity", Breathing;
    // Heart and blood
    BloodAlcoholConcentration = 400, "blood_alcohol_concentration", HeartBlood;
    BloodPressure = 401, "blood_pressure", HeartBlood;
    Glucose = 402, "glucose", HeartBlood;
    HeartRate = 403, "heart_rate", HeartBlood;
    PerfusionIndex = 404, "perfusion_index", HeartBlood;
    // Mindfulness
    Meditation = 500, "meditation", Mindfulness;
    Mood = 501, "mood", Mindfulness;
    Sleep = 502, "sleep", Mindfulness;
}

const ACTIVITY_METRICS: [Metric; 4] = [
    Metric::Cycling,
    Metric::Running,
    Metric::Walking,
    Metric::Workout,
];

const BODY_METRICS: [Metric; 8] = [
    Metric::AbdominalCircumference,
    Metric::BodyMassIndex,
    Metric::BodyTemperature,
    Metric::LeanBodyMass,
    Metric::MenstrualCycle,
    Metric::UvIndex,
    Metric::WaterIntake,
    Metric::Weight,
];

const BREATHING_METRICS: [Metric; 5] = [
    Metric::InhalerUsage,
    Metric::OxygenSaturation,
    Metric::PeakExpiratoryFlow,
    Metric::RespiratoryRate,
    Metric::VitalCapacity,
];

const HEART_BLOOD_METRICS: [Metric; 5] = [
    Metric::BloodAlcoholConcentration,
    Metric::BloodPressure,
    Metric::Glucose,
    Metric::HeartRate,
    Metric::PerfusionIndex,
];

const MINDFULNESS_METRICS: [Metric; 3] = [Metric::Meditation, Metric::Mood, Metric::Sleep];

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display unit for a metric's primary value, in metric units.
pub fn default_unit(metric: Metric) -> &'static str {
    match metric {
        Metric::Cycling | Metric::Running | Metric::Walking => "km",
        Metric::Workout => "kcal",
        Metric::AbdominalCircumference => "cm",
        Metric::BodyMassIndex => "kg/m2",
        Metric::BodyTemperature => "\u{00b0}C",
        Metric::LeanBodyMass => "%",
        Metric::MenstrualCycle => "",
        Metric::UvIndex => "",
        Metric::WaterIntake => "ml",
        Metric::Weight => "kg",
        Metric::InhalerUsage => "",
        Metric::OxygenSaturation => "%",
        Metric::PeakExpiratoryFlow => "L/min",
        Metric::RespiratoryRate => "breaths/min",
        Metric::VitalCapacity => "L",
        Metric::BloodAlcoholConcentration => "%",
        Metric::BloodPressure => "mmHg",
        Metric::Glucose => "mmol/L",
        Metric::HeartRate => "bpm",
        Metric::PerfusionIndex => "%",
        Metric::Meditation | Metric::Sleep => "ms",
        Metric::Mood => "",
    }
}
