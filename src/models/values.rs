use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

const KPA_PER_MMHG: f64 = 0.133_322;
const MG_DL_PER_MMOL_L: f64 = 18.0;
const LB_PER_KG: f64 = 2.204_62;
const CM_PER_IN: f64 = 2.54;

// ---------------------------------------------------------------------------
// Measured quantities
// ---------------------------------------------------------------------------

/// Blood pressure, stored as whole millimetres of mercury.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PressureValue {
    mmhg: i32,
}

impl PressureValue {
    pub const ZERO: PressureValue = PressureValue { mmhg: 0 };

    pub fn mmhg(value: i32) -> Self {
        Self { mmhg: value }
    }

    /// Rounded to the nearest mmHg.
    pub fn kpa(value: f64) -> Self {
        Self {
            mmhg: (value / KPA_PER_MMHG).round() as i32,
        }
    }

    pub fn as_mmhg(self) -> i32 {
        self.mmhg
    }

    pub fn as_kpa(self) -> f64 {
        f64::from(self.mmhg) * KPA_PER_MMHG
    }
}

/// Blood glucose concentration, stored in mmol/L.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BloodGlucoseValue {
    mmol_l: f64,
}

impl BloodGlucoseValue {
    pub fn mmol_l(value: f64) -> Self {
        Self { mmol_l: value }
    }

    pub fn mg_dl(value: f64) -> Self {
        Self {
            mmol_l: value / MG_DL_PER_MMOL_L,
        }
    }

    pub fn as_mmol_l(self) -> f64 {
        self.mmol_l
    }

    pub fn as_mg_dl(self) -> f64 {
        self.mmol_l * MG_DL_PER_MMOL_L
    }
}

/// Body mass, stored in kilograms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MassValue {
    kg: f64,
}

impl MassValue {
    pub fn kg(value: f64) -> Self {
        Self { kg: value }
    }

    pub fn lb(value: f64) -> Self {
        Self {
            kg: value / LB_PER_KG,
        }
    }

    pub fn as_kg(self) -> f64 {
        self.kg
    }

    pub fn as_lb(self) -> f64 {
        self.kg * LB_PER_KG
    }
}

/// Length, stored in centimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LengthValue {
    cm: f64,
}

impl LengthValue {
    pub fn cm(value: f64) -> Self {
        Self { cm: value }
    }

    pub fn inches(value: f64) -> Self {
        Self {
            cm: value * CM_PER_IN,
        }
    }

    pub fn as_cm(self) -> f64 {
        self.cm
    }

    pub fn as_inches(self) -> f64 {
        self.cm / CM_PER_IN
    }
}

/// Temperature, stored in degrees Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TemperatureValue {
    celsius: f64,
}

impl TemperatureValue {
    pub fn celsius(value: f64) -> Self {
        Self { celsius: value }
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self {
            celsius: (value - 32.0) / 1.8,
        }
    }

    pub fn as_celsius(self) -> f64 {
        self.celsius
    }

    pub fn as_fahrenheit(self) -> f64 {
        self.celsius * 1.8 + 32.0
    }
}

// ---------------------------------------------------------------------------
// Integer-backed enums
// ---------------------------------------------------------------------------

/// Declares a fieldless enum stored as an integer. Unknown integers decode
/// to the first (default) variant.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident = $first_code:literal => $first_label:literal,
            $($variant:ident = $code:literal => $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $first,
            $($variant,)*
        }

        impl $name {
            pub fn code(self) -> i32 {
                match self {
                    Self::$first => $first_code,
                    $(Self::$variant => $code,)*
                }
            }

            pub fn from_code(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    _ => Self::$first,
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    Self::$first => $first_label,
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.to_lowercase();
                if s == $first_label {
                    return Ok(Self::$first);
                }
                $(
                    if s == $label {
                        return Ok(Self::$variant);
                    }
                )*
                Err(format!(concat!("invalid ", stringify!($name), ": {}"), s))
            }
        }
    };
}

int_enum! {
    /// Whether a glucose reading was taken before or after a meal.
    pub enum MealRelation {
        Unknown = 0 => "unknown",
        Before = 1 => "before",
        After = 2 => "after",
    }
}

int_enum! {
    pub enum MoodLevel {
        Unknown = 0 => "unknown",
        VeryBad = 1 => "very_bad",
        Bad = 2 => "bad",
        Neutral = 3 => "neutral",
        Good = 4 => "good",
        VeryGood = 5 => "very_good",
    }
}

int_enum! {
    pub enum BloodType {
        Unknown = 0 => "unknown",
        APos = 1 => "a+",
        ANeg = 2 => "a-",
        BPos = 3 => "b+",
        BNeg = 4 => "b-",
        AbPos = 5 => "ab+",
        AbNeg = 6 => "ab-",
        ZeroPos = 7 => "0+",
        ZeroNeg = 8 => "0-",
    }
}

int_enum! {
    pub enum OrganDonor {
        Unknown = 0 => "unknown",
        Yes = 1 => "yes",
        No = 2 => "no",
    }
}

int_enum! {
    pub enum BiologicalSex {
        Unknown = 0 => "unknown",
        Female = 1 => "female",
        Male = 2 => "male",
    }
}

// ---------------------------------------------------------------------------
// Flag sets
// ---------------------------------------------------------------------------

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($flag:ident = $bit:expr => $label:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const NONE: $name = $name(0);
            $(pub const $flag: $name = $name($bit);)*

            const LABELS: &'static [($name, &'static str)] = &[$(($name::$flag, $label),)*];

            /// Union of every defined flag.
            pub const ALL_BITS: u32 = 0 $(| $bit)*;

            /// Any bit outside [`Self::ALL_BITS`] makes the whole set decode
            /// to `NONE`.
            pub fn from_bits(bits: u32) -> Self {
                if bits & !Self::ALL_BITS == 0 {
                    Self(bits)
                } else {
                    Self::NONE
                }
            }

            pub fn bits(self) -> u32 {
                self.0
            }

            pub fn contains(self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn is_none(self) -> bool {
                self.0 == 0
            }

            /// Labels of every set flag, in declaration order.
            pub fn labels(self) -> Vec<&'static str> {
                Self::LABELS
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, label)| *label)
                    .collect()
            }

            /// Parse a comma-separated list of flag labels.
            pub fn parse_list(s: &str) -> Result<Self, String> {
                let mut out = Self::NONE;
                for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let flag = Self::LABELS
                        .iter()
                        .find(|(_, label)| *label == part)
                        .map(|(flag, _)| *flag)
                        .ok_or_else(|| format!(concat!("invalid ", stringify!($name), ": {}"), part))?;
                    out |= flag;
                }
                Ok(out)
            }
        }

        impl BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }
    };
}

flag_set! {
    pub struct MenstrualCycleOtherSymptoms {
        ACNE = 1 => "acne",
        APPETITE_CHANGES = 1 << 1 => "appetite_changes",
        DIARRHEA = 1 << 2 => "diarrhea",
        INSOMNIA = 1 << 3 => "insomnia",
        MOOD_SWINGS = 1 << 4 => "mood_swings",
        POOR_CONCENTRATION = 1 << 5 => "poor_concentration",
    }
}

flag_set! {
    pub struct MenstrualCyclePhysicalSymptoms {
        ABDOMINAL_CRAMPS = 1 => "abdominal_cramps",
        BLOATING = 1 << 1 => "bloating",
        BREAST_TENDERNESS = 1 << 2 => "breast_tenderness",
        FATIGUE = 1 << 3 => "fatigue",
        HEADACHE = 1 << 4 => "headache",
        LOWER_BACK_PAIN = 1 << 5 => "lower_back_pain",
    }
}

flag_set! {
    pub struct SexualActivity {
        MASTURBATION = 1 => "masturbation",
        NO_SEX = 1 << 1 => "no_sex",
        PROTECTED_SEX = 1 << 2 => "protected_sex",
        SEX = 1 << 3 => "sex",
    }
}
