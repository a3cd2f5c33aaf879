//! Column names of the row projection shared by stores and record parsers.

pub const ID: &str = "_id";
pub const METRIC: &str = "_metric";
pub const TIME: &str = "time";
pub const NOTES: &str = "notes";
pub const VALUE: &str = "value";

// Activity
pub const AVG_SPEED: &str = "avg_speed";
pub const CALORIES: &str = "calories";
pub const DISTANCE: &str = "distance";
pub const DURATION: &str = "duration";
pub const ELEVATION_GAIN: &str = "elevation_gain";
pub const STEPS: &str = "steps";

// Body
pub const MCYCLE_OTHER_SYMPTOMS: &str = "mcycle_other_symptoms";
pub const MCYCLE_PHYSICAL_SYMPTOMS: &str = "mcycle_physical_symptoms";
pub const SEXUAL_ACTIVITY: &str = "sexual_activity";

// Heart and blood
pub const MEAL_RELATION: &str = "meal_relation";
pub const PRESSURE_SYSTOLIC: &str = "pressure_systolic";
pub const PRESSURE_DIASTOLIC: &str = "pressure_diastolic";

// Mindfulness
pub const MOOD: &str = "mood";

// Medical profile
pub const ALLERGIES: &str = "allergies";
pub const BLOOD_TYPE: &str = "blood_type";
pub const HEIGHT: &str = "height";
pub const MEDICATIONS: &str = "medications";
pub const ORGAN_DONOR: &str = "organ_donor";
pub const BIOLOGICAL_SEX: &str = "biological_sex";
