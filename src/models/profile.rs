use serde::Serialize;

use crate::models::values::{BiologicalSex, BloodType, OrganDonor};
use crate::store::Row;
use crate::store::columns::{
    ALLERGIES, BIOLOGICAL_SEX, BLOOD_TYPE, HEIGHT, MEDICATIONS, NOTES, ORGAN_DONOR,
};

/// The single medical profile of the device owner.
///
/// It has no identity, metric or timestamp. `Default` is the profile
/// reported when nothing has been stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MedicalProfile {
    pub allergies: String,
    pub blood_type: BloodType,
    /// Centimetres.
    pub height: f32,
    pub medications: String,
    pub notes: String,
    pub organ_donor: OrganDonor,
    pub biological_sex: BiologicalSex,
}

impl MedicalProfile {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with(ALLERGIES, self.allergies.as_str())
            .with(BLOOD_TYPE, self.blood_type.code())
            .with(HEIGHT, self.height)
            .with(MEDICATIONS, self.medications.as_str())
            .with(NOTES, self.notes.as_str())
            .with(ORGAN_DONOR, self.organ_donor.code())
            .with(BIOLOGICAL_SEX, self.biological_sex.code())
    }

    pub fn from_row(row: &Row) -> Self {
        Self {
            allergies: row.get_string(ALLERGIES),
            blood_type: BloodType::from_code(row.get_i32(BLOOD_TYPE)),
            height: row.get_f32(HEIGHT),
            medications: row.get_string(MEDICATIONS),
            notes: row.get_string(NOTES),
            organ_donor: OrganDonor::from_code(row.get_i32(ORGAN_DONOR)),
            biological_sex: BiologicalSex::from_code(row.get_i32(BIOLOGICAL_SEX)),
        }
    }
}
