use anyhow::{Result, anyhow, bail};

use crate::models::profile::MedicalProfile;
use crate::models::values::{BiologicalSex, BloodType, OrganDonor};
use crate::repo::MedicalProfileRepo;

pub const KEYS: [&str; 7] = [
    "allergies",
    "blood_type",
    "height",
    "medications",
    "notes",
    "organ_donor",
    "biological_sex",
];

/// Apply one `key = value` edit to a profile.
pub fn apply(profile: &mut MedicalProfile, key: &str, value: &str) -> Result<()> {
    match key {
        "allergies" => profile.allergies = value.to_string(),
        "blood_type" => profile.blood_type = value.parse::<BloodType>().map_err(|e| anyhow!(e))?,
        "height" => {
            let height: f32 = value
                .parse()
                .map_err(|_| anyhow!("height must be a number of centimetres"))?;
            if height < 0.0 {
                bail!("height cannot be negative");
            }
            profile.height = height;
        }
        "medications" => profile.medications = value.to_string(),
        "notes" => profile.notes = value.to_string(),
        "organ_donor" => {
            profile.organ_donor = value.parse::<OrganDonor>().map_err(|e| anyhow!(e))?
        }
        "biological_sex" => {
            profile.biological_sex = value.parse::<BiologicalSex>().map_err(|e| anyhow!(e))?
        }
        _ => bail!(
            "unknown profile key: {} (expected one of {})",
            key,
            KEYS.join(", ")
        ),
    }
    Ok(())
}

/// Read the stored profile, edit one field and write it back.
pub fn set_field(repo: &MedicalProfileRepo, key: &str, value: &str) -> Result<MedicalProfile> {
    let mut profile = repo.get()?;
    apply(&mut profile, key, value)?;
    if !repo.set(&profile) {
        bail!("store refused the medical profile");
    }
    Ok(profile)
}
