use crate::error::AppError;
use crate::model::responses::Asset;
use serde_json::Value;

/// Clip metadata copied next to the grade
pub const GRADE_METADATA_FIELDS: [&str; 14] = [
    "clipName",
    "clipIdentifier",
    "clipNumber",
    "lensModel",
    "asa",
    "whiteBalance",
    "greenTint",
    "location",
    "crewUnit",
    "indoorOutdoor",
    "dayNight",
    "scene",
    "shot",
    "take",
];

/// Columns of the grading CSV
pub const GRADE_CSV_FIELDS: [&str; 16] = [
    "clipName",
    "clipIdentifier",
    "clipNumber",
    "lensModel",
    "asa",
    "whiteBalance",
    "greenTint",
    "location",
    "crewUnit",
    "indoorOutdoor",
    "dayNight",
    "scene",
    "shot",
    "take",
    "grade_name",
    "grade_mode",
];

/// Flattens a shot fetched with `parts=gradeInfo` into one CSV record
///
/// The metadata fields are copied as they are (null when the shot lacks
/// them). `grade_name` and `grade_mode` come from `parts.gradeInfo.grade`.
///
/// # Returns
/// * `Err(AppError::Deserialization)` - If the shot carries no grade
pub fn flatten_grade_info(shot: &Asset) -> Result<Asset, AppError> {
    let grade = shot
        .get("parts")
        .and_then(|p| p.get("gradeInfo"))
        .and_then(|g| g.get("grade"))
        .ok_or_else(|| {
            AppError::Deserialization(format!(
                "asset {} has no parts.gradeInfo.grade",
                shot.get("id").and_then(Value::as_str).unwrap_or("?")
            ))
        })?;

    let mut result = Asset::new();
    for field in GRADE_METADATA_FIELDS {
        result.insert(
            field.to_string(),
            shot.get(field).cloned().unwrap_or(Value::Null),
        );
    }
    result.insert(
        "grade_name".to_string(),
        grade.get("name").cloned().unwrap_or(Value::Null),
    );
    result.insert(
        "grade_mode".to_string(),
        grade.get("mode").cloned().unwrap_or(Value::Null),
    );
    Ok(result)
}
