use crate::model::responses::Asset;
use crate::model::utils::{field_matches, field_truthy};

/// Keeps assets tagged with `shooting_day`; `None` keeps everything
pub fn matches_shooting_day(asset: &Asset, shooting_day: Option<&str>) -> bool {
    match shooting_day {
        None => true,
        Some(day) => field_matches(asset, "shootingDay", day),
    }
}

/// Flagged clips that carry dynamic metadata
pub fn is_flagged_with_dynamic_metadata(asset: &Asset) -> bool {
    field_truthy(asset, "flag") && field_truthy(asset, "hasDynamicMetadata")
}

/// Assets of a shooting day, in input order
pub fn filter_by_shooting_day(assets: Vec<Asset>, shooting_day: Option<&str>) -> Vec<Asset> {
    assets
        .into_iter()
        .filter(|a| matches_shooting_day(a, shooting_day))
        .collect()
}
