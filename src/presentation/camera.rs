/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::Asset;
use crate::model::utils::field_str;
use prettytable::{Table, row};
use std::collections::BTreeMap;

/// Human readable camera name built from the `manufacturer` and `model` fields
///
/// | manufacturer | model   | label                        |
/// |--------------|---------|------------------------------|
/// | null         | null    | `Unknown`                    |
/// | `ARRI`       | null    | `Unknown ARRI camera`        |
/// | null         | `Venice`| `Venice`                     |
/// | `ARRI`       | `Mini`  | `ARRI Mini`                  |
#[must_use]
pub fn camera_label(asset: &Asset) -> String {
    match (field_str(asset, "manufacturer"), field_str(asset, "model")) {
        (None, None) => "Unknown".to_string(),
        (Some(manufacturer), None) => format!("Unknown {manufacturer} camera"),
        (None, Some(model)) => model.to_string(),
        (Some(manufacturer), Some(model)) => format!("{manufacturer} {model}"),
    }
}

/// Groups clips by [`camera_label`], keeping the clip order within each group
#[must_use]
pub fn group_by_camera(assets: &[Asset]) -> BTreeMap<String, Vec<&Asset>> {
    let mut groups: BTreeMap<String, Vec<&Asset>> = BTreeMap::new();
    for asset in assets {
        groups.entry(camera_label(asset)).or_default().push(asset);
    }
    groups
}

/// Table with one row per camera and its clip count
#[must_use]
pub fn camera_summary_table(groups: &BTreeMap<String, Vec<&Asset>>) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Camera", "Clips"]);
    for (camera, clips) in groups {
        table.add_row(row![camera, clips.len()]);
    }
    table
}
