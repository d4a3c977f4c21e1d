//! CSV output of the resource inventory

use log::debug;
use std::path::Path;

use crate::error::Result;
use crate::hcp::Resource;

/// Write resources to `path` as CSV, replacing any existing file
///
/// Header is `name,type,identifier,org,workspace_id,workspace_name`; rows keep
/// input order and an absent identifier is written as an empty field.
pub fn write_csv(resources: &[Resource], path: &Path) -> Result<()> {
    debug!(
        "Writing {} resources to: {}",
        resources.len(),
        path.display()
    );

    let mut writer = csv::Writer::from_path(path)?;

    if resources.is_empty() {
        // serialize() emits the header with the first record only
        writer.write_record(crate::config::output::CSV_HEADER)?;
    }
    for resource in resources {
        writer.serialize(resource)?;
    }

    writer.flush()?;
    Ok(())
}
