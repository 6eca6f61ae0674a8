use rhetor_engine::store::CategoryStore;
use rhetor_engine::taxonomy::{to_display, to_internal};

use super::CliError;

/// Print the pattern text bound to a LAT, looked up by display or
/// internal name. Revised text wins unless `original` is set.
pub fn patterns(store: &dyn CategoryStore, lat: &str, original: bool) -> Result<(), CliError> {
    let internal = to_internal(lat.trim());
    let p = store.patterns(&internal)?;
    if original {
        println!("{}", p.original);
    } else {
        println!("{}", p.effective());
    }
    Ok(())
}

/// Show help text for a cluster or dimension name.
pub fn info(store: &dyn CategoryStore, name: &str) -> Result<(), CliError> {
    let internal = to_internal(name.trim());
    if let Some(cluster) = store.cluster_info(&internal) {
        println!("cluster {}", to_display(&cluster.name));
        println!("{}", cluster.help);
        return Ok(());
    }
    if let Some(dimension) = store.dimension_info(&internal) {
        println!("dimension {}", to_display(&dimension.name));
        println!("{}", dimension.help);
        return Ok(());
    }
    Err(CliError::Invalid(format!(
        "unknown cluster or dimension: {}",
        name.trim()
    )))
}
