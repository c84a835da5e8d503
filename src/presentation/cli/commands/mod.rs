pub mod check;
pub mod daemon;
pub mod status;

use anyhow::Context;

use crate::application::config::TargetConfig;
use crate::application::services::monitor::MonitorService;

/// Register the `[[targets]]` entries of the config file, in file order.
///
/// # Errors
///
/// Returns an error naming the first entry the registry rejects.
pub fn register_targets(service: &MonitorService, targets: &[TargetConfig]) -> anyhow::Result<usize> {
    for (index, entry) in targets.iter().enumerate() {
        let target = service
            .register_target(&entry.url, entry.name.as_deref())
            .with_context(|| format!("invalid target #{} in config", index + 1))?;
        if !entry.enabled {
            service.set_enabled(target.id, false)?;
        }
    }
    Ok(targets.len())
}
