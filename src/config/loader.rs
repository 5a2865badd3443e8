use std::path::Path;

use serde::de::DeserializeOwned;

use super::{BalancerConfig, ConfigError};

/// Load and validate a balancer configuration from a YAML file
pub fn load_config<T, P>(path: P) -> Result<BalancerConfig<T>, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config = BalancerConfig::from_yaml(&content)?;

    tracing::debug!(
        path = %path.display(),
        resources = config.resources.len(),
        policy = %config.policy,
        "Loaded balancer configuration"
    );

    Ok(config)
}
