mod loader;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::balance::{BalanceError, Balancer, Policy, Resource};

pub use loader::load_config;

/// Files tried, relative to the working directory, when no path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = ["balancer.yaml", "balancer.yml", "config/balancer.yaml"];

/// Balancer configuration: the resource set and the default selection policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BalancerConfig<T = String> {
    /// Policy name: "priority_weighted" | "priority_random" | "random_weighted" | "random"
    #[serde(default = "default_policy")]
    pub policy: String,
    /// Floor for the priority policies
    #[serde(default)]
    pub floor: u64,
    pub resources: Vec<Resource<T>>,
}

fn default_policy() -> String {
    Policy::default().name().to_string()
}

impl<T> BalancerConfig<T> {
    pub fn new(resources: Vec<Resource<T>>) -> Self {
        Self {
            policy: default_policy(),
            floor: 0,
            resources,
        }
    }

    /// The configured policy with its floor applied
    pub fn policy(&self) -> Result<Policy, ConfigError> {
        self.policy
            .parse::<Policy>()
            .map(|p| p.with_floor(self.floor))
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resources.is_empty() {
            return Err(ConfigError::Validation(
                "at least one resource is required".to_string(),
            ));
        }
        self.policy()?;
        Ok(())
    }

    /// Build a balancer over the configured resources
    pub fn build(self) -> Result<Balancer<T>, BalanceError> {
        Balancer::new(self.resources)
    }
}

impl<T: DeserializeOwned> BalancerConfig<T> {
    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Load configuration with fallback to the default paths
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => Self::load_default_from(Path::new(".")),
        }
    }

    fn load_default_from(dir: &Path) -> Result<Self, ConfigError> {
        for p in DEFAULT_CONFIG_PATHS {
            let path = dir.join(p);
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Err(ConfigError::NotFound(format!(
            "No config file found. Tried: {}",
            DEFAULT_CONFIG_PATHS.join(", ")
        )))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> Vec<Resource<String>> {
        vec![
            Resource::new(10, 60, "a".to_string()),
            Resource::new(20, 0, "d".to_string()),
        ]
    }

    #[test]
    fn test_config_new_defaults() {
        let config = BalancerConfig::new(resources());
        assert_eq!(config.policy, "priority_weighted");
        assert_eq!(config.floor, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_policy_with_floor() {
        let mut config = BalancerConfig::new(resources());
        config.policy = "priority_weighted".to_string();
        config.floor = 15;
        assert_eq!(config.policy().unwrap(), Policy::PriorityWeighted(15));

        config.policy = "random".to_string();
        assert_eq!(config.policy().unwrap(), Policy::Random);
    }

    #[test]
    fn test_config_unknown_policy() {
        let mut config = BalancerConfig::new(resources());
        config.policy = "least_connections".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("least_connections"));
    }

    #[test]
    fn test_config_from_yaml_rejects_unknown_policy() {
        let result = BalancerConfig::<String>::from_yaml(
            "policy: fastest\nresources:\n  - target: a\n",
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_config_missing_resources() {
        let result = BalancerConfig::<String>::from_yaml("policy: random\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_build() {
        let config = BalancerConfig::<String>::from_yaml(
            r#"
policy: priority_weighted
floor: 11
resources:
  - { target: a, priority: 10, weight: 60 }
  - { target: d, priority: 20 }
  - { target: e, priority: 20 }
"#,
        )
        .unwrap();

        let policy = config.policy().unwrap();
        let mut lb = config.build().unwrap();
        assert_eq!(lb.priorities().collect::<Vec<_>>(), vec![10, 20]);

        let picked = lb.select(policy).unwrap();
        assert_eq!(picked.priority, 20);
        assert!(picked.target == "d" || picked.target == "e");
    }

    #[test]
    fn test_config_serialize_round_trip() {
        let config = BalancerConfig::new(resources());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["policy"], "priority_weighted");
        assert_eq!(json["resources"][0]["target"], "a");
        assert_eq!(json["resources"][1]["priority"], 20);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound("balancer.yaml".to_string());
        assert!(err.to_string().contains("balancer.yaml"));

        let err = ConfigError::Parse(serde_yaml::from_str::<BalancerConfig>("invalid").unwrap_err());
        assert!(err.to_string().contains("parse"));

        let err = ConfigError::Validation("empty resources".to_string());
        assert!(err.to_string().contains("empty resources"));
    }

    #[test]
    fn test_load_default_from_empty_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = BalancerConfig::<String>::load_default_from(temp_dir.path());
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_default_from_finds_yml() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("balancer.yml"),
            "policy: random\nresources:\n  - target: only\n",
        )
        .unwrap();

        let config = BalancerConfig::<String>::load_default_from(temp_dir.path()).unwrap();
        assert_eq!(config.policy().unwrap(), Policy::Random);
        assert_eq!(config.resources[0].target, "only");
    }

    #[test]
    fn test_load_or_default_with_path() {
        let result = BalancerConfig::<String>::load_or_default(Some(Path::new("/nonexistent/balancer.yaml")));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }
}
