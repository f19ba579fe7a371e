use serde::{Deserialize, Serialize};

/// Report tool configuration file (YAML).
///
/// Example `~/.k3rs/report.yaml`:
/// ```yaml
/// server: https://10.0.0.1:6443
/// token: my-secret-token
/// node-name: worker-1
/// cluster-report: true
/// output: table
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfigFile {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "node-name")]
    pub node_name: Option<String>,
    #[serde(default, alias = "cluster-report")]
    pub cluster_report: Option<bool>,
    #[serde(default)]
    pub output: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
