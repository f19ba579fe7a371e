//! Merge CLI flags with the config file: CLI args > config file > defaults.

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use pkg_constants::network::DEFAULT_API_ADDR;
use pkg_constants::paths::{CONFIG_DIR, CONFIG_FILENAME, FALLBACK_CONFIG_PATH};
use pkg_report::ReportConfig;
use pkg_types::config::ReportConfigFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// CLI-provided values; `None` means "not given on the command line".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub token: Option<String>,
    pub node_name: Option<String>,
    pub cluster_report: bool,
    pub output: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: String,
    pub token: Option<String>,
    pub output: OutputFormat,
    pub report: ReportConfig,
}

impl Settings {
    pub fn resolve(cli: Overrides, file: ReportConfigFile) -> Result<Self> {
        let output = match (cli.output, file.output) {
            (Some(o), _) => o,
            (None, Some(raw)) => OutputFormat::from_str(&raw, true)
                .map_err(|_| anyhow!("invalid output format '{}' in config file", raw))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            server: cli
                .server
                .or(file.server)
                .unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
            token: cli.token.or(file.token),
            output,
            report: ReportConfig::new(
                cli.node_name.or(file.node_name),
                cli.cluster_report || file.cluster_report.unwrap_or(false),
            ),
        })
    }
}

/// `~/.k3rs/report.yaml`, or a system path when there is no home directory.
pub fn default_config_path() -> String {
    dirs::home_dir()
        .map(|home| {
            home.join(CONFIG_DIR)
                .join(CONFIG_FILENAME)
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| FALLBACK_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_given() {
        let s = Settings::resolve(Overrides::default(), ReportConfigFile::default()).unwrap();
        assert_eq!(s.server, DEFAULT_API_ADDR);
        assert!(s.token.is_none());
        assert_eq!(s.output, OutputFormat::Table);
        assert!(s.report.is_empty());
    }

    #[test]
    fn cli_wins_over_file() {
        let cli = Overrides {
            server: Some("http://cli:6443".to_string()),
            node_name: Some("worker-2".to_string()),
            output: Some(OutputFormat::Json),
            ..Default::default()
        };
        let file = ReportConfigFile {
            server: Some("http://file:6443".to_string()),
            token: Some("file-token".to_string()),
            node_name: Some("worker-1".to_string()),
            cluster_report: Some(true),
            output: Some("table".to_string()),
        };
        let s = Settings::resolve(cli, file).unwrap();
        assert_eq!(s.server, "http://cli:6443");
        assert_eq!(s.token.as_deref(), Some("file-token"));
        assert_eq!(s.output, OutputFormat::Json);
        assert_eq!(s.report.node_name.as_deref(), Some("worker-2"));
        assert!(s.report.cluster_report);
    }

    #[test]
    fn file_output_is_case_insensitive() {
        let file = ReportConfigFile {
            output: Some("JSON".to_string()),
            ..Default::default()
        };
        let s = Settings::resolve(Overrides::default(), file).unwrap();
        assert_eq!(s.output, OutputFormat::Json);
    }

    #[test]
    fn bad_file_output_is_rejected() {
        let file = ReportConfigFile {
            output: Some("xml".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(Overrides::default(), file).is_err());
    }

    #[test]
    fn default_path_ends_with_report_yaml() {
        assert!(default_config_path().ends_with("report.yaml"));
    }
}
