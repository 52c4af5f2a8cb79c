//! Info command: package metadata and the effective quiz settings.

use std::fmt::Write;

use clap::Args;
use critter_match_core::config::{Config, ConfigSources};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{MatchCounts, input_limit};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

/// Settings after defaults are applied, as `result` and `quiz` see them.
#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    top_matches: usize,
    worst_matches: usize,
    strict: bool,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let counts = MatchCounts::from_config(config);
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top_matches: counts.top,
            worst_matches: counts.worst,
            strict: config.strict,
            max_input_bytes: input_limit(config),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

impl FullInfo {
    fn render(&self) -> String {
        let mut out = String::new();
        let pkg = &self.package;
        let cfg = &self.config;

        let _ = writeln!(
            out,
            "{} {}",
            pkg.name.if_supports_color(Stream::Stdout, |t| t.bold()),
            pkg.version.if_supports_color(Stream::Stdout, |t| t.green())
        );
        if !pkg.description.is_empty() {
            let _ = writeln!(out, "{}", pkg.description);
        }
        for (label, value) in [("License", pkg.license), ("Repository", pkg.repository)] {
            if !value.is_empty() {
                line(&mut out, label, value);
            }
        }

        heading(&mut out, "Configuration");
        line(
            &mut out,
            "Config file",
            cfg.config_file.as_deref().unwrap_or("none loaded"),
        );
        line(&mut out, "Log level", cfg.log_level);
        if let Some(ref dir) = cfg.log_dir {
            line(&mut out, "Log directory", dir);
        }

        heading(&mut out, "Matching");
        line(&mut out, "Top matches", &cfg.top_matches.to_string());
        line(&mut out, "Worst matches", &cfg.worst_matches.to_string());
        line(&mut out, "Strict", if cfg.strict { "yes" } else { "no" });
        let limit = cfg
            .max_input_bytes
            .map_or_else(|| "disabled".to_string(), |max| format!("{max} bytes"));
        line(&mut out, "Input limit", &limit);
        out
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold().underline().to_string())
    );
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "{}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", info.render());
    }
    Ok(())
}
