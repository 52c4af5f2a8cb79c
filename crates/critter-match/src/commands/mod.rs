//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use critter_match_core::Config;
use critter_match_core::scoring::DEFAULT_MATCH_COUNT;

pub mod animals;
pub mod info;
pub mod questions;
pub mod quiz;
pub mod result;
pub mod schema;

/// How many closest and farthest animals to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCounts {
    /// Closest animals.
    pub top: usize,
    /// Farthest animals.
    pub worst: usize,
}

impl Default for MatchCounts {
    fn default() -> Self {
        Self {
            top: DEFAULT_MATCH_COUNT,
            worst: DEFAULT_MATCH_COUNT,
        }
    }
}

impl MatchCounts {
    /// Counts from config, falling back to the engine default.
    pub fn from_config(config: &Config) -> Self {
        Self {
            top: config.top_matches.unwrap_or(DEFAULT_MATCH_COUNT),
            worst: config.worst_matches.unwrap_or(DEFAULT_MATCH_COUNT),
        }
    }

    /// Apply per-command flags over these defaults.
    pub fn with_overrides(self, top: Option<usize>, worst: Option<usize>) -> Self {
        Self {
            top: top.unwrap_or(self.top),
            worst: worst.unwrap_or(self.worst),
        }
    }
}

/// The answer payload size limit after defaults, or `None` when disabled.
pub fn input_limit(config: &Config) -> Option<usize> {
    if config.disable_input_limit {
        None
    } else {
        Some(
            config
                .max_input_bytes
                .unwrap_or(critter_match_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of `reader`, failing once more than `max_bytes` arrive.
pub fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read input")?;
            if content.len() > max {
                anyhow::bail!("input too large: more than {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .context("failed to read input")?;
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_to_three() {
        assert_eq!(
            MatchCounts::from_config(&Config::default()),
            MatchCounts { top: 3, worst: 3 }
        );
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            top_matches: Some(5),
            worst_matches: Some(1),
            ..Config::default()
        };
        let counts = MatchCounts::from_config(&config).with_overrides(None, Some(4));
        assert_eq!(counts, MatchCounts { top: 5, worst: 4 });
    }

    #[test]
    fn input_limit_defaults_and_disables() {
        assert_eq!(input_limit(&Config::default()), Some(64 * 1024));
        let config = Config {
            max_input_bytes: Some(10),
            disable_input_limit: true,
            ..Config::default()
        };
        assert_eq!(input_limit(&config), None);
    }

    #[test]
    fn read_limited_enforces_limit() {
        let input = "5".repeat(40);
        assert!(read_limited(input.as_bytes(), Some(30)).is_err());
        assert_eq!(read_limited(input.as_bytes(), Some(40)).unwrap(), input);
        assert_eq!(read_limited(input.as_bytes(), None).unwrap(), input);
    }

    #[test]
    fn read_input_file_checks_size() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "3".repeat(30)).unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();
        assert!(read_input_file(path, Some(10)).is_err());
        assert_eq!(read_input_file(path, None).unwrap().len(), 30);
    }
}
