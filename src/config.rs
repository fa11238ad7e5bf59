use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ornament::OrnamentStyle;
use crate::surface::Color;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about = "Taps a chain of rotating corner lines into motion")]
pub struct Cli {
    /// YAML file with chain, timing and style settings
    #[clap(short, long, env = "CORNERED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of ornaments in the chain
    #[clap(long)]
    pub nodes: Option<NonZeroUsize>,

    /// Progress added per frame, in (0, 1]
    #[clap(long)]
    pub tick: Option<f64>,

    /// Pause between frames in milliseconds
    #[clap(long)]
    pub frame_delay_ms: Option<u64>,

    #[clap(long)]
    pub fullscreen: bool,

    /// Log filter such as `debug` or `cornered_rot_lines=trace`
    #[clap(long, env = "CORNERED_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 600,
            height: 900,
            title: "Cornered rot lines".to_string(),
            fullscreen: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub nodes: NonZeroUsize,
    pub tick: f64,
    pub frame_delay_ms: u64,
    pub lines: usize,
    pub up_lines: usize,
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub rot_deg: f32,
    pub foreground: Color,
    pub background: Color,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        let style = OrnamentStyle::default();
        Config {
            nodes: NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN),
            tick: 0.02,
            frame_delay_ms: 20,
            lines: style.lines,
            up_lines: style.up_lines,
            stroke_factor: style.stroke_factor,
            size_factor: style.size_factor,
            rot_deg: style.rot_deg,
            foreground: style.foreground,
            background: Color::new(0xbd, 0xbd, 0xbd),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Reads the file named on the command line (if any), applies the
    /// command line overrides and validates the result.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply(&mut self, cli: &Cli) {
        if let Some(nodes) = cli.nodes {
            self.nodes = nodes;
        }
        if let Some(tick) = cli.tick {
            self.tick = tick;
        }
        if let Some(delay) = cli.frame_delay_ms {
            self.frame_delay_ms = delay;
        }
        if cli.fullscreen {
            self.window.fullscreen = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        if !(self.tick > 0.0 && self.tick <= 1.0) {
            return invalid("tick", "must lie in (0, 1]");
        }
        if self.lines == 0 {
            return invalid("lines", "must be at least 1");
        }
        if self.up_lines == 0 {
            return invalid("up_lines", "must be at least 1");
        }
        if !(self.stroke_factor > 0.0) {
            return invalid("stroke_factor", "must be positive");
        }
        if !(self.size_factor > 0.0) {
            return invalid("size_factor", "must be positive");
        }
        if !self.rot_deg.is_finite() {
            return invalid("rot_deg", "must be finite");
        }
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window", "must have a non-zero size");
        }
        Ok(())
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn style(&self) -> OrnamentStyle {
        OrnamentStyle {
            lines: self.lines,
            up_lines: self.up_lines,
            stroke_factor: self.stroke_factor,
            size_factor: self.size_factor,
            rot_deg: self.rot_deg,
            foreground: self.foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    fn cli_for(file: &tempfile::NamedTempFile) -> Cli {
        Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        }
    }

    #[test]
    fn defaults_match_the_classic_look() {
        let config = Config::load(&Cli::default()).unwrap();
        assert_eq!(config.nodes.get(), 5);
        assert_eq!(config.tick, 0.02);
        assert_eq!(config.frame_delay(), Duration::from_millis(20));
        assert_eq!(config.foreground.to_string(), "#4CAF50");
        assert_eq!(config.background.to_string(), "#BDBDBD");
        assert_eq!(config.style(), OrnamentStyle::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            "nodes: 7\ntick: 0.1\nforeground: \"#102030\"\nwindow:\n  title: demo\n",
        );
        let config = Config::load(&cli_for(&file)).unwrap();
        assert_eq!(config.nodes.get(), 7);
        assert_eq!(config.tick, 0.1);
        assert_eq!(config.foreground, Color::new(0x10, 0x20, 0x30));
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 600);
        assert_eq!(config.lines, 2);
    }

    #[test]
    fn command_line_overrides_the_file() {
        let file = write_config("nodes: 7\nframe_delay_ms: 50\n");
        let cli = Cli {
            nodes: NonZeroUsize::new(3),
            frame_delay_ms: Some(5),
            fullscreen: true,
            ..cli_for(&file)
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.nodes.get(), 3);
        assert_eq!(config.frame_delay_ms, 5);
        assert!(config.window.fullscreen);
    }

    #[test]
    fn rejects_out_of_range_ticks() {
        for tick in [0.0, -0.1, 1.5, f64::NAN] {
            let cli = Cli {
                tick: Some(tick),
                ..Cli::default()
            };
            let err = Config::load(&cli).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { field: "tick", .. }), "{}", tick);
        }
    }

    #[test]
    fn rejects_zero_nodes_and_unknown_keys() {
        let zero = write_config("nodes: 0\n");
        assert!(matches!(Config::load(&cli_for(&zero)), Err(ConfigError::Parse { .. })));

        let unknown = write_config("colour: red\n");
        assert!(matches!(Config::load(&cli_for(&unknown)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn rejects_bad_colors() {
        let file = write_config("background: grey\n");
        let err = Config::load(&cli_for(&file)).unwrap_err();
        assert!(err.to_string().contains("#RRGGBB"), "{}", err);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let file = write_config("up_lines: 0\n");
        let err = Config::load(&cli_for(&file)).unwrap_err();
        assert_eq!(err.to_string(), "up_lines must be at least 1");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/cornered.yaml")),
            ..Cli::default()
        };
        assert!(matches!(Config::load(&cli), Err(ConfigError::Read { .. })));
    }
}
