//! Capture configuration files.
//!
//! A configuration is a JSON document with three optional sections:
//!
//! ```json
//! {
//!   "global": { "overwrite_output": true },
//!   "inputs": [ { "filename": ":0.0", "args": ["-f", "x11grab"] } ],
//!   "outputs": [ { "kind": "other-stream", "options": { "filename": "out.mp4" } } ]
//! }
//! ```
//!
//! Option values are checked against the table schemas when the command is built.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::FfmpegCommand;
use crate::options::{OptionError, OptionValues};
use crate::streams::{
    generate_global_options, generate_output_stream, RegistryError, StreamRegistry, OTHER_STREAM,
};

/// Errors that can occur while loading or applying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid global options: {0}")]
    Options(#[from] OptionError),
    #[error("Output {index}: {source}")]
    Output {
        index: usize,
        #[source]
        source: RegistryError,
    },
}

/// An input passed through to ffmpeg unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub filename: String,
    /// Arguments placed before `-i`.
    #[serde(default)]
    pub args: Vec<String>,
}

/// One output, created through the stream registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_kind")]
    pub kind: String,
    #[serde(default)]
    pub options: OptionValues,
}

fn default_output_kind() -> String {
    OTHER_STREAM.to_string()
}

/// Full configuration for one ffmpeg invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    #[serde(default)]
    pub global: OptionValues,
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
    #[serde(default)]
    pub outputs: Vec<OutputConfig>,
}

impl CaptureConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded configuration from '{}'", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Translate this configuration into an ffmpeg command.
    pub fn build_command(&self, registry: &StreamRegistry) -> Result<FfmpegCommand, ConfigError> {
        let mut command = FfmpegCommand::new();
        generate_global_options(&mut command, self.global.clone())?;

        for input in &self.inputs {
            command.input(input.filename.clone(), input.args.iter().cloned());
        }

        for (index, output) in self.outputs.iter().enumerate() {
            generate_output_stream(registry, &output.kind, &mut command, output.options.clone())
                .map_err(|source| ConfigError::Output { index, source })?;
        }

        if self.outputs.is_empty() {
            log::warn!("Configuration has no outputs");
        }
        log::debug!("Built command: {}", command);
        Ok(command)
    }
}
