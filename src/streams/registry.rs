//! Output stream registry and factory functions.
//!
//! Kinds are registered explicitly, usually once at startup, and the registry
//! is passed to whoever builds commands.

use std::collections::HashMap;

use super::output::OutputStream;
use crate::command::FfmpegCommand;
use crate::options::{OptionError, OptionValues};

/// Name of the built-in kind that maps values straight onto [`OutputStream`].
pub const OTHER_STREAM: &str = "other-stream";

/// Builds an output stream from caller-supplied values.
pub type StreamConstructor = fn(OptionValues) -> Result<OutputStream, OptionError>;

/// A registered output stream kind.
#[derive(Debug, Clone, Copy)]
pub struct StreamKind {
    pub construct: StreamConstructor,
    pub help: &'static str,
}

/// Errors that can occur when generating a stream from the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unable to find stream '{name}'")]
    StreamNotFound { name: String },
    #[error("Invalid options for stream '{name}': {source}")]
    Options {
        name: String,
        #[source]
        source: OptionError,
    },
}

/// Name to constructor table for output stream kinds.
#[derive(Debug, Clone, Default)]
pub struct StreamRegistry {
    kinds: HashMap<String, StreamKind>,
}

impl StreamRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in kinds.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            OTHER_STREAM,
            StreamKind {
                construct: OutputStream::new,
                help: OutputStream::help(),
            },
        );
        log::info!("Stream registry initialized with {} kinds", registry.len());
        registry
    }

    /// Register `kind` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, kind: StreamKind) {
        let name = name.into();
        if self.kinds.insert(name.clone(), kind).is_some() {
            log::debug!("Replaced output stream kind '{}'", name);
        } else {
            log::debug!("Registered output stream kind '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&StreamKind> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn help(&self, name: &str) -> Option<&'static str> {
        self.kinds.get(name).map(|kind| kind.help)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Instantiate the kind registered under `name`.
    pub fn create(&self, name: &str, values: OptionValues) -> Result<OutputStream, RegistryError> {
        let Some(kind) = self.kinds.get(name) else {
            log::error!(
                "Unable to find stream {}! No stream instantiated with {} values.",
                name,
                values.len()
            );
            return Err(RegistryError::StreamNotFound {
                name: name.to_string(),
            });
        };
        log::debug!("Creating '{}' stream with options {:?}", name, values);
        (kind.construct)(values).map_err(|source| RegistryError::Options {
            name: name.to_string(),
            source,
        })
    }
}

/// Instantiate the stream kind `name` and add it to `command`.
///
/// `command` is left untouched when the kind is unknown or the values are invalid.
pub fn generate_output_stream(
    registry: &StreamRegistry,
    name: &str,
    command: &mut FfmpegCommand,
    values: OptionValues,
) -> Result<(), RegistryError> {
    registry.create(name, values)?.attach(command);
    Ok(())
}
