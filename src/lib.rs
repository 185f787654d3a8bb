//! Simple Capture Core
//!
//! Translates capture configuration into ordered FFmpeg command-line arguments.
//!
//! # Features
//!
//! - Declarative option tables mapping configuration names to ffmpeg flags
//! - Boolean flags rendered as presence/absence or as dual names (`-stats`/`-nostats`)
//! - Mutually exclusive options resolved by priority (`-t` over `-to`)
//! - Explicit registry of output stream kinds
//! - JSON configuration files via serde
//! - Python bindings via PyO3 (when `python` feature is enabled)
//!
//! # Example
//! ```
//! use simple_capture::{FfmpegCommand, GlobalOptions, OptionValues, OutputStream};
//!
//! let mut command = FfmpegCommand::new();
//! GlobalOptions::new(OptionValues::new().with("overwrite_output", true))
//!     .unwrap()
//!     .attach(&mut command);
//! OutputStream::new(
//!     OptionValues::new()
//!         .with("filename", "out.mp4")
//!         .with("duration", "10")
//!         .with("end_position", "20"),
//! )
//! .unwrap()
//! .attach(&mut command);
//!
//! assert_eq!(command.args(), ["-stats", "-y", "-t", "10", "out.mp4"]);
//! ```

pub mod command;
pub mod config;
pub mod logging;
pub mod options;
pub mod streams;

// Re-export commonly used types
pub use command::FfmpegCommand;
pub use config::{CaptureConfig, ConfigError};
pub use logging::{init_log, LogError};
pub use options::{OptionError, OptionTable, OptionValue, OptionValues, ValueType};
pub use streams::{
    generate_global_options, generate_output_stream, global_options_parameters,
    output_stream_parameters, GlobalOptions, OutputStream, RegistryError, StreamRegistry,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use crate::config::CaptureConfig;
    use crate::options::{OptionValue, OptionValues};
    use crate::streams::{GlobalOptions, StreamRegistry};
    use pyo3::exceptions::{PyKeyError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::{PyBool, PyDict, PyFloat, PyInt};

    fn to_values(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<OptionValues> {
        let mut values = OptionValues::new();
        let Some(kwargs) = kwargs else {
            return Ok(values);
        };
        for (key, value) in kwargs.iter() {
            let name: String = key.extract()?;
            if value.is_none() {
                values.unset(name);
                continue;
            }
            // bool is a subclass of int in Python, so it must be checked first.
            let value = if value.is_instance_of::<PyBool>() {
                OptionValue::Bool(value.extract()?)
            } else if value.is_instance_of::<PyInt>() {
                OptionValue::Int(value.extract()?)
            } else if value.is_instance_of::<PyFloat>() {
                OptionValue::Float(value.extract()?)
            } else {
                OptionValue::Str(value.extract()?)
            };
            values.set(name, value);
        }
        Ok(values)
    }

    /// Render global options to ffmpeg arguments.
    #[pyfunction]
    #[pyo3(signature = (**kwargs))]
    fn global_arguments(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Vec<String>> {
        let options =
            GlobalOptions::new(to_values(kwargs)?).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(options.arguments().to_vec())
    }

    /// Render an output stream to ffmpeg arguments, filename last.
    #[pyfunction]
    #[pyo3(signature = (kind, **kwargs))]
    fn output_arguments(kind: &str, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Vec<String>> {
        let registry = StreamRegistry::with_builtin();
        if !registry.contains(kind) {
            return Err(PyKeyError::new_err(format!("Unknown stream: {}", kind)));
        }
        let stream = registry
            .create(kind, to_values(kwargs)?)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let mut arguments = stream.arguments().to_vec();
        arguments.push(stream.filename().to_string());
        Ok(arguments)
    }

    /// Build the full command line described by a JSON configuration.
    #[pyfunction]
    fn build_command(config_json: &str) -> PyResult<Vec<String>> {
        let config =
            CaptureConfig::from_json(config_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let command = config
            .build_command(&StreamRegistry::with_builtin())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(command.to_vec())
    }

    /// List all registered output stream kinds.
    #[pyfunction]
    fn list_streams() -> Vec<(String, String)> {
        let registry = StreamRegistry::with_builtin();
        registry
            .names()
            .into_iter()
            .map(|name| {
                let help = registry.help(name).unwrap_or_default();
                (name.to_string(), help.to_string())
            })
            .collect()
    }

    /// Simple Capture Python module
    #[pymodule]
    pub fn simple_capture(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;
        m.add_function(wrap_pyfunction!(global_arguments, m)?)?;
        m.add_function(wrap_pyfunction!(output_arguments, m)?)?;
        m.add_function(wrap_pyfunction!(build_command, m)?)?;
        m.add_function(wrap_pyfunction!(list_streams, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python_bindings::*;
