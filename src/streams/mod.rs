//! FFmpeg option tables for each invocation stage.
//!
//! - Global options: flags that apply to the whole invocation
//! - Output streams: per-output options, created through a [`StreamRegistry`]

pub mod global;
pub mod output;
pub mod registry;

pub use global::{generate_global_options, global_options_parameters, GlobalOptions};
pub use output::{output_stream_parameters, OutputStream};
pub use registry::{
    generate_output_stream, RegistryError, StreamConstructor, StreamKind, StreamRegistry,
    OTHER_STREAM,
};
