//! Global ffmpeg options and flags.

use crate::command::FfmpegCommand;
use crate::options::{
    DualNameFlag, OptionError, OptionSpec, OptionTable, OptionValue, OptionValues, TableSchema,
    ValueType,
};

/// Name of the option that prefixes the command with `sudo`. It has no ffmpeg flag.
pub const SUDO_OPTION: &str = "sudo";

static GLOBAL_OPTIONS: [OptionSpec; 15] = [
    OptionSpec::new("filter_thread_count", "filter_threads", ValueType::Int),
    OptionSpec::with_default("display_stats", "stats", OptionValue::Bool(true)),
    OptionSpec::with_default("send_progress", "progress", OptionValue::Bool(false)),
    OptionSpec::with_default("show_timestamps", "debug_ts", OptionValue::Bool(false)),
    OptionSpec::with_default("show_qp_histogram", "qphist", OptionValue::Bool(false)),
    OptionSpec::with_default("show_benchmark", "benchmark", OptionValue::Bool(false)),
    OptionSpec::with_default("show_benchmark_verbose", "benchmark_all", OptionValue::Bool(false)),
    OptionSpec::new("exit_time_limit", "timelimit", ValueType::Int),
    OptionSpec::with_default("dump_input_stderr", "dump", OptionValue::Bool(false)),
    OptionSpec::with_default("dump_payload_stderr", "hex", OptionValue::Bool(false)),
    OptionSpec::new("filter_complex_thread_count", "filter_complex_threads", ValueType::Int),
    OptionSpec::new("dump_sdp_file", "sdp_file", ValueType::String),
    OptionSpec::new("abort_on_flags", "abort_on", ValueType::String),
    OptionSpec::with_default("exit_on_error", "xerror", OptionValue::Bool(false)),
    OptionSpec::with_default("overwrite_output", "y", OptionValue::Bool(false)),
];

/// Schema of the global options table.
pub static GLOBAL_SCHEMA: TableSchema = TableSchema {
    name: "global",
    options: &GLOBAL_OPTIONS,
    dual_names: &[DualNameFlag::new("stats", "nostats"), DualNameFlag::new("y", "n")],
    exclusions: &[],
};

/// Parameter types accepted by [`GlobalOptions::new`], for configuration readers.
pub fn global_options_parameters() -> Vec<(&'static str, ValueType)> {
    let mut parameters = GLOBAL_SCHEMA.parameters();
    parameters.push((SUDO_OPTION, ValueType::Bool));
    parameters
}

/// Global options for an ffmpeg invocation.
///
/// | option | flag |
/// |---|---|
/// | `filter_thread_count` | `-filter_threads` |
/// | `display_stats` | `-stats` / `-nostats` |
/// | `send_progress` | `-progress` |
/// | `show_timestamps` | `-debug_ts` |
/// | `show_qp_histogram` | `-qphist` |
/// | `show_benchmark` | `-benchmark` |
/// | `show_benchmark_verbose` | `-benchmark_all` |
/// | `exit_time_limit` | `-timelimit` |
/// | `dump_input_stderr` | `-dump` |
/// | `dump_payload_stderr` | `-hex` |
/// | `filter_complex_thread_count` | `-filter_complex_threads` |
/// | `dump_sdp_file` | `-sdp_file` |
/// | `abort_on_flags` | `-abort_on` |
/// | `exit_on_error` | `-xerror` |
/// | `overwrite_output` | `-y` / `-n` |
/// | `sudo` | prefixes the command with `sudo` |
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    table: OptionTable,
    sudo: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            table: OptionTable::with_defaults(&GLOBAL_SCHEMA),
            sudo: false,
        }
    }
}

impl GlobalOptions {
    pub fn new(mut values: OptionValues) -> Result<Self, OptionError> {
        let sudo = match values.take(SUDO_OPTION) {
            Some(Some(value)) => value.as_bool().ok_or_else(|| OptionError::TypeMismatch {
                name: SUDO_OPTION.to_string(),
                expected: ValueType::Bool,
                found: value.value_type(),
            })?,
            _ => false,
        };
        let table = OptionTable::new(&GLOBAL_SCHEMA, &values)?;
        Ok(Self { table, sudo })
    }

    pub fn sudo(&self) -> bool {
        self.sudo
    }

    pub fn table(&self) -> &OptionTable {
        &self.table
    }

    pub fn arguments(&self) -> &[String] {
        self.table.arguments()
    }

    /// Apply these options to `command`.
    pub fn attach(&self, command: &mut FfmpegCommand) {
        command
            .set_sudo(self.sudo)
            .global_args(self.arguments().iter().cloned());
    }

    pub fn help() -> &'static str {
        "Used to specify global arguments for ffmpeg. \
         Official documentation: 'https://ffmpeg.org/ffmpeg.html#Main-options' and \
         'https://ffmpeg.org/ffmpeg.html#Advanced-options'."
    }
}

/// Build global options from `values` and apply them to `command`.
pub fn generate_global_options(
    command: &mut FfmpegCommand,
    values: OptionValues,
) -> Result<(), OptionError> {
    GlobalOptions::new(values)?.attach(command);
    Ok(())
}
