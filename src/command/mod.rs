//! FFmpeg invocation builder.
//!
//! Collects global arguments, inputs and outputs and lays them out in the
//! order ffmpeg expects:
//!
//! ```text
//! [sudo] ffmpeg [global options] {[input options] -i input}... {[output options] output}...
//! ```

use std::fmt;
use std::process::Command;

/// Program invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

#[derive(Debug, Clone, PartialEq)]
struct Endpoint {
    filename: String,
    args: Vec<String>,
}

/// Builder for a single ffmpeg command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FfmpegCommand {
    program: String,
    sudo: bool,
    global_args: Vec<String>,
    inputs: Vec<Endpoint>,
    outputs: Vec<Endpoint>,
}

impl Default for FfmpegCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            sudo: false,
            global_args: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl FfmpegCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different ffmpeg executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Prefix the command with `sudo`.
    pub fn set_sudo(&mut self, sudo: bool) -> &mut Self {
        self.sudo = sudo;
        self
    }

    pub fn sudo(&self) -> bool {
        self.sudo
    }

    /// Append global arguments.
    pub fn global_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add an input, with `args` placed before its `-i`.
    pub fn input<I, S>(&mut self, filename: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.push(Endpoint {
            filename: filename.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Add an output, with `args` placed before its filename.
    pub fn output<I, S>(&mut self, filename: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs.push(Endpoint {
            filename: filename.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Arguments passed to the ffmpeg program.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.global_args.clone();

        for input in &self.inputs {
            args.extend(input.args.iter().cloned());
            args.push("-i".to_string());
            args.push(input.filename.clone());
        }

        for output in &self.outputs {
            args.extend(output.args.iter().cloned());
            args.push(output.filename.clone());
        }

        args
    }

    /// Full command line, including `sudo` and the program name.
    pub fn to_vec(&self) -> Vec<String> {
        let mut line = Vec::new();
        if self.sudo {
            line.push("sudo".to_string());
        }
        line.push(self.program.clone());
        line.extend(self.args());
        line
    }

    /// Prepare a process for this command line. The process is not spawned.
    pub fn to_command(&self) -> Command {
        let mut command = if self.sudo {
            let mut command = Command::new("sudo");
            command.arg(&self.program);
            command
        } else {
            Command::new(&self.program)
        };
        command.args(self.args());
        command
    }
}

impl fmt::Display for FfmpegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_vec().join(" "))
    }
}
