//! Output stream options.

use crate::command::FfmpegCommand;
use crate::options::{
    MutualExclusionGroup, OptionError, OptionSpec, OptionTable, OptionValue, OptionValues,
    TableSchema, ValueType,
};

/// Required option naming the output file. Rendered as the output's positional argument.
pub const FILENAME_OPTION: &str = "filename";

static OUTPUT_OPTIONS: [OptionSpec; 21] = [
    OptionSpec::new("fmt", "f", ValueType::String),
    OptionSpec::new("file_size", "fs", ValueType::Int),
    OptionSpec::new("video_codec", "vcodec", ValueType::String),
    OptionSpec::new("audio_codec", "acodec", ValueType::String),
    OptionSpec::new("duration", "t", ValueType::String),
    OptionSpec::new("end_position", "to", ValueType::String),
    OptionSpec::new("seek_position", "ss", ValueType::String),
    OptionSpec::new("timestamp", "timestamp", ValueType::String),
    OptionSpec::new("target", "target", ValueType::String),
    OptionSpec::new("preset", "pre", ValueType::String),
    OptionSpec::new("framerate", "framerate", ValueType::Float),
    OptionSpec::new("video_size", "s", ValueType::String),
    OptionSpec::new("aspect_ratio", "aspect", ValueType::String),
    OptionSpec::new("pixel_format", "pix_fmt", ValueType::String),
    OptionSpec::new("sample_rate", "ar", ValueType::Int),
    OptionSpec::new("channels", "ac", ValueType::Int),
    OptionSpec::new("sample_format", "sample_fmt", ValueType::String),
    OptionSpec::new("fourcc", "atag", ValueType::String),
    OptionSpec::new("minimum_rate", "minrate", ValueType::String),
    OptionSpec::new("maximum_rate", "maxrate", ValueType::String),
    OptionSpec::new("buffer_size", "bufsize", ValueType::String),
];

/// Schema of the output stream table. `-t` takes precedence over `-to`.
pub static OUTPUT_SCHEMA: TableSchema = TableSchema {
    name: "output",
    options: &OUTPUT_OPTIONS,
    dual_names: &[],
    exclusions: &[MutualExclusionGroup(&["t", "to"])],
};

/// Parameter types accepted by [`OutputStream::new`], for configuration readers.
pub fn output_stream_parameters() -> Vec<(&'static str, ValueType)> {
    let mut parameters = vec![(FILENAME_OPTION, ValueType::String)];
    parameters.extend(OUTPUT_SCHEMA.parameters());
    parameters
}

/// An ffmpeg output file and its per-output options.
#[derive(Debug, Clone)]
pub struct OutputStream {
    filename: String,
    table: OptionTable,
}

impl OutputStream {
    /// Build an output from `values`, which must include a non-empty `filename`.
    pub fn new(mut values: OptionValues) -> Result<Self, OptionError> {
        let filename = match values.take(FILENAME_OPTION) {
            Some(Some(OptionValue::Str(filename))) if !filename.is_empty() => filename,
            Some(Some(OptionValue::Str(_))) | Some(None) | None => {
                return Err(OptionError::MissingRequired {
                    name: FILENAME_OPTION.to_string(),
                })
            }
            Some(Some(other)) => {
                return Err(OptionError::TypeMismatch {
                    name: FILENAME_OPTION.to_string(),
                    expected: ValueType::String,
                    found: other.value_type(),
                })
            }
        };
        let table = OptionTable::new(&OUTPUT_SCHEMA, &values)?;
        Ok(Self { filename, table })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn table(&self) -> &OptionTable {
        &self.table
    }

    /// Option arguments, without the filename.
    pub fn arguments(&self) -> &[String] {
        self.table.arguments()
    }

    /// Add this output to `command`.
    pub fn attach(&self, command: &mut FfmpegCommand) {
        command.output(self.filename.clone(), self.arguments().iter().cloned());
    }

    pub fn help() -> &'static str {
        "Used to specify an output file and its options for ffmpeg. \
         Official documentation: 'https://ffmpeg.org/ffmpeg.html#Main-options'."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_only() {
        let stream = OutputStream::new(OptionValues::new().with("filename", "out.mp4")).unwrap();
        assert_eq!(stream.filename(), "out.mp4");
        assert!(stream.arguments().is_empty());
    }

    #[test]
    fn test_duration_beats_end_position() {
        let values = OptionValues::new()
            .with("filename", "out.mp4")
            .with("duration", "10")
            .with("end_position", "20");
        let stream = OutputStream::new(values).unwrap();
        assert_eq!(stream.arguments(), ["-t", "10"]);
    }

    #[test]
    fn test_end_position_alone() {
        let values = OptionValues::new()
            .with("filename", "out.mp4")
            .with("end_position", "20");
        let stream = OutputStream::new(values).unwrap();
        assert_eq!(stream.arguments(), ["-to", "20"]);
    }

    #[test]
    fn test_declaration_order() {
        let values = OptionValues::new()
            .with("filename", "out.mkv")
            .with("sample_rate", 48000)
            .with("fmt", "matroska")
            .with("framerate", 30)
            .with("video_codec", "libx264");
        let stream = OutputStream::new(values).unwrap();
        assert_eq!(
            stream.arguments(),
            ["-f", "matroska", "-vcodec", "libx264", "-framerate", "30", "-ar", "48000"]
        );
    }

    #[test]
    fn test_missing_filename() {
        let err = OutputStream::new(OptionValues::new().with("duration", "10")).unwrap_err();
        assert_eq!(
            err,
            OptionError::MissingRequired {
                name: "filename".into()
            }
        );
        assert!(OutputStream::new(OptionValues::new().with("filename", "")).is_err());
    }

    #[test]
    fn test_filename_type() {
        let err = OutputStream::new(OptionValues::new().with("filename", 3)).unwrap_err();
        assert!(matches!(err, OptionError::TypeMismatch { .. }));
    }

    #[test]
    fn test_attach() {
        let values = OptionValues::new()
            .with("filename", "out.mp4")
            .with("channels", 2);
        let mut command = FfmpegCommand::new();
        OutputStream::new(values).unwrap().attach(&mut command);
        assert_eq!(command.args(), vec!["-ac", "2", "out.mp4"]);
    }

    #[test]
    fn test_parameters_start_with_filename() {
        let parameters = output_stream_parameters();
        assert_eq!(parameters.len(), 22);
        assert_eq!(parameters[0], ("filename", ValueType::String));
    }
}
