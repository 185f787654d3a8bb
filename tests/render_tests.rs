//! Integration tests for option rendering.

use simple_capture::options::{
    DualNameFlag, MutualExclusionGroup, OptionSpec, OptionTable, OptionValue, OptionValues,
    TableSchema, ValueType,
};
use simple_capture::streams::global::GLOBAL_SCHEMA;
use simple_capture::streams::output::OUTPUT_SCHEMA;
use simple_capture::{FfmpegCommand, GlobalOptions, OutputStream};

static OPTIONS: [OptionSpec; 4] = [
    OptionSpec::new("stats", "stats", ValueType::Bool),
    OptionSpec::new("quiet", "quiet", ValueType::Bool),
    OptionSpec::new("threads", "threads", ValueType::Int),
    OptionSpec::new("rate", "r", ValueType::Float),
];

static SCHEMA: TableSchema = TableSchema {
    name: "bare",
    options: &OPTIONS,
    dual_names: &[DualNameFlag::new("stats", "nostats")],
    exclusions: &[],
};

fn render(values: OptionValues) -> Vec<String> {
    OptionTable::new(&SCHEMA, &values).unwrap().arguments().to_vec()
}

// ==================== Rendering Rules ====================

#[test]
fn test_all_absent_renders_empty() {
    assert!(render(OptionValues::new()).is_empty());

    // Every option of the real tables explicitly unset.
    let global: OptionValues = GLOBAL_SCHEMA
        .options
        .iter()
        .fold(OptionValues::new(), |values, spec| values.with_unset(spec.name));
    assert!(OptionTable::new(&GLOBAL_SCHEMA, &global)
        .unwrap()
        .arguments()
        .is_empty());

    assert!(OptionTable::with_defaults(&OUTPUT_SCHEMA)
        .arguments()
        .is_empty());
}

#[test]
fn test_boolean_rendering() {
    assert_eq!(render(OptionValues::new().with("quiet", true)), ["-quiet"]);
    assert!(render(OptionValues::new().with("quiet", false)).is_empty());
    assert_eq!(render(OptionValues::new().with("stats", true)), ["-stats"]);
    assert_eq!(render(OptionValues::new().with("stats", false)), ["-nostats"]);
}

#[test]
fn test_value_rendering() {
    assert_eq!(render(OptionValues::new().with("threads", 8)), ["-threads", "8"]);
    assert_eq!(render(OptionValues::new().with("rate", 29.97)), ["-r", "29.97"]);
}

#[test]
fn test_declared_order_is_kept() {
    let values = OptionValues::new()
        .with("rate", 25.0)
        .with("threads", 2)
        .with("quiet", true)
        .with("stats", false);
    assert_eq!(
        render(values),
        ["-nostats", "-quiet", "-threads", "2", "-r", "25"]
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let table = OptionTable::new(
        &OUTPUT_SCHEMA,
        &OptionValues::new()
            .with("video_codec", "libx264")
            .with("duration", "5"),
    )
    .unwrap();
    let first = table.arguments().to_vec();
    assert_eq!(first, table.arguments());
    assert_eq!(first, table.clone().arguments());
}

#[test]
fn test_builtin_schemas_are_unique() {
    assert_eq!(GLOBAL_SCHEMA.validate(), Ok(()));
    assert_eq!(OUTPUT_SCHEMA.validate(), Ok(()));
    assert_eq!(SCHEMA.validate(), Ok(()));
}

// ==================== Mutual Exclusion ====================

static RANKED: [OptionSpec; 3] = [
    OptionSpec::new("low", "low", ValueType::String),
    OptionSpec::new("mid", "mid", ValueType::String),
    OptionSpec::new("high", "high", ValueType::String),
];

static RANKED_SCHEMA: TableSchema = TableSchema {
    name: "ranked",
    options: &RANKED,
    dual_names: &[],
    exclusions: &[MutualExclusionGroup(&["high", "mid", "low"])],
};

#[test]
fn test_priority_follows_group_not_table_order() {
    let values = OptionValues::new().with("low", "1").with("mid", "2");
    let table = OptionTable::new(&RANKED_SCHEMA, &values).unwrap();
    assert_eq!(table.arguments(), ["-mid", "2"]);

    let values = values.with("high", "3");
    let table = OptionTable::new(&RANKED_SCHEMA, &values).unwrap();
    assert_eq!(table.arguments(), ["-high", "3"]);
}

#[test]
fn test_output_duration_wins() {
    let stream = OutputStream::new(
        OptionValues::new()
            .with("filename", "out.mp4")
            .with("duration", "10")
            .with("end_position", "20"),
    )
    .unwrap();
    assert_eq!(stream.arguments(), ["-t", "10"]);
    assert_eq!(
        stream.table().get("end_position"),
        Some(&OptionValue::from("20"))
    );
}

// ==================== Full Commands ====================

#[test]
fn test_global_and_output_command() {
    let mut command = FfmpegCommand::new();
    GlobalOptions::new(
        OptionValues::new()
            .with("display_stats", false)
            .with("overwrite_output", true)
            .with("sudo", true),
    )
    .unwrap()
    .attach(&mut command);
    command.input(":0.0", ["-f", "x11grab", "-video_size", "1920x1080"]);
    OutputStream::new(
        OptionValues::new()
            .with("filename", "capture.mkv")
            .with("video_codec", "libx264")
            .with("framerate", 30)
            .with("end_position", "00:01:00"),
    )
    .unwrap()
    .attach(&mut command);

    assert_eq!(
        command.to_vec(),
        [
            "sudo",
            "ffmpeg",
            "-nostats",
            "-y",
            "-f",
            "x11grab",
            "-video_size",
            "1920x1080",
            "-i",
            ":0.0",
            "-vcodec",
            "libx264",
            "-to",
            "00:01:00",
            "-framerate",
            "30",
            "capture.mkv"
        ]
    );
}
