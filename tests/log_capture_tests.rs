//! Log records emitted while building commands.
//!
//! Kept in its own test binary because the logger is process-global.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use simple_capture::{OptionValues, OutputStream, RegistryError, StreamRegistry};

#[derive(Default)]
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CapturingLogger {
    fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

#[test]
fn test_discards_and_lookup_failures_are_logged() {
    let logger: &'static CapturingLogger = Box::leak(Box::default());
    log::set_logger(logger).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Duration and end position together: "-to" is dropped with a notice.
    let stream = OutputStream::new(
        OptionValues::new()
            .with("filename", "out.mp4")
            .with("duration", "10")
            .with("end_position", "20"),
    )
    .unwrap();
    assert_eq!(stream.arguments(), ["-t", "10"]);

    let records = logger.take();
    let discard = records
        .iter()
        .find(|(_, message)| message.starts_with("Discarding arguments"))
        .expect("no discard record");
    assert_eq!(discard.0, Level::Info);
    assert!(discard.1.contains("\"to\""));
    assert!(discard.1.contains("'t'"));

    // Unknown stream kind: an error record names the kind.
    let err = StreamRegistry::with_builtin()
        .create("webcam", OptionValues::new().with("filename", "cam.mp4"))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::StreamNotFound {
            name: "webcam".into()
        }
    );

    let records = logger.take();
    assert!(records
        .iter()
        .any(|(level, message)| *level == Level::Error && message.contains("webcam")));
    assert!(!records
        .iter()
        .any(|(_, message)| message.starts_with("Discarding arguments")));
}
