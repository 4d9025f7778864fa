//! Append-only CSV match log.

pub mod recorder;
pub mod settings;

pub use recorder::CsvRecorder;
pub use settings::RecorderConfig;
