//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    Classify { raw_input: String },
}
