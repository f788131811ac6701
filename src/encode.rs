/// Numbered-PNG directory sink.
pub mod png;
/// The frame-sink contract and the in-memory sink.
pub mod sink;
