//! Recitation playback sequencing.
//!
//! - [`sequencer`]: Stopped/Playing state machine over a chapter's verses

pub mod sequencer;

pub use sequencer::{PlaybackCommand, PlaybackState, Sequencer};
