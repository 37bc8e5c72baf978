pub mod recording_sink;
