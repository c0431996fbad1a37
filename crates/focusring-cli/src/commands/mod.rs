pub mod completions;
pub mod config;
pub mod mute;
pub mod run;
pub mod stats;
pub mod status;
