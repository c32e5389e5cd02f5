//! wtool CLI library.
//!
//! Command implementations for the `wtool` binary: inspecting, expanding and
//! packing `vawt` wavetable containers.

pub mod commands;
