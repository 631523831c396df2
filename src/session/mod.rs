//! Orchestration of digit source, automaton and renderer into creations

/// Sessions, creations and the top-level entry points
pub mod creation;

pub use creation::{
    Creation, Frame, PatternSession, SessionConfig, create_pattern, create_pattern_with,
};
