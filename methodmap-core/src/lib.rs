//! MethodMap Core — content tables, diagram layouts, step navigation.
//!
//! This crate contains everything below the render boundary:
//! - Content types (processes, steps, examples, comparison cards)
//! - The built-in content library with TOML load/validate support
//! - Diagram layouts (normalized percentage coordinates per process)
//! - The `StepNavigator` state machine and its derived views

pub mod content;
pub mod diagram;
pub mod error;
pub mod navigator;

pub use content::{
    CompareCard, ContentLibrary, IconName, Process, ProcessExample, ProcessId, Step,
};
pub use diagram::{DiagramLayout, DiagramPoint, DiagramSet, MAP_HEIGHT};
pub use error::ContentError;
pub use navigator::{StepDirection, StepMarker, StepNavigator};
