//! Static content for MethodMap

pub mod icon;
pub mod library;
pub mod process;

pub use icon::IconName;
pub use library::ContentLibrary;
pub use process::{compare_cards, CompareCard, Process, ProcessExample, ProcessId, Step};
