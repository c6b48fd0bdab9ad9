//! Terminal UI: two pages, Summarize and Study Mode, behind a tab header.

pub mod app;
mod common;
mod events;
mod footer;
mod header;
mod input;
mod layout;
pub mod mvi;
mod progress;
pub mod quiz;
mod render;
mod runtime;
pub mod study;
pub mod summarize;
mod summary_view;
mod terminal_guard;
pub mod theme;
pub mod upload;

pub use runtime::run;
