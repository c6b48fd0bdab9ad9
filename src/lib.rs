//! Terminal study companion: upload a PDF to the study service, read its
//! summary, and practise with a generated quiz.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod markdown;
pub mod quiz;
pub mod ui;
pub mod upload;
