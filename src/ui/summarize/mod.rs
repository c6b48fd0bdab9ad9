//! Summarize page: upload a PDF and read its normalized summary.
//!
//! - `state.rs` - page phases
//! - `intent.rs` - key and request outcomes
//! - `reducer.rs` - transitions
//! - `page.rs` - rendering

mod intent;
mod page;
mod reducer;
mod state;

pub use intent::SummarizeIntent;
pub use page::{render_summarize_page, summary_area};
pub use reducer::{SummarizeReducer, SUMMARY_FAILED};
pub use state::{SummarizePageState, SummarizePhase};
