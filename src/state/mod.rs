//! State Management
//!
//! Global reactive state and the host-page contract used by the actions.

pub mod global;
pub mod page;

pub use global::{provide_global_state, use_actions, AppActions, GlobalState};
pub use page::{BrowserPage, Control, Page};
