//! The page runtime.
//!
//! Everything the published page does after load: draw the sidebar from the
//! manifest, apply the theme, route the URL fragment to a markdown document,
//! and react to sidebar interaction.
//!
//! | Module | Role |
//! |--------|------|
//! | [`route`] | Fragment → document path |
//! | [`content`] | Markdown → content-area markup (pure) |
//! | [`sidebar`] | Manifest → sidebar markup (pure) |
//! | [`ui`] | Resize/toggle/collapse state machine (pure) |
//! | [`fetch`] | Static-file fetching seam |
//! | [`session`] | Per-page state and event handlers, cache warming |

pub mod content;
pub mod fetch;
pub mod route;
pub mod session;
pub mod sidebar;
pub mod ui;

pub use fetch::{DirFetcher, Fetcher, Response};
pub use session::{Session, WarmReport, warm_cache};
