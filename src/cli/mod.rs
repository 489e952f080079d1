//! # CLI Module
//!
//! User-facing command implementations. The commands coordinate the
//! authorization flow, the Spotify top-tracks query and the tab resolution
//! pipeline, and own all terminal presentation: status macros, the
//! per-track progress spinner and the final result table.
//!
//! ## Commands
//!
//! - [`find`] - the full pipeline: authorize, fetch the top tracks, search
//!   Ultimate Guitar for each one and print the resolved tab URLs
//!
//! ## Presentation
//!
//! Long-running phases show an `indicatif` spinner with the current track;
//! resolved tabs are rendered as a `tabled` table preceded by a count line,
//! and every track without a tab is reported with the stage that failed.
//! Network failures never abort a run; a track that cannot be resolved is
//! simply reported as such.

mod find;

pub use find::find;
