//! Network and asset plumbing.
//!
//! - `image`:   background image fetch/decode for the UI
//! - `backend`: REST accessors for a projects/experience backend (unused by
//!   the viewer itself)

pub mod backend;
pub mod image;
