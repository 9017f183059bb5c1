//! Helper functions for building HTML fragments
//!
//! Plain string builders; every rendering path goes through these so the
//! markup of images, links and placeholders stays identical everywhere.

mod html;

pub use html::*;
