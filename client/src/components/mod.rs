//! Reusable UI components.

pub mod star_card;
pub mod starfield_host;
