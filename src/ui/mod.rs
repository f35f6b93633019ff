//! Widgets for the lookup window

pub mod card;
pub mod search_bar;
pub mod theme;
