//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod campaigns;
pub mod donations;
pub mod footer;
pub mod header;
pub mod info_panel;
pub mod logs;
pub mod modal;
pub mod stats;
