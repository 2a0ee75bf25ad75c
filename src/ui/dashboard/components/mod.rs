//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod charts;
pub mod customers;
pub mod footer;
pub mod header;
pub mod logs;
pub mod overview;
pub mod products;
pub mod revenue;
pub mod segments;
pub mod sidebar;
pub mod time_panel;
