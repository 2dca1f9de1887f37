// src/gui/components/mod.rs
pub mod action_bar;
pub mod charts;
pub mod filter_panel;
pub mod record_table;
pub mod tabs;
