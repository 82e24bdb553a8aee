pub mod charts;
pub mod detail;
pub mod list;
pub mod panels;
