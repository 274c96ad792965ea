pub mod charts;
pub mod popup;
pub mod progress;
pub mod tables;
