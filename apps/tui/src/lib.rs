// Export our modules for use in binaries and tests
pub mod anim;
pub mod chart;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod format;
pub mod nav;
pub mod report;
pub mod theme;
pub mod viewmodel;

pub use domain::{ScoreTier, Section, SeoTier};
pub use report::Report;
