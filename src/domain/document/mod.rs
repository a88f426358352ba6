//! Document domain module
//!
//! Encoding, font metrics and page geometry for the printable export.

pub mod latin1;
mod layout;
mod metrics;

pub use latin1::{Latin1Text, PLACEHOLDER};
pub use layout::{PageContent, PageLayout, TextRun};
pub use metrics::Font;
