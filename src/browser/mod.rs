//! Browser session ownership and the CDP-backed page driver.

pub mod driver;
pub mod launch;

pub use driver::PageDriver;
pub use launch::launch_browser;
