pub mod delay;
pub mod logging;
