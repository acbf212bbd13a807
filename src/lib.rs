#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod cli;
pub mod clock;
pub mod error;
pub mod logging;
pub mod style;

pub use app::{ClockApp, WidgetConfig, WidgetState};
pub use error::{ClockError, Result};
