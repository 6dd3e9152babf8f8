pub mod domain;
pub mod error;
pub mod rules;
pub mod time;

pub use domain::*;
pub use error::CoreError;
pub use rules::*;
pub use time::{Clock, ClockZone, FixedClock, SystemClock};
