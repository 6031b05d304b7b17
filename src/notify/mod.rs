//! WeCom webhook notification delivery.

pub mod clock;
pub mod wecom;

pub use clock::{Clock, SystemClock};
pub use wecom::AlertProvider;
