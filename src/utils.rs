//! Application support utilities module.
//!
//! Timing (sleep/debounce/throttle), JSON key-value storage, the token
//! store and general helper functions.

pub use wayline_utils::*;
