//! Pure decisions for HTTP fetching.
//!
//! Nothing in here performs I/O; the effects layer calls into these functions
//! once a response has arrived.

mod status;

pub use status::check_status;
