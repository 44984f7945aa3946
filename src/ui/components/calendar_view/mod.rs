//! # Calendar View
//!
//! Weekly availability grid: Monday-start columns, 08:00-20:00 rows in
//! 60-minute slots. Reserved slots render as gray blocks; every other slot
//! is clickable and opens the booking confirmation dialog.

pub mod interactions;
pub mod rendering;
pub mod types;
