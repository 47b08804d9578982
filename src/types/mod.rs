//! Request and response types for the multi-leg order API.
//!
//! ## Organization
//!
//! - [`enums`]: Order type, duration type, leg side and open/close enums
//! - [`order`]: The free-form order body and its legs
//! - [`multileg`]: Strategy defaults and place/modify/cancel responses
//! - [`option_space`]: Option series (contract option space) types
//! - [`precheck`]: Precheck response and its three-way classification
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod multileg;
pub mod option_space;
pub mod order;
pub mod precheck;

pub use enums::*;
