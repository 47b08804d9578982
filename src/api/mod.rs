//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`SaxoClient`](crate::client::SaxoClient) via `impl` blocks. All methods
//! handle JSON serialization, HTTP transport, and error mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use saxo_multileg::SaxoClient;
//!
//! # #[tokio::main]
//! # async fn main() -> saxo_multileg::Result<()> {
//! let client = SaxoClient::new("token", "account-key")?;
//! let strategy = client.get_strategy_defaults("19", "Straddle").await?;
//! println!("{} legs", strategy.legs.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`multileg`] | 5 | Strategy defaults, precheck, place, modify, cancel |
//! | [`instruments`] | 1 | Option series (contract option space) |

pub mod instruments;
pub mod multileg;
