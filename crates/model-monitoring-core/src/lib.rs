//! # Model Monitoring Core
//!
//! Wire messages and codec helpers shared by the model monitoring SDK.
//! Two schema versions are carried side by side: `v1` (current) and
//! `v1beta1` (kept for batch prediction monitoring).

pub mod codec;
pub mod error;
pub mod proto;

pub use codec::{decode, encode, reinterpret};
pub use error::{CoreError, Result};
