//! Checked-in protobuf messages for both schema versions.
//!
//! `v1` is what the SDK builds. `v1beta1` is only reached through
//! the explicit `From` mapping in `convert`.

mod convert;
pub mod v1;
pub mod v1beta1;

macro_rules! threshold_helpers {
    ($version:ident) => {
        impl $version::ThresholdConfig {
            /// Threshold holding a single distance value
            pub fn with_value(value: f64) -> Self {
                Self {
                    threshold: Some($version::threshold_config::Threshold::Value(value)),
                }
            }

            /// The configured value, if any
            pub fn threshold_value(&self) -> Option<f64> {
                match self.threshold {
                    Some($version::threshold_config::Threshold::Value(value)) => Some(value),
                    None => None,
                }
            }
        }
    };
}

threshold_helpers!(v1);
threshold_helpers!(v1beta1);
