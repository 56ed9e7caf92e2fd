//! Protobuf encode/decode helpers
//!
//! Thin wrappers over [`prost::Message`] that map decode failures into
//! [`CoreError`](crate::CoreError).

use crate::Result;
use prost::Message;

/// Encode a message into a freshly allocated buffer
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decode a message from bytes
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}

/// Serialize `message` and parse the bytes back as another message type.
///
/// Only sound when both types agree on every tag that is populated; fields
/// unknown to `B` are dropped silently.
pub fn reinterpret<A, B>(message: &A) -> Result<B>
where
    A: Message,
    B: Message + Default,
{
    decode(&encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{v1, v1beta1};

    #[test]
    fn test_decode_rejects_garbage() {
        // Tag 1, wire type 2 (length-delimited) with a length running past the buffer
        let bytes = [0x0a, 0x05, 0x01];
        let result = decode::<v1::ModelMonitoringObjectiveConfig>(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_reinterpret_threshold() {
        let threshold = v1::ThresholdConfig::with_value(0.25);
        let legacy: v1beta1::ThresholdConfig = reinterpret(&threshold).unwrap();
        assert_eq!(legacy, v1beta1::ThresholdConfig::with_value(0.25));
    }

    #[test]
    fn test_empty_message_encodes_to_nothing() {
        let config = v1::ModelMonitoringObjectiveConfig::default();
        assert!(encode(&config).is_empty());
    }
}
