//! Protobuf encoding of blobs and `Any` envelopes.
//!
//! Both messages go through `prost`, so the bytes follow proto3 rules: zero
//! scalars are left out and unknown fields are skipped on decode.

use prost::Message as _;
use serde::{Deserialize, Serialize};

use blobcommit_core::{Blob, Namespace, NAMESPACE_ID_SIZE};

use crate::error::{CodecError, Result};
use crate::message::AnyMessage;

/// Blob as carried in a blob transaction.
///
/// `namespace_id` is the 28-byte ID; the version lives in its own field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct BlobProto {
    #[prost(bytes = "vec", tag = "1")]
    pub namespace_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub share_version: u32,
    #[prost(uint32, tag = "4")]
    pub namespace_version: u32,
}

impl BlobProto {
    /// Protobuf bytes, fields in number order.
    pub fn encode_proto(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Inverse of [`BlobProto::encode_proto`].
    pub fn decode_proto(bytes: &[u8]) -> Result<Self> {
        Ok(Self::decode(bytes)?)
    }

    /// Rebuild the blob this message describes.
    pub fn to_blob(&self) -> Result<Blob> {
        let version = u8::try_from(self.namespace_version).map_err(|_| {
            CodecError::MalformedMessage(format!(
                "namespace version {} does not fit a byte",
                self.namespace_version
            ))
        })?;
        let id: [u8; NAMESPACE_ID_SIZE] = self.namespace_id.as_slice().try_into().map_err(|_| {
            CodecError::MalformedMessage(format!(
                "namespace id is {} bytes, expected {NAMESPACE_ID_SIZE}",
                self.namespace_id.len()
            ))
        })?;
        Ok(Blob::new(Namespace::new(version, id), self.data.clone())
            .with_share_version(self.share_version))
    }
}

impl From<&Blob> for BlobProto {
    fn from(blob: &Blob) -> Self {
        Self {
            namespace_id: blob.namespace.id().to_vec(),
            data: blob.data.to_vec(),
            share_version: blob.share_version,
            namespace_version: u32::from(blob.namespace.version()),
        }
    }
}

impl From<AnyMessage> for prost_types::Any {
    fn from(any: AnyMessage) -> Self {
        Self {
            type_url: any.type_url,
            value: any.value,
        }
    }
}

impl From<prost_types::Any> for AnyMessage {
    fn from(any: prost_types::Any) -> Self {
        Self {
            type_url: any.type_url,
            value: any.value,
        }
    }
}

impl AnyMessage {
    /// `google.protobuf.Any` form: field 1 is the type URL, field 2 the body.
    pub fn encode_proto(&self) -> Vec<u8> {
        prost_types::Any::from(self.clone()).encode_to_vec()
    }

    /// Inverse of [`AnyMessage::encode_proto`].
    pub fn decode_proto(bytes: &[u8]) -> Result<Self> {
        Ok(prost_types::Any::decode(bytes)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blob_proto_layout() {
        let proto = BlobProto {
            namespace_id: vec![0xab; 2],
            data: b"hi".to_vec(),
            share_version: 1,
            namespace_version: 0,
        };
        assert_eq!(hex::encode(proto.encode_proto()), "0a02abab120268691801");
        assert!(BlobProto::default().encode_proto().is_empty());
    }

    #[test]
    fn test_decode_accepts_explicit_zero_scalars() {
        let bytes = hex::decode("0a02abab1202686918002000").unwrap();
        let decoded = BlobProto::decode_proto(&bytes).unwrap();
        assert_eq!(decoded.namespace_id, vec![0xab; 2]);
        assert_eq!(decoded.data, b"hi");
        assert_eq!(decoded.share_version, 0);
        assert_eq!(decoded.namespace_version, 0);
    }

    #[test]
    fn test_blob_proto_roundtrip_through_blob() {
        let ns = Namespace::from_hex("deadbeef").unwrap();
        let blob = Blob::new(ns, b"hello".to_vec()).with_share_version(1);
        let proto = BlobProto::from(&blob);
        assert_eq!(proto.namespace_id.len(), NAMESPACE_ID_SIZE);

        let decoded = BlobProto::decode_proto(&proto.encode_proto()).unwrap();
        assert_eq!(decoded, proto);
        assert_eq!(decoded.to_blob().unwrap(), blob);
    }

    #[test]
    fn test_decode_skips_unknown_fields() {
        let mut bytes = BlobProto {
            data: vec![1, 2, 3],
            ..Default::default()
        }
        .encode_proto();
        // field 9, varint
        bytes.extend_from_slice(&[0x48, 0x05]);
        // field 10, length-delimited
        bytes.extend_from_slice(&[0x52, 0x01, 0xff]);
        let decoded = BlobProto::decode_proto(&bytes).unwrap();
        assert_eq!(decoded.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = BlobProto {
            namespace_id: vec![0; 28],
            data: vec![7; 40],
            ..Default::default()
        }
        .encode_proto();
        assert!(matches!(
            BlobProto::decode_proto(&bytes[..bytes.len() - 3]),
            Err(CodecError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_wire_type() {
        // field 3 sent as length-delimited
        let bytes = [0x1a, 0x01, 0x00];
        assert!(matches!(
            BlobProto::decode_proto(&bytes),
            Err(CodecError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_to_blob_rejects_bad_namespace() {
        let proto = BlobProto {
            namespace_id: vec![0; 5],
            ..Default::default()
        };
        assert!(proto.to_blob().is_err());

        let proto = BlobProto {
            namespace_id: vec![0; 28],
            namespace_version: 256,
            ..Default::default()
        };
        assert!(proto.to_blob().is_err());
    }

    #[test]
    fn test_any_proto_layout() {
        let any = AnyMessage {
            type_url: "/a".into(),
            value: vec![1],
        };
        assert_eq!(hex::encode(any.encode_proto()), "0a022f61120101");
    }

    #[test]
    fn test_any_proto_roundtrip() {
        let any = AnyMessage {
            type_url: "/celestia.blob.v1.MsgPayForBlobs".into(),
            value: vec![1, 2, 3],
        };
        let bytes = any.encode_proto();
        assert_eq!(bytes[0], 0x0a);
        assert_eq!(AnyMessage::decode_proto(&bytes).unwrap(), any);
    }

    #[test]
    fn test_any_rejects_non_utf8_type_url() {
        let bytes = [0x0a, 0x02, 0xff, 0xfe];
        assert!(AnyMessage::decode_proto(&bytes).is_err());
    }

    proptest! {
        #[test]
        fn prop_blob_proto_roundtrip(
            namespace_id in prop::collection::vec(any::<u8>(), 0..40),
            data in prop::collection::vec(any::<u8>(), 0..256),
            share_version in any::<u32>(),
            namespace_version in any::<u32>(),
        ) {
            let proto = BlobProto { namespace_id, data, share_version, namespace_version };
            prop_assert_eq!(BlobProto::decode_proto(&proto.encode_proto()).unwrap(), proto);
        }

        #[test]
        fn prop_blob_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            let _ = BlobProto::decode_proto(&bytes);
            let _ = AnyMessage::decode_proto(&bytes);
        }
    }
}
