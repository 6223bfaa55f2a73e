//! The PayForBlobs message and its binary encoding.
//!
//! ## Layout
//!
//! All integers are little-endian `u32`. Byte strings carry a `u32` length
//! prefix. Each list carries a `u32` element count.
//!
//! ```text
//! signer            len ‖ utf8
//! namespaces        count ‖ { len ‖ bytes }*
//! blob_sizes        count ‖ { u32 }*
//! share_commitments count ‖ { len ‖ bytes }*
//! share_versions    count ‖ { u32 }*
//! ```
//!
//! Decoding is the exact inverse and rejects trailing bytes.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::reader::ByteReader;

/// Type URL under which the message travels in an [`AnyMessage`].
pub const PAY_FOR_BLOBS_TYPE_URL: &str = "/celestia.blob.v1.MsgPayForBlobs";

/// Legacy amino name of the message.
pub const PAY_FOR_BLOBS_AMINO_TYPE: &str = "celestia/MsgPayForBlobs";

/// Message paying for the inclusion of one or more blobs.
///
/// The four vectors are parallel: entry `i` of each describes blob `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MsgPayForBlobs {
    pub signer: String,
    pub namespaces: Vec<Vec<u8>>,
    pub blob_sizes: Vec<u32>,
    pub share_commitments: Vec<Vec<u8>>,
    pub share_versions: Vec<u32>,
}

impl MsgPayForBlobs {
    /// Check that the per-blob vectors line up and describe at least one blob.
    pub fn validate(&self) -> Result<()> {
        let n = self.namespaces.len();
        if n == 0 {
            return Err(CodecError::MalformedMessage("message describes no blobs".into()));
        }
        let lengths = [
            ("blob_sizes", self.blob_sizes.len()),
            ("share_commitments", self.share_commitments.len()),
            ("share_versions", self.share_versions.len()),
        ];
        for (field, len) in lengths {
            if len != n {
                return Err(CodecError::MalformedMessage(format!(
                    "{field} has {len} entries, expected {n}"
                )));
            }
        }
        Ok(())
    }

    /// Number of blobs described, taken from the namespace list.
    pub fn blob_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Encode to the binary layout.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut enc = Encoder::new();
        enc.write_bytes("signer", self.signer.as_bytes())?;

        enc.write_count("namespaces", self.namespaces.len())?;
        for ns in &self.namespaces {
            enc.write_bytes("namespace", ns)?;
        }

        enc.write_count("blob_sizes", self.blob_sizes.len())?;
        for size in &self.blob_sizes {
            enc.write_u32(*size);
        }

        enc.write_count("share_commitments", self.share_commitments.len())?;
        for commitment in &self.share_commitments {
            enc.write_bytes("share_commitment", commitment)?;
        }

        enc.write_count("share_versions", self.share_versions.len())?;
        for version in &self.share_versions {
            enc.write_u32(*version);
        }

        Ok(enc.finish())
    }

    /// Decode from the binary layout.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(bytes);

        let signer = std::str::from_utf8(r.read_len_prefixed("signer")?)
            .map_err(|e| CodecError::MalformedMessage(format!("signer is not utf-8: {e}")))?
            .to_owned();

        let namespaces = read_byte_list(&mut r, "namespaces")?;
        let blob_sizes = read_u32_list(&mut r, "blob_sizes")?;
        let share_commitments = read_byte_list(&mut r, "share_commitments")?;
        let share_versions = read_u32_list(&mut r, "share_versions")?;

        r.finish("MsgPayForBlobs")?;

        Ok(Self {
            signer,
            namespaces,
            blob_sizes,
            share_commitments,
            share_versions,
        })
    }
}

fn read_byte_list(r: &mut ByteReader<'_>, field: &'static str) -> Result<Vec<Vec<u8>>> {
    let count = r.read_count(field, 4)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(r.read_len_prefixed(field)?.to_vec());
    }
    Ok(items)
}

fn read_u32_list(r: &mut ByteReader<'_>, field: &'static str) -> Result<Vec<u32>> {
    let count = r.read_count(field, 4)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(r.read_u32_le(field)?);
    }
    Ok(items)
}

/// Append-only writer for the binary layout.
struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn write_count(&mut self, field: &'static str, len: usize) -> Result<()> {
        let len32 = u32::try_from(len).map_err(|_| CodecError::TooLarge { field, len })?;
        self.write_u32(len32);
        Ok(())
    }

    fn write_bytes(&mut self, field: &'static str, bytes: &[u8]) -> Result<()> {
        self.write_count(field, bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Type-erased message envelope: a type URL plus the encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyMessage {
    pub type_url: String,
    pub value: Vec<u8>,
}

/// The closed set of messages this codec understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    PayForBlobs(MsgPayForBlobs),
}

impl Message {
    /// Type URL used when wrapping in an [`AnyMessage`].
    pub fn type_url(&self) -> &'static str {
        match self {
            Message::PayForBlobs(_) => PAY_FOR_BLOBS_TYPE_URL,
        }
    }

    /// Legacy amino name.
    pub fn amino_type(&self) -> &'static str {
        match self {
            Message::PayForBlobs(_) => PAY_FOR_BLOBS_AMINO_TYPE,
        }
    }

    /// Encode the message body.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Message::PayForBlobs(msg) => msg.encode(),
        }
    }

    /// Wrap in a type-erased envelope.
    pub fn to_any(&self) -> Result<AnyMessage> {
        Ok(AnyMessage {
            type_url: self.type_url().to_owned(),
            value: self.encode()?,
        })
    }

    /// Unwrap an envelope, dispatching on its type URL.
    pub fn from_any(any: &AnyMessage) -> Result<Self> {
        match any.type_url.as_str() {
            PAY_FOR_BLOBS_TYPE_URL => Ok(Message::PayForBlobs(MsgPayForBlobs::decode(&any.value)?)),
            other => Err(CodecError::UnknownTypeUrl(other.to_owned())),
        }
    }
}

impl From<MsgPayForBlobs> for Message {
    fn from(msg: MsgPayForBlobs) -> Self {
        Message::PayForBlobs(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> MsgPayForBlobs {
        MsgPayForBlobs {
            signer: "celestia1qqqsyqcyq5rqwzqf".into(),
            namespaces: vec![vec![0u8; 28], vec![1u8; 28]],
            blob_sizes: vec![53, 2000],
            share_commitments: vec![vec![0xaa; 32], vec![0xbb; 32]],
            share_versions: vec![0, 0],
        }
    }

    #[test]
    fn test_encode_layout() {
        let msg = MsgPayForBlobs {
            signer: "ab".into(),
            namespaces: vec![vec![7]],
            blob_sizes: vec![5],
            share_commitments: vec![vec![9, 9]],
            share_versions: vec![1],
        };
        let bytes = msg.encode().unwrap();
        let expected: Vec<u8> = [
            &[2, 0, 0, 0, b'a', b'b'][..],
            &[1, 0, 0, 0, 1, 0, 0, 0, 7][..],
            &[1, 0, 0, 0, 5, 0, 0, 0][..],
            &[1, 0, 0, 0, 2, 0, 0, 0, 9, 9][..],
            &[1, 0, 0, 0, 1, 0, 0, 0][..],
        ]
        .concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_roundtrip() {
        let msg = sample();
        let decoded = MsgPayForBlobs::decode(&msg.encode().unwrap()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_every_truncation_rejected() {
        let bytes = sample().encode().unwrap();
        for cut in 0..bytes.len() {
            assert!(
                matches!(
                    MsgPayForBlobs::decode(&bytes[..cut]),
                    Err(CodecError::MalformedMessage(_))
                ),
                "prefix of {cut} bytes decoded"
            );
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = sample().encode().unwrap();
        bytes.push(0);
        assert!(MsgPayForBlobs::decode(&bytes).is_err());
    }

    #[test]
    fn test_invalid_utf8_signer() {
        let mut bytes = sample().encode().unwrap();
        bytes[4] = 0xff;
        assert!(matches!(
            MsgPayForBlobs::decode(&bytes),
            Err(CodecError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_huge_count_rejected_without_allocating() {
        let mut bytes = vec![0, 0, 0, 0];
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(MsgPayForBlobs::decode(&bytes).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        assert!(MsgPayForBlobs::default().validate().is_err());

        let mut msg = sample();
        msg.share_versions.pop();
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_any_roundtrip() {
        let msg = Message::from(sample());
        let any = msg.to_any().unwrap();
        assert_eq!(any.type_url, "/celestia.blob.v1.MsgPayForBlobs");
        assert_eq!(msg.amino_type(), "celestia/MsgPayForBlobs");
        assert_eq!(Message::from_any(&any).unwrap(), msg);
    }

    #[test]
    fn test_unknown_type_url() {
        let any = AnyMessage {
            type_url: "/cosmos.bank.v1beta1.MsgSend".into(),
            value: Vec::new(),
        };
        assert_eq!(
            Message::from_any(&any),
            Err(CodecError::UnknownTypeUrl("/cosmos.bank.v1beta1.MsgSend".into()))
        );
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let msg = sample();
        let json = serde_json::to_string(&msg).unwrap();
        let back: MsgPayForBlobs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    fn arb_msg() -> impl Strategy<Value = MsgPayForBlobs> {
        (1usize..=5).prop_flat_map(|n| {
            (
                "[a-z0-9]{0,48}",
                prop::collection::vec(prop::collection::vec(any::<u8>(), 29), n),
                prop::collection::vec(any::<u32>(), n),
                prop::collection::vec(prop::collection::vec(any::<u8>(), 32), n),
                prop::collection::vec(0u32..2, n),
            )
                .prop_map(
                    |(signer, namespaces, blob_sizes, share_commitments, share_versions)| {
                        MsgPayForBlobs {
                            signer,
                            namespaces,
                            blob_sizes,
                            share_commitments,
                            share_versions,
                        }
                    },
                )
        })
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(msg in arb_msg()) {
            let bytes = msg.encode().unwrap();
            prop_assert_eq!(MsgPayForBlobs::decode(&bytes).unwrap(), msg);
        }

        #[test]
        fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = MsgPayForBlobs::decode(&bytes);
        }
    }
}
