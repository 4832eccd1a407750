use bcfe_core::Block;
use serde::{Deserialize, Serialize};

use crate::encoding::Label;

/// Encrypted gate truth table.
///
/// Half-gate garbling emits two rows per AND gate; XOR and INV gates occupy
/// zero storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedGate([Block; 2]);

impl EncryptedGate {
    pub(crate) fn new(inner: [Block; 2]) -> Self {
        Self(inner)
    }
}

impl std::ops::Index<usize> for EncryptedGate {
    type Output = Block;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// The compact, persistable form of a garbled circuit.
///
/// Together with the (rebuildable) circuit shape this is everything an
/// evaluator needs: the output permutation bits, one table entry per AND
/// gate in gate order, the active label of the constant wires, and the key
/// of the tweakable gate hash.
///
/// Serializes as `[output_perms, blob]` where
/// `blob = table_blocks || fixed_label || global_key`; the blob length
/// determines the table length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawGarbledInfo", try_from = "RawGarbledInfo")]
pub struct GarbledInfo {
    /// Pointer bit of the low label of each output wire.
    pub output_perms: Vec<bool>,
    /// One entry per AND gate, in gate order.
    pub table: Vec<EncryptedGate>,
    /// Active label of the constant wires.
    pub fixed_label: Label,
    /// Key of the tweakable gate hash.
    pub global_key: Block,
}

/// An error produced when decoding a serialized [`GarbledInfo`].
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum GarbledInfoError {
    #[error("blob length {0} is not a multiple of the block size")]
    UnalignedBlob(usize),
    #[error("blob holds {0} blocks, expected at least 2 plus an even table")]
    MalformedBlob(usize),
}

#[derive(Serialize, Deserialize)]
struct RawGarbledInfo {
    output_perms: Vec<bool>,
    blob: Vec<u8>,
}

impl From<GarbledInfo> for RawGarbledInfo {
    fn from(info: GarbledInfo) -> Self {
        let mut blob = Vec::with_capacity((info.table.len() * 2 + 2) * Block::LEN);

        for gate in &info.table {
            blob.extend_from_slice(&gate[0].to_bytes());
            blob.extend_from_slice(&gate[1].to_bytes());
        }
        blob.extend_from_slice(&info.fixed_label.to_bytes());
        blob.extend_from_slice(&info.global_key.to_bytes());

        Self {
            output_perms: info.output_perms,
            blob,
        }
    }
}

impl TryFrom<RawGarbledInfo> for GarbledInfo {
    type Error = GarbledInfoError;

    fn try_from(raw: RawGarbledInfo) -> Result<Self, Self::Error> {
        if raw.blob.len() % Block::LEN != 0 {
            return Err(GarbledInfoError::UnalignedBlob(raw.blob.len()));
        }

        let blocks = raw.blob.len() / Block::LEN;
        if blocks < 2 || (blocks - 2) % 2 != 0 {
            return Err(GarbledInfoError::MalformedBlob(blocks));
        }

        let mut blocks_iter = raw
            .blob
            .chunks_exact(Block::LEN)
            .map(|chunk| Block::try_from(chunk).expect("chunk is block sized"));

        let table = (0..(blocks - 2) / 2)
            .map(|_| {
                let low = blocks_iter.next().expect("length checked");
                let high = blocks_iter.next().expect("length checked");
                EncryptedGate::new([low, high])
            })
            .collect();

        let fixed_label = blocks_iter.next().expect("length checked");
        let global_key = blocks_iter.next().expect("length checked");

        Ok(Self {
            output_perms: raw.output_perms,
            table,
            fixed_label: Label::new(fixed_label),
            global_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_layout() {
        let info = GarbledInfo {
            output_perms: vec![true, false],
            table: vec![EncryptedGate::new([Block::new([1; 16]), Block::new([2; 16])])],
            fixed_label: Label::new(Block::new([3; 16])),
            global_key: Block::new([4; 16]),
        };

        let raw = RawGarbledInfo::from(info.clone());
        assert_eq!(raw.blob.len(), 4 * Block::LEN);
        assert_eq!(&raw.blob[..16], &[1; 16]);
        assert_eq!(&raw.blob[48..], &[4; 16]);

        let back = GarbledInfo::try_from(raw).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_malformed_blob_rejected() {
        let raw = RawGarbledInfo {
            output_perms: vec![],
            blob: vec![0; Block::LEN],
        };
        assert!(matches!(
            GarbledInfo::try_from(raw),
            Err(GarbledInfoError::MalformedBlob(1))
        ));

        let raw = RawGarbledInfo {
            output_perms: vec![],
            blob: vec![0; Block::LEN * 2 + 1],
        };
        assert!(matches!(
            GarbledInfo::try_from(raw),
            Err(GarbledInfoError::UnalignedBlob(_))
        ));
    }
}
