use bcfe_circuits::{Circuit, Gate};
use bcfe_core::{aes::TweakableAes, Block};

use crate::{
    circuit::{EncryptedGate, GarbledInfo},
    encoding::Label,
};

/// Errors that can occur during garbled circuit evaluation.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum EvaluatorError {
    #[error("invalid number of input labels: expected {0}, got {1}")]
    InvalidInputCount(usize, usize),
    #[error("garbled table holds {0} entries, circuit has {1} AND gates")]
    TableSizeMismatch(usize, usize),
    #[error("output permutation covers {0} wires, circuit has {1} outputs")]
    OutputPermsMismatch(usize, usize),
}

/// Evaluates a half-gate garbled AND gate.
#[inline]
pub(crate) fn and_gate(
    cipher: &TweakableAes,
    x: &Label,
    y: &Label,
    encrypted_gate: &EncryptedGate,
    gid: usize,
) -> Label {
    let x = x.to_inner();
    let y = y.to_inner();

    let s_a = x.lsb();
    let s_b = y.lsb();

    let j = Block::new((gid as u128).to_be_bytes());
    let k = Block::new(((gid + 1) as u128).to_be_bytes());

    let mut h = [x, y];
    cipher.tccr_many(&[j, k], &mut h);

    let [hx, hy] = h;

    let w_g = hx ^ (encrypted_gate[0] & Block::SELECT_MASK[s_a]);
    let w_e = hy ^ (Block::SELECT_MASK[s_b] & (encrypted_gate[1] ^ x));

    Label::new(w_g ^ w_e)
}

/// Evaluates a garbled circuit on one active label per input wire.
///
/// The circuit shape is rebuilt by the caller; `info` supplies the table,
/// constant-wire label, hash key and output permutation. Returns the
/// decoded output bits.
pub fn evaluate(
    circ: &Circuit,
    info: &GarbledInfo,
    inputs: &[Label],
) -> Result<Vec<bool>, EvaluatorError> {
    if inputs.len() != circ.inputs().len() {
        return Err(EvaluatorError::InvalidInputCount(
            circ.inputs().len(),
            inputs.len(),
        ));
    }
    if info.table.len() != circ.and_count() {
        return Err(EvaluatorError::TableSizeMismatch(
            info.table.len(),
            circ.and_count(),
        ));
    }
    if info.output_perms.len() != circ.outputs().len() {
        return Err(EvaluatorError::OutputPermsMismatch(
            info.output_perms.len(),
            circ.outputs().len(),
        ));
    }

    let cipher = TweakableAes::new(info.global_key);

    let mut active_labels: Vec<Option<Label>> = vec![None; circ.feed_count()];
    active_labels[0] = Some(info.fixed_label);
    active_labels[1] = Some(info.fixed_label);

    for (label, node) in inputs.iter().zip(circ.inputs()) {
        active_labels[node.id()] = Some(*label);
    }

    let mut table = info.table.iter();
    let mut gid = 1;

    for gate in circ.gates() {
        match gate {
            Gate::Inv { x, z } => {
                let x = active_labels[x.id()].expect("feed should be initialized");
                active_labels[z.id()] = Some(x);
            }
            Gate::Xor { x, y, z } => {
                let x = active_labels[x.id()].expect("feed should be initialized");
                let y = active_labels[y.id()].expect("feed should be initialized");
                active_labels[z.id()] = Some(x ^ y);
            }
            Gate::And { x, y, z } => {
                let encrypted_gate = table.next().expect("table length was checked");
                let x = active_labels[x.id()].expect("feed should be initialized");
                let y = active_labels[y.id()].expect("feed should be initialized");
                let z_label = and_gate(&cipher, &x, &y, encrypted_gate, gid);
                active_labels[z.id()] = Some(z_label);
                gid += 2;
            }
        }
    }

    Ok(circ
        .outputs()
        .iter()
        .zip(&info.output_perms)
        .map(|(node, perm)| {
            let active = active_labels[node.id()].expect("feed should be initialized");
            (active.pointer() == 1) ^ perm
        })
        .collect())
}
