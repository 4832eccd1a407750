use bcfe_circuits::{Circuit, Gate};
use bcfe_core::{aes::TweakableAes, Block};
use rand::{CryptoRng, Rng};

use crate::{
    circuit::{EncryptedGate, GarbledInfo},
    encoding::{Delta, Label},
};

/// A freshly garbled circuit: the persistable info plus the label pair of
/// every input wire.
///
/// `input_labels[i][b]` is the label carrying bit `b` on input wire `i`.
#[derive(Debug, Clone)]
pub struct GarbledCircuit {
    /// The compact garbled form.
    pub info: GarbledInfo,
    /// Low/high label pair per input wire.
    pub input_labels: Vec<[Label; 2]>,
}

/// Computes a half-gate garbled AND gate.
#[inline]
pub(crate) fn and_gate(
    cipher: &TweakableAes,
    x_0: &Label,
    y_0: &Label,
    delta: &Delta,
    gid: usize,
) -> (Label, EncryptedGate) {
    let delta = delta.into_inner();
    let x_0 = x_0.to_inner();
    let x_1 = x_0 ^ delta;
    let y_0 = y_0.to_inner();
    let y_1 = y_0 ^ delta;

    let p_a = x_0.lsb();
    let p_b = y_0.lsb();
    let j = Block::new((gid as u128).to_be_bytes());
    let k = Block::new(((gid + 1) as u128).to_be_bytes());

    let mut h = [x_0, y_0, x_1, y_1];
    cipher.tccr_many(&[j, k, j, k], &mut h);

    let [hx_0, hy_0, hx_1, hy_1] = h;

    // Garbled row of generator half-gate
    let t_g = hx_0 ^ hx_1 ^ (Block::SELECT_MASK[p_b] & delta);
    let w_g = hx_0 ^ (Block::SELECT_MASK[p_a] & t_g);

    // Garbled row of evaluator half-gate
    let t_e = hy_0 ^ hy_1 ^ x_0;
    let w_e = hy_0 ^ (Block::SELECT_MASK[p_b] & (t_e ^ x_0));

    let z_0 = Label::new(w_g ^ w_e);

    (z_0, EncryptedGate::new([t_g, t_e]))
}

/// Garbles a circuit with fresh wire labels drawn from `rng`.
///
/// Samples the free-XOR delta, the constant-wire `fixed_label`, the hash
/// `global_key`, and one low label per input wire, then walks the gates:
/// XOR and INV derive labels for free, each AND gate emits one table
/// entry.
pub fn garble<R: Rng + CryptoRng + ?Sized>(circ: &Circuit, rng: &mut R) -> GarbledCircuit {
    let delta = Delta::random(rng);
    let fixed_label = Label::random(rng);
    let global_key = Block::random(rng);
    let cipher = TweakableAes::new(global_key);

    let mut low_labels: Vec<Option<Label>> = vec![None; circ.feed_count()];
    // feed 0 is constant one, feed 1 constant zero; both evaluate to
    // `fixed_label`
    low_labels[0] = Some(fixed_label ^ delta);
    low_labels[1] = Some(fixed_label);

    let input_labels: Vec<[Label; 2]> = circ
        .inputs()
        .iter()
        .map(|node| {
            let low = Label::random(rng);
            low_labels[node.id()] = Some(low);
            [low, low ^ delta]
        })
        .collect();

    let mut table = Vec::with_capacity(circ.and_count());
    let mut gid = 1;

    for gate in circ.gates() {
        match gate {
            Gate::Inv { x, z } => {
                let x_0 = low_labels[x.id()].expect("feed should be initialized");
                low_labels[z.id()] = Some(x_0 ^ delta);
            }
            Gate::Xor { x, y, z } => {
                let x_0 = low_labels[x.id()].expect("feed should be initialized");
                let y_0 = low_labels[y.id()].expect("feed should be initialized");
                low_labels[z.id()] = Some(x_0 ^ y_0);
            }
            Gate::And { x, y, z } => {
                let x_0 = low_labels[x.id()].expect("feed should be initialized");
                let y_0 = low_labels[y.id()].expect("feed should be initialized");
                let (z_0, encrypted_gate) = and_gate(&cipher, &x_0, &y_0, &delta, gid);
                low_labels[z.id()] = Some(z_0);
                gid += 2;

                table.push(encrypted_gate);
            }
        }
    }

    let output_perms = circ
        .outputs()
        .iter()
        .map(|node| {
            low_labels[node.id()]
                .expect("feed should be initialized")
                .pointer()
                == 1
        })
        .collect();

    GarbledCircuit {
        info: GarbledInfo {
            output_perms,
            table,
            fixed_label,
            global_key,
        },
        input_labels,
    }
}
