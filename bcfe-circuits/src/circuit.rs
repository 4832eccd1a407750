use crate::components::{Feed, Gate, Node};

/// An error that can occur when performing operations with a circuit.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum CircuitError {
    #[error("invalid number of inputs: expected {0}, got {1}")]
    InvalidInputCount(usize, usize),
}

/// A binary circuit.
///
/// Inputs and outputs are single-bit feeds; feeds 0 and 1 are the constant
/// one and zero wires.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub(crate) inputs: Vec<Node<Feed>>,
    pub(crate) outputs: Vec<Node<Feed>>,
    pub(crate) gates: Vec<Gate>,
    pub(crate) feed_count: usize,
    pub(crate) and_count: usize,
    pub(crate) xor_count: usize,
}

impl Circuit {
    /// Returns a reference to the inputs of the circuit.
    pub fn inputs(&self) -> &[Node<Feed>] {
        &self.inputs
    }

    /// Returns a reference to the outputs of the circuit.
    pub fn outputs(&self) -> &[Node<Feed>] {
        &self.outputs
    }

    /// Returns a reference to the gates of the circuit.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the number of feeds in the circuit.
    pub fn feed_count(&self) -> usize {
        self.feed_count
    }

    /// Returns the number of AND gates in the circuit.
    pub fn and_count(&self) -> usize {
        self.and_count
    }

    /// Returns the number of XOR gates in the circuit.
    pub fn xor_count(&self) -> usize {
        self.xor_count
    }

    /// Evaluate the circuit in the clear with the given input bits.
    ///
    /// # Arguments
    ///
    /// * `values` - One bit per circuit input, in input order.
    ///
    /// # Returns
    ///
    /// One bit per circuit output, in output order.
    pub fn evaluate(&self, values: &[bool]) -> Result<Vec<bool>, CircuitError> {
        if values.len() != self.inputs.len() {
            return Err(CircuitError::InvalidInputCount(
                self.inputs.len(),
                values.len(),
            ));
        }

        let mut feeds: Vec<Option<bool>> = vec![None; self.feed_count];
        feeds[0] = Some(true);
        feeds[1] = Some(false);

        for (node, value) in self.inputs.iter().zip(values) {
            feeds[node.id] = Some(*value);
        }

        for gate in &self.gates {
            match gate {
                Gate::Xor { x, y, z } => {
                    let x = feeds[x.id].expect("feed should be set");
                    let y = feeds[y.id].expect("feed should be set");

                    feeds[z.id] = Some(x ^ y);
                }
                Gate::And { x, y, z } => {
                    let x = feeds[x.id].expect("feed should be set");
                    let y = feeds[y.id].expect("feed should be set");

                    feeds[z.id] = Some(x & y);
                }
                Gate::Inv { x, z } => {
                    let x = feeds[x.id].expect("feed should be set");

                    feeds[z.id] = Some(!x);
                }
            }
        }

        Ok(self
            .outputs
            .iter()
            .map(|node| feeds[node.id].expect("feed should be set"))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircuitBuilder;

    fn build_adder() -> Circuit {
        let mut builder = CircuitBuilder::new();

        let a = builder.add_inputs(4);
        let b = builder.add_inputs(4);

        let sum = crate::ops::add(&mut builder, &a, &b);

        builder.add_outputs(&sum);
        builder.build()
    }

    #[test]
    fn test_evaluate() {
        let circ = build_adder();

        // 3 + 5 = 8, little-endian
        let out = circ
            .evaluate(&[true, true, false, false, true, false, true, false])
            .unwrap();

        assert_eq!(out, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_evaluate_wrong_input_count() {
        let circ = build_adder();

        assert!(matches!(
            circ.evaluate(&[true; 3]),
            Err(CircuitError::InvalidInputCount(8, 3))
        ));
    }
}
