use crate::{
    circuit::Circuit,
    components::{Feed, Gate, Node},
};

/// An error that can occur when building a circuit.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum BuilderError {
    #[error("invalid irreducible polynomial coefficient: {0}")]
    InvalidIrreduciblePolynomial(u64),
    #[error("irreducible polynomial has {0} coefficients, expected at least {1}")]
    IrreduciblePolynomialTooShort(usize, usize),
}

/// A circuit builder.
///
/// Feeds 0 and 1 are reserved for the constant one and zero wires, so that
/// gadgets can reference constants without burning gates.
///
/// # Example
///
/// ```
/// use bcfe_circuits::CircuitBuilder;
///
/// let mut builder = CircuitBuilder::new();
///
/// let a = builder.add_input();
/// let b = builder.add_input();
///
/// let c = builder.add_and_gate(a, b);
///
/// builder.add_output(c);
/// let circuit = builder.build();
///
/// assert_eq!(circuit.evaluate(&[true, true]).unwrap(), vec![true]);
/// ```
#[derive(Debug)]
pub struct CircuitBuilder {
    feed_id: usize,
    inputs: Vec<Node<Feed>>,
    outputs: Vec<Node<Feed>>,
    gates: Vec<Gate>,
    and_count: usize,
    xor_count: usize,
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitBuilder {
    /// Creates a new circuit builder.
    pub fn new() -> Self {
        Self {
            // feeds 0 and 1 carry the constants
            feed_id: 2,
            inputs: Vec::new(),
            outputs: Vec::new(),
            gates: Vec::new(),
            and_count: 0,
            xor_count: 0,
        }
    }

    /// Returns the constant one wire.
    pub fn one(&self) -> Node<Feed> {
        Node::new(0)
    }

    /// Returns the constant zero wire.
    pub fn zero(&self) -> Node<Feed> {
        Node::new(1)
    }

    /// Adds a feed to the circuit.
    fn add_feed(&mut self) -> Node<Feed> {
        let feed = Node::<Feed>::new(self.feed_id);
        self.feed_id += 1;

        feed
    }

    /// Adds a new single-bit input to the circuit.
    pub fn add_input(&mut self) -> Node<Feed> {
        let feed = self.add_feed();
        self.inputs.push(feed);

        feed
    }

    /// Adds `count` single-bit inputs to the circuit.
    pub fn add_inputs(&mut self, count: usize) -> Vec<Node<Feed>> {
        (0..count).map(|_| self.add_input()).collect()
    }

    /// Adds a new output to the circuit.
    pub fn add_output(&mut self, node: Node<Feed>) {
        self.outputs.push(node);
    }

    /// Adds the given nodes as outputs of the circuit, in order.
    pub fn add_outputs(&mut self, nodes: &[Node<Feed>]) {
        self.outputs.extend_from_slice(nodes);
    }

    /// Adds an XOR gate to the circuit, returning the output feed.
    pub fn add_xor_gate(&mut self, x: Node<Feed>, y: Node<Feed>) -> Node<Feed> {
        let out = self.add_feed();
        self.gates.push(Gate::Xor {
            x: x.into(),
            y: y.into(),
            z: out,
        });
        self.xor_count += 1;
        out
    }

    /// Adds an AND gate to the circuit, returning the output feed.
    pub fn add_and_gate(&mut self, x: Node<Feed>, y: Node<Feed>) -> Node<Feed> {
        let out = self.add_feed();
        self.gates.push(Gate::And {
            x: x.into(),
            y: y.into(),
            z: out,
        });
        self.and_count += 1;
        out
    }

    /// Adds an INV gate to the circuit, returning the output feed.
    pub fn add_inv_gate(&mut self, x: Node<Feed>) -> Node<Feed> {
        let out = self.add_feed();
        self.gates.push(Gate::Inv { x: x.into(), z: out });
        out
    }

    /// Builds the circuit.
    pub fn build(self) -> Circuit {
        Circuit {
            inputs: self.inputs,
            outputs: self.outputs,
            gates: self.gates,
            feed_count: self.feed_id,
            and_count: self.and_count,
            xor_count: self.xor_count,
        }
    }
}
