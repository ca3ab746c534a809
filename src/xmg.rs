//! Xor-Majority Graphs.
//!
//! An [`Xmg`] is a DAG whose internal gates are 2-input XOR or 3-input
//! majority nodes, with a complementation flag on every edge ([`Signal`]).
//! Node 0 is the reserved constant. Gates are structurally hashed on
//! creation with the classical normalizations, so equivalent calls return
//! the same node. Nodes are never removed: dead nodes keep a fan-out count
//! of zero and are filtered, not freed, by consumers.

use std::collections::HashMap;

use log::debug;

use crate::bitmarks::Bitmarks;
use crate::signal::Signal;

/// A node id; dense, starting at 0 (the constant node).
pub type XmgNode = u32;

/// The function computed by a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Gate {
    /// The reserved constant node 0.
    Const,
    /// Primary input, with its position in the input list.
    Input(u32),
    Xor([Signal; 2]),
    Maj([Signal; 3]),
}

impl Gate {
    /// The ordered fan-in list; empty for constants and inputs.
    pub fn fanins(&self) -> &[Signal] {
        match self {
            Gate::Const | Gate::Input(_) => &[],
            Gate::Xor(inputs) => inputs,
            Gate::Maj(inputs) => inputs,
        }
    }
}

struct NodeData {
    gate: Gate,
    fanout: u32,
}

/// A primary output: a polarized edge plus a name.
#[derive(Debug, Clone)]
pub struct Output {
    pub signal: Signal,
    pub name: String,
}

/// An Xor-Majority Graph with its owned color-layer allocator.
pub struct Xmg {
    nodes: Vec<NodeData>,
    inputs: Vec<(XmgNode, String)>,
    outputs: Vec<Output>,
    strash: HashMap<Gate, XmgNode>,
    levels: Vec<u32>,
    bitmarks: Bitmarks,
}

impl Xmg {
    /// Creates an empty graph holding only the constant node.
    ///
    /// The allocator starts with capacity for the constant node and one
    /// reserved base layer (color 0); algorithms obtain scratch layers
    /// through [`Bitmarks::alloc`].
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                gate: Gate::Const,
                fanout: 0,
            }],
            inputs: Vec::new(),
            outputs: Vec::new(),
            strash: HashMap::new(),
            levels: Vec::new(),
            bitmarks: Bitmarks::new(1, 1),
        }
    }

    /// The constant signal of the given value.
    pub fn constant(&self, value: bool) -> Signal {
        Signal::from(value)
    }

    /// Appends a primary input.
    pub fn create_pi(&mut self, name: &str) -> Signal {
        let index = self.inputs.len() as u32;
        let node = self.add_node(Gate::Input(index));
        self.inputs.push((node, name.to_string()));
        debug!("create_pi({}) -> n{}", name, node);
        Signal::from_node(node)
    }

    /// Creates (or reuses) a 2-input XOR gate.
    ///
    /// Input complements propagate to the output; equal, complementary and
    /// constant operands collapse without creating a node.
    pub fn create_xor(&mut self, a: Signal, b: Signal) -> Signal {
        let polarity = a.is_complemented() ^ b.is_complemented();
        let (mut a, mut b) = (a.plain(), b.plain());
        if a.node() == b.node() {
            return self.constant(polarity);
        }
        if a.is_constant() {
            return Signal::new(b.node(), polarity);
        }
        if b.is_constant() {
            return Signal::new(a.node(), polarity);
        }
        if b < a {
            std::mem::swap(&mut a, &mut b);
        }
        let node = self.strash(Gate::Xor([a, b]));
        Signal::new(node, polarity)
    }

    /// Creates (or reuses) a 3-input majority gate.
    ///
    /// Equal and complementary operand pairs collapse; self-duality keeps
    /// at most one complemented operand on the stored gate.
    pub fn create_maj(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        if a == b {
            return a;
        }
        if a == !b {
            return c;
        }
        if a == c {
            return a;
        }
        if a == !c {
            return b;
        }
        if b == c {
            return b;
        }
        if b == !c {
            return a;
        }

        let complemented = [a, b, c].iter().filter(|s| s.is_complemented()).count();
        let (a, b, c, polarity) = if complemented >= 2 {
            (!a, !b, !c, true)
        } else {
            (a, b, c, false)
        };
        let mut operands = [a, b, c];
        operands.sort();
        let node = self.strash(Gate::Maj(operands));
        Signal::new(node, polarity)
    }

    /// `a AND b`, encoded as `MAJ(0, a, b)`.
    pub fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        let zero = self.constant(false);
        self.create_maj(zero, a, b)
    }

    /// `a OR b`, encoded as `MAJ(1, a, b)`.
    pub fn create_or(&mut self, a: Signal, b: Signal) -> Signal {
        let one = self.constant(true);
        self.create_maj(one, a, b)
    }

    /// Appends a primary output.
    pub fn create_po(&mut self, signal: Signal, name: &str) {
        debug!("create_po({}, {})", signal, name);
        self.outputs.push(Output {
            signal,
            name: name.to_string(),
        });
    }

    fn add_node(&mut self, gate: Gate) -> XmgNode {
        let node = self.nodes.len() as XmgNode;
        self.nodes.push(NodeData { gate, fanout: 0 });
        self.bitmarks.grow_to(node);
        node
    }

    fn strash(&mut self, gate: Gate) -> XmgNode {
        if let Some(&node) = self.strash.get(&gate) {
            return node;
        }
        for s in gate.fanins() {
            self.nodes[s.node() as usize].fanout += 1;
        }
        let node = self.add_node(gate);
        self.strash.insert(gate, node);
        debug!("new node n{}: {:?}", node, gate);
        node
    }
}

// Queries
impl Xmg {
    /// Total number of nodes, including the constant and dead nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Number of XOR and MAJ gates.
    pub fn num_gates(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.gate, Gate::Xor(_) | Gate::Maj(_)))
            .count()
    }

    pub fn is_constant(&self, node: XmgNode) -> bool {
        matches!(self.nodes[node as usize].gate, Gate::Const)
    }

    pub fn is_input(&self, node: XmgNode) -> bool {
        matches!(self.nodes[node as usize].gate, Gate::Input(_))
    }

    pub fn is_xor(&self, node: XmgNode) -> bool {
        matches!(self.nodes[node as usize].gate, Gate::Xor(_))
    }

    pub fn is_maj(&self, node: XmgNode) -> bool {
        matches!(self.nodes[node as usize].gate, Gate::Maj(_))
    }

    pub fn gate(&self, node: XmgNode) -> &Gate {
        &self.nodes[node as usize].gate
    }

    /// The ordered fan-in edges of a node; empty for constants and inputs.
    pub fn fanins(&self, node: XmgNode) -> &[Signal] {
        self.nodes[node as usize].gate.fanins()
    }

    /// Number of gates referencing this node as a fan-in. Primary outputs
    /// do not count.
    pub fn fanout_count(&self, node: XmgNode) -> u32 {
        self.nodes[node as usize].fanout
    }

    /// All node ids in topological (creation) order.
    pub fn nodes(&self) -> std::ops::Range<XmgNode> {
        0..self.nodes.len() as XmgNode
    }

    /// Primary inputs as (node, name) pairs, in creation order.
    pub fn inputs(&self) -> &[(XmgNode, String)] {
        &self.inputs
    }

    /// Primary outputs in creation order.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }
}

// Levels
impl Xmg {
    /// Recomputes and caches the level of every node: 0 for the constant
    /// and the inputs, `1 + max(fanin levels)` for gates.
    ///
    /// Levels are not invalidated automatically; after a structural
    /// mutation the caller must recompute before querying [`Xmg::level`].
    pub fn compute_levels(&mut self) {
        let mut levels = vec![0u32; self.nodes.len()];
        for (n, data) in self.nodes.iter().enumerate() {
            let fanins = data.gate.fanins();
            if !fanins.is_empty() {
                levels[n] = 1 + fanins
                    .iter()
                    .map(|s| levels[s.node() as usize])
                    .max()
                    .unwrap_or(0);
            }
        }
        self.levels = levels;
    }

    /// The cached level of a node.
    pub fn level(&self, node: XmgNode) -> u32 {
        assert_eq!(
            self.levels.len(),
            self.nodes.len(),
            "levels are stale, call compute_levels() first"
        );
        self.levels[node as usize]
    }

    /// The maximum level over all primary outputs.
    pub fn depth(&self) -> u32 {
        self.outputs
            .iter()
            .map(|o| self.level(o.signal.node()))
            .max()
            .unwrap_or(0)
    }
}

// Bitmarks
impl Xmg {
    /// The graph's owned color-layer allocator.
    pub fn bitmarks(&self) -> &Bitmarks {
        &self.bitmarks
    }

    pub fn bitmarks_mut(&mut self) -> &mut Bitmarks {
        &mut self.bitmarks
    }

    /// Marks, in the given color, exactly those of `nodes` that are neither
    /// primary inputs nor fan-out-free.
    pub fn mark_inner_nodes(&mut self, nodes: &[XmgNode], color: usize) {
        for &node in nodes {
            if self.is_input(node) || self.fanout_count(node) == 0 {
                continue;
            }
            self.bitmarks.mark(node, color);
        }
    }
}

impl Default for Xmg {
    fn default() -> Self {
        Self::new()
    }
}
