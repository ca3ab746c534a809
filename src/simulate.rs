//! Truth-table simulation of an XMG.
//!
//! Assigns every node its function over the graph's primary inputs, which
//! is how higher layers obtain [`TruthTable`] values for classification
//! and verification.

use crate::error::Result;
use crate::signal::Signal;
use crate::tt::TruthTable;
use crate::xmg::{Gate, Xmg};

/// Simulates every node, in topological order, over `num_inputs` variables.
///
/// The returned vector is indexed by node id. Input `i` gets the projection
/// `x_i` extended to the full input count; XOR and MAJ combine their fan-in
/// tables bitwise, honoring edge complementation.
pub fn simulate(xmg: &Xmg) -> Result<Vec<TruthTable>> {
    let num_vars = xmg.num_inputs() as u32;
    let mut tables: Vec<TruthTable> = Vec::with_capacity(xmg.size());
    for node in xmg.nodes() {
        let table = match *xmg.gate(node) {
            Gate::Const => {
                let mut t = TruthTable::const0();
                t.extend(num_vars)?;
                t
            }
            Gate::Input(i) => {
                let mut t = TruthTable::nth_var(i);
                t.extend(num_vars)?;
                t
            }
            Gate::Xor([a, b]) => &edge(&tables, a) ^ &edge(&tables, b),
            Gate::Maj([a, b, c]) => {
                let a = edge(&tables, a);
                let b = edge(&tables, b);
                let c = edge(&tables, c);
                &(&(&a & &b) | &(&a & &c)) | &(&b & &c)
            }
        };
        tables.push(table);
    }
    Ok(tables)
}

/// Simulates the graph and returns one table per primary output, with the
/// output polarity applied.
pub fn simulate_outputs(xmg: &Xmg) -> Result<Vec<TruthTable>> {
    let tables = simulate(xmg)?;
    Ok(xmg
        .outputs()
        .iter()
        .map(|o| edge(&tables, o.signal))
        .collect())
}

fn edge(tables: &[TruthTable], signal: Signal) -> TruthTable {
    let table = &tables[signal.node() as usize];
    if signal.is_complemented() {
        !table
    } else {
        table.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_adder() {
        let mut g = Xmg::new();
        let a = g.create_pi("a");
        let b = g.create_pi("b");
        let cin = g.create_pi("cin");
        let t = g.create_xor(a, b);
        let sum = g.create_xor(t, cin);
        let carry = g.create_maj(a, b, cin);
        g.create_po(sum, "sum");
        g.create_po(carry, "carry");

        let outputs = simulate_outputs(&g).unwrap();
        assert_eq!(outputs[0].to_hex(), "96");
        assert_eq!(outputs[1].to_hex(), "e8");
    }

    #[test]
    fn test_node_tables() {
        let mut g = Xmg::new();
        let a = g.create_pi("a");
        let b = g.create_pi("b");
        let f = g.create_xor(a, b);

        let tables = simulate(&g).unwrap();
        assert_eq!(tables.len(), g.size());
        assert_eq!(tables[0].to_hex(), "0");
        assert_eq!(tables[a.node() as usize].to_hex(), "a");
        assert_eq!(tables[b.node() as usize].to_hex(), "c");
        assert_eq!(tables[f.node() as usize].to_hex(), "6");
    }

    #[test]
    fn test_output_polarity() {
        let mut g = Xmg::new();
        let a = g.create_pi("a");
        let b = g.create_pi("b");
        let f = g.create_and(a, b);
        g.create_po(!f, "nand");

        let outputs = simulate_outputs(&g).unwrap();
        assert_eq!(outputs[0].to_hex(), "7");
    }

    #[test]
    fn test_constant_graph() {
        let mut g = Xmg::new();
        let one = g.constant(true);
        g.create_po(one, "one");
        let outputs = simulate_outputs(&g).unwrap();
        assert_eq!(outputs[0], TruthTable::const1());
    }
}
