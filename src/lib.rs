//! # xmg-rs: Xor-Majority Graphs in Rust
//!
//! **`xmg-rs`** is the core of a logic-synthesis toolkit: it represents Boolean functions as
//! bit-exact **truth tables** and Boolean networks as **Xor-Majority Graphs (XMGs)** --- circuit
//! DAGs built from 2-input XOR and 3-input majority gates with complemented edges.
//!
//! ## What is an XMG?
//!
//! Majority-based logic generalizes AND/OR: `MAJ(0, a, b)` is an AND, `MAJ(1, a, b)` is an OR,
//! and together with XOR it yields compact networks for arithmetic-heavy circuits. Every edge
//! carries a complementation flag, so inverters are free.
//!
//! ## Key Features
//!
//! - **Truth table algebra**: cofactors, quantification, variable permutation, support
//!   computation and minbase canonicalization over packed bit vectors, with a stable
//!   hexadecimal form usable as a cross-process key ([`tt`]).
//! - **Color layers**: graph algorithms borrow reusable per-node boolean annotation planes from
//!   a free-list allocator instead of re-allocating scratch sets on every traversal
//!   ([`bitmarks`]).
//! - **Structural hashing**: gate creation normalizes operands and reuses existing nodes, so
//!   equivalent calls return the same [`signal::Signal`].
//! - **Simulation bridge**: any graph can be turned back into truth tables for classification
//!   and verification ([`simulate`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use xmg_rs::simulate::simulate_outputs;
//! use xmg_rs::tt::TruthTable;
//! use xmg_rs::xmg::Xmg;
//!
//! // Build a full adder
//! let mut g = Xmg::new();
//! let a = g.create_pi("a");
//! let b = g.create_pi("b");
//! let cin = g.create_pi("cin");
//! let t = g.create_xor(a, b);
//! let sum = g.create_xor(t, cin);
//! let carry = g.create_maj(a, b, cin);
//! g.create_po(sum, "sum");
//! g.create_po(carry, "carry");
//!
//! // Simulate it into truth tables
//! let outputs = simulate_outputs(&g).unwrap();
//! assert_eq!(outputs[0].to_hex(), "96");
//! assert_eq!(outputs[1].to_hex(), "e8");
//!
//! // Truth tables are first-class values
//! let carry_tt = TruthTable::from_hex("e8").unwrap();
//! assert_eq!(carry_tt.support_size().unwrap(), 3);
//!
//! // Borrow a scratch color layer for a traversal
//! let color = g.bitmarks_mut().alloc();
//! g.bitmarks_mut().mark(sum.node(), color);
//! assert!(g.bitmarks().is_marked(sum.node(), color));
//! g.bitmarks_mut().free(color).unwrap();
//! ```
//!
//! ## Core Components
//!
//! - **[`tt`]**: the truth table value type and its algebra, plus the process-wide projection
//!   store.
//! - **[`bitmarks`]**: the color-layer allocator owned by every graph.
//! - **[`xmg`]**: the graph itself --- nodes, strashing, primary I/O, levels.
//! - **[`exact`]**: the seam towards an external exact-synthesis solver.

pub mod bitmarks;
pub mod bits;
pub mod error;
pub mod exact;
pub mod signal;
pub mod simulate;
pub mod tt;
pub mod xmg;
