//! Color-layer allocator ("bitmarks").
//!
//! Graph algorithms need transient per-node boolean scratch storage without
//! paying for a fresh allocation on every traversal. [`Bitmarks`] manages a
//! free list of *color layers*: uniform-length bit vectors indexed by node
//! id, plus an occupancy vector over the layer indices. Layer count and
//! layer length grow on two independent axes ([`Bitmarks::alloc`] and
//! [`Bitmarks::grow_to`]); neither ever shrinks.

use log::debug;

use crate::bits::Bits;
use crate::error::{Error, Result};
use crate::xmg::XmgNode;

/// Free-list-managed set of growable boolean layers, one instance per graph.
pub struct Bitmarks {
    /// The color layers; all have identical length at all times.
    marks: Vec<Bits>,
    /// Occupancy: bit `c` set means layer `c` is currently allocated.
    used: Bits,
}

impl Bitmarks {
    /// Creates `num_colors` cleared layers of `size` bits each.
    ///
    /// All requested colors start out *occupied*: they are considered
    /// pre-allocated to the creator and must be explicitly freed before
    /// [`Bitmarks::alloc`] may hand them out again.
    ///
    /// # Panics
    ///
    /// Panics if `num_colors` is zero.
    pub fn new(size: usize, num_colors: usize) -> Self {
        assert!(num_colors > 0, "at least one color layer is required");
        let marks = vec![Bits::new(size); num_colors];
        let mut used = Bits::new(num_colors);
        used.invert();
        Self { marks, used }
    }

    /// Hands out the lowest-indexed unoccupied color, growing the layer set
    /// by exactly one cleared layer when all colors are taken. Never fails.
    pub fn alloc(&mut self) -> usize {
        if self.used.count() == self.used.len() {
            let color = self.num_layers();
            self.marks.push(Bits::new(self.layer_capacity()));
            self.used.grow(color + 1);
            self.used.set(color);
            debug!("alloc: grown to {} layers, new color {}", color + 1, color);
            return color;
        }
        for color in 0..self.used.len() {
            if !self.used.get(color) {
                self.used.set(color);
                debug!("alloc: reusing color {}", color);
                return color;
            }
        }
        unreachable!("occupancy count disagrees with occupancy bits");
    }

    /// Clears the layer and returns the color to the free list.
    ///
    /// Fails with [`Error::PreconditionViolated`] when `color` is not
    /// currently allocated.
    pub fn free(&mut self, color: usize) -> Result<()> {
        if color >= self.num_layers() || !self.used.get(color) {
            return Err(Error::PreconditionViolated(format!(
                "color {} is not allocated",
                color
            )));
        }
        self.marks[color].clear();
        self.used.reset(color);
        debug!("free: color {}", color);
        Ok(())
    }

    /// Sets bit `node` in layer `color`; silent no-op when `node` is beyond
    /// the current capacity (call [`Bitmarks::grow_to`] first if the bit
    /// must register).
    pub fn mark(&mut self, node: XmgNode, color: usize) {
        assert!(color < self.num_layers(), "color {} out of range", color);
        let node = node as usize;
        if node < self.marks[color].len() {
            self.marks[color].set(node);
        }
    }

    /// Clears bit `node` in layer `color`; silent no-op when out of range.
    pub fn unmark(&mut self, node: XmgNode, color: usize) {
        assert!(color < self.num_layers(), "color {} out of range", color);
        let node = node as usize;
        if node < self.marks[color].len() {
            self.marks[color].reset(node);
        }
    }

    /// Queries bit `node` in layer `color`; false when out of range.
    pub fn is_marked(&self, node: XmgNode, color: usize) -> bool {
        assert!(color < self.num_layers(), "color {} out of range", color);
        self.marks[color].get(node as usize)
    }

    /// Grows *all* layers to hold `node`, zero-filling. This is the only
    /// growth path for layer length.
    pub fn grow_to(&mut self, node: XmgNode) {
        let node = node as usize;
        if node >= self.layer_capacity() {
            for layer in &mut self.marks {
                layer.grow(node + 1);
            }
            debug!("grow_to: capacity now {}", node + 1);
        }
    }

    /// Complements every bit of the layer in place.
    pub fn invert(&mut self, color: usize) {
        assert!(color < self.num_layers(), "color {} out of range", color);
        self.marks[color].invert();
    }

    /// ORs layer `src` into layer `dst`; `src` is left unmodified.
    pub fn merge_into(&mut self, dst: usize, src: usize) {
        assert!(dst < self.num_layers(), "color {} out of range", dst);
        assert!(src < self.num_layers(), "color {} out of range", src);
        if dst == src {
            return;
        }
        let (a, b) = if dst < src {
            let (lo, hi) = self.marks.split_at_mut(src);
            (&mut lo[dst], &hi[0])
        } else {
            let (lo, hi) = self.marks.split_at_mut(dst);
            (&mut hi[0], &lo[src])
        };
        a.or_assign(b);
    }

    /// Clears the layer's bits without releasing the color.
    pub fn reset(&mut self, color: usize) {
        assert!(color < self.num_layers(), "color {} out of range", color);
        self.marks[color].clear();
    }

    /// Read access to a layer's bits.
    pub fn layer(&self, color: usize) -> &Bits {
        assert!(color < self.num_layers(), "color {} out of range", color);
        &self.marks[color]
    }

    /// A copy of the raw occupancy vector, for save/restore across
    /// backtracking algorithms.
    pub fn snapshot_occupancy(&self) -> Bits {
        self.used.clone()
    }

    /// Overwrites the raw occupancy vector with a prior snapshot.
    ///
    /// Layers allocated since the snapshot become free again (their bits are
    /// kept; [`Bitmarks::alloc`] hands them out as-is). The snapshot is
    /// padded so that occupancy length always matches the layer count.
    pub fn restore_occupancy(&mut self, used: Bits) {
        assert!(
            used.len() <= self.num_layers(),
            "occupancy snapshot is longer than the layer set"
        );
        let mut used = used;
        used.grow(self.num_layers());
        self.used = used;
    }

    /// Number of set bits in the layer.
    pub fn count(&self, color: usize) -> usize {
        assert!(color < self.num_layers(), "color {} out of range", color);
        self.marks[color].count()
    }

    /// Current layer length; all layers always have the same length.
    pub fn layer_capacity(&self) -> usize {
        self.marks[0].len()
    }

    /// Total number of layers, occupied or not.
    pub fn num_layers(&self) -> usize {
        self.marks.len()
    }

    /// Number of currently allocated layers.
    pub fn num_occupied_layers(&self) -> usize {
        self.used.count()
    }
}
