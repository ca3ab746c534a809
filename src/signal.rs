use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

use crate::xmg::XmgNode;

/// An edge handle in an XMG: a node id packed with a complementation flag.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Signal(u32);

// Constructors
impl Signal {
    /// The constant-0 signal (node 0, plain).
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The constant-1 signal (node 0, complemented).
    pub const fn one() -> Self {
        Self(1)
    }

    pub const fn new(node: XmgNode, complemented: bool) -> Self {
        Self(node << 1 | complemented as u32)
    }

    pub const fn from_node(node: XmgNode) -> Self {
        Self(node << 1)
    }
}

// Getters
impl Signal {
    pub const fn node(self) -> XmgNode {
        self.0 >> 1
    }

    /// The same edge with the complementation flag cleared.
    pub const fn plain(self) -> Self {
        Self(self.0 & !1)
    }
}

// Checks
impl Signal {
    pub const fn is_constant(self) -> bool {
        self.node() == 0
    }

    pub const fn is_complemented(self) -> bool {
        self.0 & 1 != 0
    }
}

impl From<bool> for Signal {
    fn from(b: bool) -> Self {
        if b {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl Not for Signal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl Not for &Signal {
    type Output = Signal;

    fn not(self) -> Self::Output {
        Signal(self.0 ^ 1)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() {
            write!(f, "{}", self.0 & 1)
        } else {
            if self.is_complemented() {
                write!(f, "!")?;
            }
            write!(f, "n{}", self.node())
        }
    }
}

impl Debug for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
