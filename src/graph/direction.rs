//! Edge direction flags relative to a node.
//!
//! An edge incident on a node is seen from that node as undirected, directed outward
//! (the node is the tail) or directed inward (the node is the head). A directed self-loop
//! is both outward and inward. [`Direction`] masks combine these so a
//! [`DirectionTraverser`](crate::graph::DirectionTraverser) can decide which incident
//! edges it offers.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Direction of an incident edge as seen from one of its endpoints.
    ///
    /// Single flags describe one incidence; combined flags form a mask selecting which
    /// incidences a traversal follows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forestview::graph::Direction;
    ///
    /// let mask = Direction::UNDIRECTED | Direction::DIRECTED_OUT;
    /// assert!(mask.intersects(Direction::DIRECTED_OUT));
    /// assert_eq!(mask.invert(), Direction::UNDIRECTED | Direction::DIRECTED_IN);
    /// assert_eq!(mask.to_string(), "- >");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        /// The edge is undirected.
        const UNDIRECTED = 0x01;
        /// The edge is directed and the node is its tail.
        const DIRECTED_OUT = 0x02;
        /// The edge is directed and the node is its head.
        const DIRECTED_IN = 0x04;
        /// Directed in either orientation.
        const DIRECTED = Self::DIRECTED_OUT.bits() | Self::DIRECTED_IN.bits();
        /// Every incidence.
        const ANY = Self::UNDIRECTED.bits() | Self::DIRECTED.bits();
    }
}

impl Direction {
    /// Returns the mask seen from the other endpoint: outward and inward swap,
    /// undirected stays.
    #[must_use]
    pub fn invert(self) -> Self {
        let mut inverted = self & Direction::UNDIRECTED;
        if self.contains(Direction::DIRECTED_OUT) {
            inverted |= Direction::DIRECTED_IN;
        }
        if self.contains(Direction::DIRECTED_IN) {
            inverted |= Direction::DIRECTED_OUT;
        }
        inverted
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.bits() & Direction::ANY.bits() {
            0x00 => "none",
            0x01 => "-",
            0x02 => ">",
            0x03 => "- >",
            0x04 => "<",
            0x05 => "< -",
            0x06 => "< >",
            _ => "any",
        };
        f.write_str(text)
    }
}
