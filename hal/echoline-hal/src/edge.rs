//! Edge-interrupt events
//!
//! The interrupt dispatcher reports each transition on an input as a pin
//! number plus an event bitmask. The mask values match the RP2040
//! `IO_IRQ` event bits so a dispatcher can forward them unchanged.

/// Falling-edge event bit
pub const EDGE_FALL: u32 = 0x4;

/// Rising-edge event bit
pub const EDGE_RISE: u32 = 0x8;

/// Direction of a transition on a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeKind {
    /// Low to high
    Rising,
    /// High to low
    Falling,
}

impl EdgeKind {
    /// Decode an event mask
    ///
    /// Only the two single-edge masks are recognised. A combined mask, a
    /// level event or zero decode to `None` and must be ignored.
    pub fn from_mask(events: u32) -> Option<Self> {
        match events {
            EDGE_RISE => Some(EdgeKind::Rising),
            EDGE_FALL => Some(EdgeKind::Falling),
            _ => None,
        }
    }

    /// Event mask for this edge
    pub const fn mask(self) -> u32 {
        match self {
            EdgeKind::Rising => EDGE_RISE,
            EdgeKind::Falling => EDGE_FALL,
        }
    }

    /// Edge reported after the input settled at `high`
    pub const fn from_level(high: bool) -> Self {
        if high {
            EdgeKind::Rising
        } else {
            EdgeKind::Falling
        }
    }
}

/// A decoded edge with its capture timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvent {
    /// Edge direction
    pub kind: EdgeKind,
    /// Microsecond counter value when the edge was observed
    pub at_us: u32,
}

impl EdgeEvent {
    /// Decode a raw dispatcher notification
    pub fn decode(events: u32, at_us: u32) -> Option<Self> {
        EdgeKind::from_mask(events).map(|kind| Self { kind, at_us })
    }
}
