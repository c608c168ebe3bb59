//! Pin-to-resource mapping.
//!
//! Every peripheral driver owns a build-time table of [`PinMapEntry`]s
//! saying which hardware block and channel a pin can be routed to. The
//! tables are static and read-only, so lookups need no locking.

use core::fmt;

/// Logical pin identifier.
///
/// Packed as `port << 3 | pin`, matching the 8-pins-per-port layout of the
/// GPIO controller. [`PinName::NC`] marks an unconnected signal and must
/// never reach a binding operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PinName(u8);

impl PinName {
    /// Not connected.
    pub const NC: Self = Self(0xFF);

    /// Pins per GPIO port.
    pub const PINS_PER_PORT: u8 = 8;

    pub const fn new(port: u8, pin: u8) -> Self {
        Self((port << 3) | (pin & 0x7))
    }

    pub const fn is_connected(self) -> bool {
        self.0 != Self::NC.0
    }

    pub const fn port(self) -> u8 {
        self.0 >> 3
    }

    pub const fn pin(self) -> u8 {
        self.0 & 0x7
    }

    /// Flat index, usable for per-pin bookkeeping.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_connected() {
            write!(f, "P{}_{}", self.port(), self.pin())
        } else {
            write!(f, "NC")
        }
    }
}

/// Kind of hardware block a pin can be routed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    /// GPIO port (block = port, channel = pin).
    Gpio,
    /// Serial communication block (UART/SPI/I2C).
    Scb,
    /// Timer/counter/PWM block.
    Tcpwm,
    /// Crypto block (hosts the TRNG).
    Crypto,
}

impl ResourceKind {
    pub const COUNT: usize = 4;

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Hardware resource descriptor: one peripheral instance, block and channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub block: u8,
    pub channel: u8,
}

impl ResourceDescriptor {
    pub const fn new(kind: ResourceKind, block: u8, channel: u8) -> Self {
        Self {
            kind,
            block,
            channel,
        }
    }

    /// The GPIO resource backing `pin`.
    pub const fn gpio(pin: PinName) -> Self {
        Self::new(ResourceKind::Gpio, pin.port(), pin.pin())
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}.{}", self.kind, self.block, self.channel)
    }
}

/// One row of a pin map table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinMapEntry {
    pub pin: PinName,
    pub resource: ResourceDescriptor,
    /// HSIOM routing selector for the pin when bound to `resource`.
    pub function: u8,
}

impl PinMapEntry {
    pub const fn new(pin: PinName, resource: ResourceDescriptor, function: u8) -> Self {
        Self {
            pin,
            resource,
            function,
        }
    }
}

/// Find the first entry of `table` mapped to `pin`.
///
/// Scans in table order, so if a table lists a pin twice the earlier row
/// wins. Absence is a normal answer; callers decide whether it is fatal.
pub fn find_resource(pin: PinName, table: &[PinMapEntry]) -> Option<&PinMapEntry> {
    table.iter().find(|entry| entry.pin == pin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0_2: PinName = PinName::new(0, 2);
    const P5_0: PinName = PinName::new(5, 0);
    const P5_1: PinName = PinName::new(5, 1);

    const SCB0: ResourceDescriptor = ResourceDescriptor::new(ResourceKind::Scb, 0, 0);
    const SCB5: ResourceDescriptor = ResourceDescriptor::new(ResourceKind::Scb, 5, 0);

    static TABLE: [PinMapEntry; 3] = [
        PinMapEntry::new(P0_2, SCB0, 18),
        PinMapEntry::new(P5_0, SCB5, 18),
        PinMapEntry::new(P5_0, SCB0, 19),
    ];

    #[test]
    fn pin_name_packs_port_and_pin() {
        let pin = PinName::new(13, 7);
        assert_eq!(pin.port(), 13);
        assert_eq!(pin.pin(), 7);
        assert!(pin.is_connected());
        assert!(!PinName::NC.is_connected());
    }

    #[test]
    fn finds_mapped_pin() {
        let entry = find_resource(P0_2, &TABLE).unwrap();
        assert_eq!(entry.resource, SCB0);
        assert_eq!(entry.function, 18);
    }

    #[test]
    fn unmapped_pin_is_none() {
        assert!(find_resource(P5_1, &TABLE).is_none());
        assert!(find_resource(PinName::NC, &TABLE).is_none());
        assert!(find_resource(P0_2, &[]).is_none());
    }

    #[test]
    fn duplicate_pin_resolves_to_first_row() {
        let entry = find_resource(P5_0, &TABLE).unwrap();
        assert_eq!(entry.resource, SCB5);
        assert!(core::ptr::eq(entry, &TABLE[1]));
    }

    #[test]
    fn gpio_descriptor_follows_pin() {
        let res = ResourceDescriptor::gpio(PinName::new(11, 1));
        assert_eq!(res, ResourceDescriptor::new(ResourceKind::Gpio, 11, 1));
    }
}
