//! PSoC 6 pin map tables.
//!
//! Pin-to-SCB routing for UART signals on the CY8C6xx7 package. `function`
//! is the HSIOM selector that connects the pin to the block.

use crate::pinmap::{PinMapEntry, PinName, ResourceDescriptor, ResourceKind};

/// HSIOM selector for SCB UART signals.
pub const HSIOM_SEL_ACT_6: u8 = 18;

const fn scb(pin: PinName, block: u8) -> PinMapEntry {
    PinMapEntry::new(
        pin,
        ResourceDescriptor::new(ResourceKind::Scb, block, 0),
        HSIOM_SEL_ACT_6,
    )
}

const fn p(port: u8, pin: u8) -> PinName {
    PinName::new(port, pin)
}

/// UART receive pins.
pub static UART_RX: [PinMapEntry; 8] = [
    scb(p(0, 2), 0),
    scb(p(1, 0), 7),
    scb(p(5, 0), 5),
    scb(p(6, 0), 3),
    scb(p(6, 4), 6),
    scb(p(9, 0), 2),
    scb(p(10, 0), 1),
    scb(p(12, 0), 6),
];

/// UART transmit pins.
pub static UART_TX: [PinMapEntry; 8] = [
    scb(p(0, 3), 0),
    scb(p(1, 1), 7),
    scb(p(5, 1), 5),
    scb(p(6, 1), 3),
    scb(p(6, 5), 6),
    scb(p(9, 1), 2),
    scb(p(10, 1), 1),
    scb(p(12, 1), 6),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinmap::find_resource;

    #[test]
    fn kitprog_uart_shares_one_block() {
        let rx = find_resource(p(5, 0), &UART_RX).unwrap();
        let tx = find_resource(p(5, 1), &UART_TX).unwrap();
        assert_eq!(rx.resource, tx.resource);
        assert_eq!(rx.resource.block, 5);
    }

    #[test]
    fn tables_have_no_duplicate_pins() {
        for table in [&UART_RX, &UART_TX] {
            for (i, entry) in table.iter().enumerate() {
                let first = find_resource(entry.pin, table).unwrap();
                assert!(core::ptr::eq(first, &table[i]));
            }
        }
    }
}
