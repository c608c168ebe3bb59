//! CY8CKIT-062 board pins.

use drivers::pinmap::PinName;

pub const LED8: PinName = PinName::new(1, 5);
pub const LED9: PinName = PinName::new(13, 7);
pub const LED_RGB_RED: PinName = PinName::new(0, 3);
pub const LED_RGB_GREEN: PinName = PinName::new(1, 1);
pub const LED_RGB_BLUE: PinName = PinName::new(11, 1);

pub const SW2: PinName = PinName::new(0, 4);

/// KitProg bridge UART.
pub const DEBUG_UART_RX: PinName = PinName::new(5, 0);
pub const DEBUG_UART_TX: PinName = PinName::new(5, 1);

pub static LEDS: [PinName; 5] = [LED8, LED9, LED_RGB_RED, LED_RGB_GREEN, LED_RGB_BLUE];
pub static BUTTONS: [PinName; 1] = [SW2];

// LEDs and buttons are active low
pub const LED_STATE_ON: bool = false;
pub const LED_STATE_OFF: bool = true;
pub const BTN_PRESSED: bool = false;
pub const BTN_OFF: bool = true;
