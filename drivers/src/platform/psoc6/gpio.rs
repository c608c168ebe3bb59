//! PSoC 6 GPIO Port Driver
//!
//! Register-level implementation of [`GpioDriver`]. Each port has its own
//! register block; every pin owns one 4-bit field in `CFG`:
//!
//! ```text
//!   bit 3     bits 2:0
//! +--------+------------+
//! | IN_EN  | DRIVE_MODE |
//! +--------+------------+
//! ```

use bitflags::bitflags;
use core::ptr::{addr_of, addr_of_mut, read_volatile, write_volatile};

use crate::error::HwStatus;
use crate::hal::gpio::{Direction, DriveMode, GpioDriver};
use crate::pinmap::PinName;

/// GPIO port 0 base address.
pub const GPIO_BASE: usize = 0x4031_0000;

/// Distance between two port register blocks.
pub const PORT_STRIDE: usize = 0x80;

/// Highest port number present on the device.
pub const MAX_PORT: u8 = 14;

bitflags! {
    /// One pin's field of the `CFG` register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct PinCfg: u32 {
        const DM0 = 1 << 0;
        const DM1 = 1 << 1;
        const DM2 = 1 << 2;
        /// Digital input buffer enable.
        const IN_EN = 1 << 3;
    }
}

impl PinCfg {
    const FIELD_BITS: u32 = 4;

    /// Field value for a direction / drive mode pair.
    pub fn encode(direction: Direction, drive: DriveMode) -> Self {
        let dm = match (drive, direction) {
            (DriveMode::None | DriveMode::Analog, Direction::Output) => 0b110,
            (DriveMode::None | DriveMode::Analog, _) => 0b000,
            (DriveMode::PullUp, _) => 0b010,
            (DriveMode::PullDown, _) => 0b011,
            (DriveMode::OpenDrainDriveLow, _) => 0b100,
            (DriveMode::OpenDrainDriveHigh, _) => 0b101,
            (DriveMode::Strong, _) => 0b110,
            (DriveMode::PullUpDown, _) => 0b111,
        };
        let mut cfg = Self::from_bits_truncate(dm);

        // Analog pins keep the digital buffer off
        if direction != Direction::Output && drive != DriveMode::Analog {
            cfg |= Self::IN_EN;
        }
        cfg
    }
}

/// Memory-mapped register layout of one GPIO port.
#[repr(C)]
struct PortRegs {
    out: u32,
    out_clr: u32,
    out_set: u32,
    out_inv: u32,
    input: u32,
    intr: u32,
    intr_mask: u32,
    intr_masked: u32,
    intr_set: u32,
    _reserved0: [u32; 7],
    intr_cfg: u32,
    cfg: u32,
    cfg_in: u32,
    cfg_out: u32,
}

/// PSoC 6 GPIO controller.
#[derive(Debug)]
pub struct Psoc6Gpio {
    base: usize,
}

impl Psoc6Gpio {
    /// Create a controller over the device's GPIO block.
    ///
    /// # Safety
    ///
    /// GPIO registers must be mapped and not driven by anyone else.
    pub const unsafe fn new() -> Self {
        Self { base: GPIO_BASE }
    }

    /// Create a controller with a custom base address (for testing).
    ///
    /// # Safety
    ///
    /// `base` must point to `(MAX_PORT + 1) * PORT_STRIDE` bytes of
    /// writable, word-aligned memory for the lifetime of the controller.
    pub const unsafe fn with_base(base: usize) -> Self {
        Self { base }
    }

    fn port(&self, pin: PinName) -> Result<*mut PortRegs, HwStatus> {
        if !pin.is_connected() || pin.port() > MAX_PORT {
            return Err(HwStatus::GPIO_BAD_PIN);
        }
        Ok((self.base + pin.port() as usize * PORT_STRIDE) as *mut PortRegs)
    }

    /// Current `CFG` field of `pin`.
    pub fn pin_config(&self, pin: PinName) -> Result<PinCfg, HwStatus> {
        let regs = self.port(pin)?;
        let shift = pin.pin() as u32 * PinCfg::FIELD_BITS;
        let cfg = unsafe { read_volatile(addr_of!((*regs).cfg)) };
        Ok(PinCfg::from_bits_truncate(cfg >> shift))
    }

    fn write_config(&mut self, pin: PinName, field: PinCfg) -> Result<(), HwStatus> {
        let regs = self.port(pin)?;
        let shift = pin.pin() as u32 * PinCfg::FIELD_BITS;
        let mask = PinCfg::all().bits() << shift;

        unsafe {
            let cfg_ptr = addr_of_mut!((*regs).cfg);
            let cfg = read_volatile(cfg_ptr);
            write_volatile(cfg_ptr, (cfg & !mask) | (field.bits() << shift));
        }

        Ok(())
    }

    fn write_latch(&mut self, pin: PinName, value: bool) -> Result<(), HwStatus> {
        let regs = self.port(pin)?;
        let bit = 1u32 << pin.pin();

        unsafe {
            if value {
                write_volatile(addr_of_mut!((*regs).out_set), bit);
            } else {
                write_volatile(addr_of_mut!((*regs).out_clr), bit);
            }
        }

        Ok(())
    }
}

impl GpioDriver for Psoc6Gpio {
    fn init(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
        initial: bool,
    ) -> Result<(), HwStatus> {
        // Latch first so the pin never glitches when the driver turns on
        self.write_latch(pin, initial)?;
        self.write_config(pin, PinCfg::encode(direction, drive))
    }

    fn configure(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
    ) -> Result<(), HwStatus> {
        self.write_config(pin, PinCfg::encode(direction, drive))
    }

    fn write(&mut self, pin: PinName, value: bool) {
        self.write_latch(pin, value).ok();
    }

    fn read(&self, pin: PinName) -> bool {
        match self.port(pin) {
            Ok(regs) => unsafe { read_volatile(addr_of!((*regs).input)) & (1 << pin.pin()) != 0 },
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: usize = (MAX_PORT as usize + 1) * PORT_STRIDE / 4;
    const PORT_WORDS: usize = PORT_STRIDE / 4;
    const OUT_CLR: usize = 1;
    const OUT_SET: usize = 2;
    const IN: usize = 4;
    const CFG: usize = 0x44 / 4;

    fn controller(mem: &mut [u32]) -> Psoc6Gpio {
        assert_eq!(mem.len(), WORDS);
        unsafe { Psoc6Gpio::with_base(mem.as_mut_ptr() as usize) }
    }

    #[test]
    fn register_layout_matches_port_block() {
        assert_eq!(core::mem::offset_of!(PortRegs, input), 0x10);
        assert_eq!(core::mem::offset_of!(PortRegs, intr_cfg), 0x40);
        assert_eq!(core::mem::offset_of!(PortRegs, cfg), 0x44);
    }

    #[test]
    fn encode_drive_modes() {
        assert_eq!(PinCfg::encode(Direction::Input, DriveMode::Analog).bits(), 0x0);
        assert_eq!(PinCfg::encode(Direction::Input, DriveMode::None).bits(), 0x8);
        assert_eq!(PinCfg::encode(Direction::Input, DriveMode::Strong).bits(), 0xE);
        assert_eq!(PinCfg::encode(Direction::Output, DriveMode::Strong).bits(), 0x6);
        assert_eq!(PinCfg::encode(Direction::Output, DriveMode::Analog).bits(), 0x6);
        assert_eq!(
            PinCfg::encode(Direction::Bidirectional, DriveMode::PullUp).bits(),
            0xA
        );
    }

    #[test]
    fn init_sets_latch_and_field() {
        let mut mem = vec![0u32; WORDS];
        let mut gpio = controller(&mut mem);
        let pin = PinName::new(13, 7);

        gpio.init(pin, Direction::Input, DriveMode::PullUp, true).unwrap();
        assert_eq!(gpio.pin_config(pin).unwrap().bits(), 0xA);

        let port = 13 * PORT_WORDS;
        assert_eq!(mem[port + OUT_SET], 1 << 7);
        assert_eq!(mem[port + CFG], 0xA << 28);
    }

    #[test]
    fn configure_leaves_neighbours_alone() {
        let mut mem = vec![0u32; WORDS];
        let mut gpio = controller(&mut mem);
        gpio.init(PinName::new(0, 3), Direction::Output, DriveMode::Strong, false)
            .unwrap();
        gpio.configure(PinName::new(0, 4), Direction::Input, DriveMode::PullDown)
            .unwrap();

        assert_eq!(mem[OUT_CLR], 1 << 3);
        assert_eq!(mem[CFG], (0x6 << 12) | (0xB << 16));
    }

    #[test]
    fn read_samples_input_register() {
        let mut mem = vec![0u32; WORDS];
        mem[PORT_WORDS + IN] = 1 << 5;
        let gpio = controller(&mut mem);
        assert!(gpio.read(PinName::new(1, 5)));
        assert!(!gpio.read(PinName::new(1, 4)));
    }

    #[test]
    fn rejects_missing_pins() {
        let mut mem = vec![0u32; WORDS];
        let mut gpio = controller(&mut mem);
        assert_eq!(
            gpio.init(PinName::NC, Direction::Input, DriveMode::Analog, false),
            Err(HwStatus::GPIO_BAD_PIN)
        );
        assert_eq!(
            gpio.configure(PinName::new(15, 0), Direction::Input, DriveMode::Analog),
            Err(HwStatus::GPIO_BAD_PIN)
        );
    }
}
