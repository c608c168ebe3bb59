pub mod irq;
pub mod irq_spinlock;
pub use irq::IrqControl;
pub use irq_spinlock::IrqSpinLock;
