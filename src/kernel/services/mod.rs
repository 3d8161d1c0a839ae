pub mod adapters;
pub mod bus;
pub mod ports;

pub use adapters::{AsyncRuntime, LocalFileStore, SettingsStore};
pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender};
