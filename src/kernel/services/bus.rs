use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::kernel::Action;

/// Single channel carrying completion actions back to the control thread.
/// Everything received here is dispatched into the store by one consumer,
/// which is what serializes all state mutation.
#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<Action>,
}

pub struct KernelBusReceiver {
    rx: Receiver<Action>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, action: Action) -> Result<(), mpsc::SendError<Action>> {
        self.tx.send(action)
    }
}

impl KernelBusReceiver {
    pub fn try_recv(&mut self) -> Result<Action, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Action, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
