/// Test doubles to simulate the CAN bus, the cadence timer and the analog
/// channels during integration tests.
use can_daq_bridge::protocol::{
    acquisition::AnalogInput,
    transport::{
        can_frame::CanFrame,
        traits::{bridge_timer::BridgeTimer, can_bus::CanBus},
    },
};
use std::collections::HashSet;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(dead_code)]
/// Everything the bridge does to the bus, in order.
pub enum BusEvent {
    /// Write accepted.
    Sent(CanFrame),
    /// Write rejected (bus busy/error).
    Rejected(CanFrame),
    /// Controller reset requested.
    Reset,
}

#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior, with scripted
/// write failures.
pub struct MockCanBus {
    tx: mpsc::UnboundedSender<BusEvent>,
    failing_attempts: HashSet<usize>,
    attempts: usize,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct the bus and the receiver observing its traffic (DUT → host).
    pub fn create() -> (Self, BusMonitor) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bus = Self {
            tx,
            failing_attempts: HashSet::new(),
            attempts: 0,
        };
        (bus, BusMonitor { rx })
    }

    /// Make the given zero-based write attempts fail (counted across cycles).
    pub fn failing_on(mut self, attempts: &[usize]) -> Self {
        self.failing_attempts.extend(attempts.iter().copied());
        self
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.failing_attempts.contains(&attempt) {
            let _ = self.tx.send(BusEvent::Rejected(frame.clone()));
            return Err(());
        }
        self.tx.send(BusEvent::Sent(frame.clone())).map_err(|_| ())?;
        Ok(())
    }

    async fn reset(&mut self) -> Result<(), Self::Error> {
        self.tx.send(BusEvent::Reset).map_err(|_| ())
    }
}

#[allow(dead_code)]
/// Host side of the mock bus.
pub struct BusMonitor {
    rx: mpsc::UnboundedReceiver<BusEvent>,
}

#[allow(dead_code)]
impl BusMonitor {
    /// Collect every event emitted so far without waiting.
    pub fn drain(&mut self) -> Vec<BusEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Frames accepted by the bus so far.
    pub fn sent_frames(&mut self) -> Vec<CanFrame> {
        self.drain()
            .into_iter()
            .filter_map(|event| match event {
                BusEvent::Sent(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` that also reports every requested delay.
pub struct MockTimer {
    tx: mpsc::UnboundedSender<u32>,
}

#[allow(dead_code)]
impl MockTimer {
    pub fn create() -> (Self, mpsc::UnboundedReceiver<u32>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl BridgeTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        let _ = self.tx.send(millis);
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[derive(Clone, Copy)]
#[allow(dead_code)]
/// Analog channel stuck at a constant normalized level.
pub struct FixedInput(pub f32);

impl AnalogInput for FixedInput {
    fn read_normalized(&mut self) -> f32 {
        self.0
    }
}
