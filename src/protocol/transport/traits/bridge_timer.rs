//! Asynchronous timer abstraction providing the inter-cycle cadence delay.

/// Timer trait abstraction.
pub trait BridgeTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`BridgeTimer`] backed by the `embassy-time` driver of the target.
#[cfg(feature = "embassy-timer")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy-timer")]
impl BridgeTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(millis as u64)).await;
    }
}
