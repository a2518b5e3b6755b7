//! Transmit loop: sample → encode → transmit, forever, at the configured cadence.
//!
//! Delivery is best effort. A frame whose write fails triggers one controller
//! reset and is then dropped for the cycle; the next frame is still attempted.
//! Transmit failures are only traced, they never stop the loop.
//!
//! The loop runs as a single task and awaits each step in turn: frames of a
//! cycle go out in ascending index order and cycle `n + 1` starts only after
//! cycle `n` has been transmitted and the cadence delay has elapsed.
use core::fmt::Debug;

use crate::error::ConfigError;
use crate::protocol::acquisition::config::BridgeConfig;
use crate::protocol::acquisition::{AnalogInput, Sampler};
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::frame_encoder::encode_into;
use crate::protocol::transport::traits::bridge_timer::BridgeTimer;
use crate::protocol::transport::traits::can_bus::CanBus;

/// Outcome of one cycle, as observed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Frames produced by the encoder.
    pub frames: usize,
    /// Frames accepted by the bus.
    pub sent: usize,
    /// Frames lost after a failed write (each one caused a reset).
    pub dropped: usize,
    /// Resets that themselves reported an error.
    pub resets_failed: usize,
}

impl CycleReport {
    /// True when every frame of the cycle reached the bus.
    pub fn is_clean(&self) -> bool {
        self.dropped == 0
    }
}

/// Bridge between `N` analog channels and the CAN bus.
///
/// `F` is the capacity of the per-cycle frame buffer and must be at least
/// `ceil(N / 4)`; [`Bridge::new`] refuses smaller values.
pub struct Bridge<'a, A, C, T, const N: usize, const F: usize>
where
    A: AnalogInput,
    C: CanBus,
    C::Error: Debug,
    T: BridgeTimer,
{
    config: &'a BridgeConfig<'a>,
    sampler: Sampler<A, N>,
    can_bus: C,
    timer: T,
}

impl<'a, A, C, T, const N: usize, const F: usize> Bridge<'a, A, C, T, N, F>
where
    A: AnalogInput,
    C: CanBus,
    C::Error: Debug,
    T: BridgeTimer,
{
    /// Assemble the bridge after checking that the sampler and the frame buffer
    /// match the configuration. Call before the loop starts; errors are fatal.
    pub fn new(
        config: &'a BridgeConfig<'a>,
        sampler: Sampler<A, N>,
        can_bus: C,
        timer: T,
    ) -> Result<Self, ConfigError> {
        if config.channel_count() != N {
            return Err(ConfigError::ChannelCountMismatch {
                configured: config.channel_count(),
                sampler: N,
            });
        }
        if F < config.frame_count() {
            return Err(ConfigError::FrameCapacityTooSmall {
                required: config.frame_count(),
                capacity: F,
            });
        }

        #[cfg(feature = "defmt")]
        if config.verbose() {
            defmt::info!("Start");
        }

        Ok(Self {
            config,
            sampler,
            can_bus,
            timer,
        })
    }

    /// Configuration the bridge was built with.
    pub fn config(&self) -> &BridgeConfig<'a> {
        self.config
    }

    /// Run one sample → encode → transmit pass. Does not wait for the cadence.
    pub async fn run_cycle(&mut self) -> CycleReport {
        // Step 1: one reading per channel, in channel order.
        let readings = self.sampler.sample_all();

        #[cfg(feature = "defmt")]
        if self.config.verbose() {
            defmt::info!("Sending: {}", readings.as_slice());
        }

        // Step 2: pack into at most F frames (F >= ceil(N / 4) by construction).
        let frames: heapless::Vec<CanFrame, F> = encode_into(&readings, self.config.id_table());

        // Step 3: transmit in ascending order, resetting the controller on failure.
        let mut report = CycleReport {
            frames: frames.len(),
            ..CycleReport::default()
        };
        for frame in frames.iter() {
            self.transmit(frame, &mut report).await;
        }
        report
    }

    /// Write one frame. On failure: reset once, drop the frame, never retry.
    async fn transmit(&mut self, frame: &CanFrame, report: &mut CycleReport) {
        match self.can_bus.send(frame).await {
            Ok(()) => report.sent += 1,
            Err(_err) => {
                report.dropped += 1;

                #[cfg(feature = "defmt")]
                if self.config.verbose() {
                    defmt::warn!(
                        "Write failed for frame {}: {}",
                        frame.id,
                        defmt::Debug2Format(&_err)
                    );
                }

                if let Err(_reset_err) = self.can_bus.reset().await {
                    report.resets_failed += 1;

                    #[cfg(feature = "defmt")]
                    if self.config.verbose() {
                        defmt::error!("Reset failed: {}", defmt::Debug2Format(&_reset_err));
                    }
                }

                #[cfg(feature = "defmt")]
                if self.config.verbose() {
                    defmt::info!("can resetting");
                }
            }
        }
    }

    /// Drive the bridge for the lifetime of the process.
    ///
    /// Never returns: transmit failures are absorbed by the recovery policy and
    /// there is no cancellation. A stalled driver or timer stalls the loop.
    pub async fn run(&mut self) {
        loop {
            let _report = self.run_cycle().await;

            #[cfg(feature = "defmt")]
            if !_report.is_clean() && self.config.verbose() {
                defmt::trace!("Cycle report: {}", _report);
            }

            self.timer.delay_ms(self.config.cadence_ms()).await;
        }
    }

    /// Give the collaborators back (e.g. to re-initialize the controller).
    pub fn into_inner(self) -> (Sampler<A, N>, C, T) {
        (self.sampler, self.can_bus, self.timer)
    }
}
