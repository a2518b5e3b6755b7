//! # Quickstart Example
//!
//! Minimal example demonstrating the bridge on a desktop:
//! - Validate a configuration
//! - Sample simulated analog channels
//! - Encode and transmit a few cycles on an in-memory bus that fails now and then
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use can_daq_bridge::infra::codec::packing::SlotReader;
use can_daq_bridge::protocol::{
    acquisition::{config::BridgeConfig, AnalogInput, Sampler},
    bridge::Bridge,
    transport::{
        can_frame::CanFrame, can_id::ArbitrationId, traits::bridge_timer::BridgeTimer,
        traits::can_bus::CanBus,
    },
};

/// Triangle wave standing in for a potentiometer or pressure transducer.
struct SimulatedSensor {
    level: f32,
    step: f32,
}

impl AnalogInput for SimulatedSensor {
    fn read_normalized(&mut self) -> f32 {
        let value = self.level;
        self.level += self.step;
        if !(0.0..=1.0).contains(&self.level) {
            self.step = -self.step;
            self.level = self.level.clamp(0.0, 1.0);
        }
        value
    }
}

/// Prints frames instead of driving a controller; every seventh write fails.
struct ConsoleBus {
    writes: usize,
}

impl CanBus for ConsoleBus {
    type Error = &'static str;

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.writes % 7 == 0 {
            println!("   id {:4}  <bus busy>", frame.id.raw());
            return Err("bus busy");
        }
        let reader = SlotReader::new(frame.payload());
        print!("   id {:4}  ", frame.id.raw());
        for byte in frame.payload() {
            print!("{:02X} ", byte);
        }
        print!(" ->");
        for slot in 0..reader.slot_count() {
            if let Ok(value) = reader.read_u16_be(slot) {
                print!(" {:4}", value);
            }
        }
        println!();
        Ok(())
    }

    async fn reset(&mut self) -> Result<(), Self::Error> {
        println!("   can resetting");
        Ok(())
    }
}

struct TokioTimer;

impl BridgeTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        tokio::time::sleep(std::time::Duration::from_millis(millis as u64)).await;
    }
}

const ID_TABLE: [ArbitrationId; 2] = [
    ArbitrationId::standard_const(1234),
    ArbitrationId::standard_const(1235),
];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== can-daq-bridge Quickstart ===\n");

    // ======================================================================
    // 1. Validate the configuration
    // ======================================================================
    println!("1. Configuration");

    let config = match BridgeConfig::builder(6, &ID_TABLE).cadence_ms(10).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("   Invalid configuration: {}", e);
            return;
        }
    };
    println!(
        "   {} channels -> {} frames per cycle @ {} bit/s, every {} ms\n",
        config.channel_count(),
        config.frame_count(),
        config.bitrate(),
        config.cadence_ms()
    );

    // Nine channels would need a third ID.
    if let Err(e) = BridgeConfig::builder(9, &ID_TABLE).build() {
        println!("   Rejected at startup: {}\n", e);
    }

    // ======================================================================
    // 2. Run a few cycles
    // ======================================================================
    println!("2. Transmitting");

    let sampler = Sampler::new([0.0f32, 0.2, 0.4, 0.6, 0.8, 1.0].map(|level| SimulatedSensor {
        level,
        step: 0.05,
    }));
    let mut bridge = match Bridge::<_, _, _, 6, 2>::new(
        &config,
        sampler,
        ConsoleBus { writes: 0 },
        TokioTimer,
    ) {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("   {}", e);
            return;
        }
    };

    for cycle in 0..5 {
        println!("  cycle {}", cycle);
        let report = bridge.run_cycle().await;
        println!(
            "   sent {}/{} (dropped {})\n",
            report.sent, report.frames, report.dropped
        );
        TokioTimer.delay_ms(config.cadence_ms()).await;
    }
}
