//! Ambient light sampling.

use defmt::{Debug2Format, Display2Format, debug, info, warn};
use embassy_rp::adc::Channel;
use embassy_sync::watch::DynSender;
use embassy_time::Timer;
use sensor_monitor_common::LightState;
use sensor_monitor_common::config::LIGHT_PERIOD_MS;

use crate::shared::SharedAdc;

/// Reads the light sensor every [`LIGHT_PERIOD_MS`] and compares it with the baseline
/// the state was created with.
#[embassy_executor::task]
pub async fn light_task(
    adc: &'static SharedAdc,
    mut sensor: Channel<'static>,
    mut state: LightState,
    sender: DynSender<'static, LightState>,
) {
    info!("Light task started (baseline {})", state.baseline());

    // Publish the baseline before the first reading
    sender.send(state);

    loop {
        let reading = adc.lock().await.read(&mut sensor).await;
        match reading {
            Ok(raw) => {
                state.record(raw);
                debug!(
                    "Light: raw={} ({}%, {}) min={} max={} avg={} {}",
                    raw,
                    state.percentage(),
                    state.descriptor().label(),
                    state.min_value(),
                    state.max_value(),
                    state.avg_value(),
                    Display2Format(&state.change())
                );
                sender.send(state);
            }
            Err(e) => warn!("Light ADC read failed: {}", Debug2Format(&e)),
        }

        Timer::after_millis(LIGHT_PERIOD_MS).await;
    }
}
