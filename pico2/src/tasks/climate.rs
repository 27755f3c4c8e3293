//! Temperature/humidity sampling.

use defmt::{info, warn};
use embassy_sync::watch::DynSender;
use embassy_time::Timer;
use sensor_monitor_common::ClimateState;
use sensor_monitor_common::config::CLIMATE_PERIOD_MS;

use crate::dht11::Dht11;

/// Reads the DHT11 every [`CLIMATE_PERIOD_MS`] and publishes the accepted values.
///
/// A failed read counts as NaN for both quantities, which validation rejects, so the
/// screen keeps showing the last good reading.
#[embassy_executor::task]
pub async fn climate_task(
    mut sensor: Dht11<'static>,
    sender: DynSender<'static, ClimateState>,
) {
    info!("Climate task started");

    let mut state = ClimateState::new();

    loop {
        let (temperature, humidity) = match sensor.read().await {
            Ok(reading) => (reading.temperature, reading.humidity),
            Err(e) => {
                warn!("DHT11 read failed: {}", e);
                (f32::NAN, f32::NAN)
            }
        };

        let accepted = state.apply(temperature, humidity);
        if !accepted.temperature && !temperature.is_nan() {
            warn!("Temperature out of range: {} C", temperature);
        }
        if !accepted.humidity && !humidity.is_nan() {
            warn!("Humidity out of range: {} %", humidity);
        }

        info!(
            "Climate: T={} C, H={} %, condition={}",
            state.temperature(),
            state.humidity(),
            state.condition().map(|c| c.label())
        );

        sender.send(state);
        Timer::after_millis(CLIMATE_PERIOD_MS).await;
    }
}
