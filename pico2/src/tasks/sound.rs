//! Microphone sampling.

use defmt::{Debug2Format, debug, info, warn};
use embassy_futures::yield_now;
use embassy_rp::adc::Channel;
use embassy_sync::watch::DynSender;
use embassy_time::{Duration, Instant, Timer};
use sensor_monitor_common::config::{SOUND_PAUSE_MS, SOUND_WINDOW_MS};
use sensor_monitor_common::sound::SoundWindow;
use sensor_monitor_common::SoundState;

use crate::shared::SharedAdc;

/// Samples the microphone as fast as the shared ADC allows for [`SOUND_WINDOW_MS`],
/// publishes the window's peak-to-peak, then pauses for [`SOUND_PAUSE_MS`].
#[embassy_executor::task]
pub async fn sound_task(
    adc: &'static SharedAdc,
    mut microphone: Channel<'static>,
    sender: DynSender<'static, SoundState>,
) {
    info!("Sound task started");

    let mut state = SoundState::new();
    let window_length = Duration::from_millis(SOUND_WINDOW_MS);

    loop {
        let mut window = SoundWindow::new();
        let window_start = Instant::now();

        while window_start.elapsed() < window_length {
            let sample = adc.lock().await.read(&mut microphone).await;
            match sample {
                Ok(sample) => window.record(sample),
                Err(e) => warn!("Microphone ADC read failed: {}", Debug2Format(&e)),
            }
            // Give the light task a turn at the ADC
            yield_now().await;
        }

        state.record(window.peak_to_peak());

        debug!(
            "Sound: p2p={} dB={} ({}) max={} avg={} samples={} clipped={}",
            state.level(),
            state.decibels(),
            state.descriptor().label(),
            state.max_level(),
            state.avg_level(),
            window.accepted(),
            window.clipped()
        );

        sender.send(state);
        Timer::after_millis(SOUND_PAUSE_MS).await;
    }
}
