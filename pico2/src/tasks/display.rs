//! Screen rendering.

use defmt::{Debug2Format, error, info, warn};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::watch::DynReceiver;
use embassy_time::Timer;
use sensor_monitor_common::config::RENDER_PERIOD_MS;
use sensor_monitor_common::screens::draw_screen;
use sensor_monitor_common::{ClimateState, Framebuffer, LightState, Screen, SoundState};

use crate::sh1106::Sh1106;

pub type Display = Sh1106<I2c<'static, I2C0, Async>>;

/// Receivers for everything the renderer shows.
pub struct Inputs {
    pub climate: DynReceiver<'static, ClimateState>,
    pub sound: DynReceiver<'static, SoundState>,
    pub light: DynReceiver<'static, LightState>,
    pub screen: DynReceiver<'static, Screen>,
}

/// Initializes the display, then redraws the selected screen every [`RENDER_PERIOD_MS`].
///
/// Each frame uses the latest published snapshot of every block; blocks that have not
/// been published yet render from their initial state.
#[embassy_executor::task]
pub async fn display_task(
    mut display: Display,
    mut inputs: Inputs,
) {
    match display.init().await {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {}", Debug2Format(&e)),
    }

    let mut framebuffer = Framebuffer::new();
    let mut climate = ClimateState::new();
    let mut sound = SoundState::new();
    let mut light = LightState::default();
    let mut screen = Screen::default();

    loop {
        climate = inputs.climate.try_get().unwrap_or(climate);
        sound = inputs.sound.try_get().unwrap_or(sound);
        light = inputs.light.try_get().unwrap_or(light);
        screen = inputs.screen.try_get().unwrap_or(screen);

        framebuffer.clear_buffer();
        draw_screen(&mut framebuffer, screen, &climate, &sound, &light);

        if let Err(e) = display.flush(&framebuffer).await {
            warn!("Display flush failed: {}", Debug2Format(&e));
        }

        Timer::after_millis(RENDER_PERIOD_MS).await;
    }
}
