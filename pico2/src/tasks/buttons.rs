//! Button polling and screen navigation.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::Sender;
use embassy_time::{Instant, Timer};
use sensor_monitor_common::Screen;
use sensor_monitor_common::button::DebounceGate;
use sensor_monitor_common::config::BUTTON_PERIOD_MS;
use sensor_monitor_common::input::process_buttons;

/// Polls both buttons every [`BUTTON_PERIOD_MS`] and publishes screen changes.
///
/// Runs on the interrupt executor, so its arguments have to be `Send`; that is why it
/// takes the typed watch sender rather than a `DynSender`.
#[embassy_executor::task]
pub async fn button_task(
    previous: Input<'static>,
    next: Input<'static>,
    sender: Sender<'static, CriticalSectionRawMutex, Screen, 1>,
) {
    info!("Button task started");

    let mut gate = DebounceGate::new();
    let mut screen = Screen::default();
    sender.send(screen);

    loop {
        let now_ms = Instant::now().as_millis();
        let result = process_buttons(&mut gate, now_ms, previous.is_low(), next.is_low(), screen);

        if result.previous_accepted {
            info!("Button: previous");
        }
        if result.next_accepted {
            info!("Button: next");
        }

        if let Some(new_screen) = result.new_screen {
            screen = new_screen;
            info!("Screen {} ({})", screen.index(), screen.label());
            sender.send(screen);
        }

        Timer::after_millis(BUTTON_PERIOD_MS).await;
    }
}
