//! Input handling for button events.
//!
//! Converts the sampled button levels into screen navigation.

use crate::button::DebounceGate;
use crate::pages::Screen;

/// Result of processing button inputs for a single poll.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputResult {
    /// New screen if any press was accepted.
    pub new_screen: Option<Screen>,
    /// Whether the previous button press was accepted.
    pub previous_accepted: bool,
    /// Whether the next button press was accepted.
    pub next_accepted: bool,
}

/// Process button inputs and return the resulting navigation.
///
/// # Arguments
///
/// * `gate` - Shared debounce cooldown
/// * `now_ms` - Milliseconds since boot
/// * `previous_pressed` - Whether the previous button is held (pin low)
/// * `next_pressed` - Whether the next button is held (pin low)
/// * `current` - Screen currently selected
///
/// The cooldown is checked once per poll. If it is open, "previous" is applied first
/// and then "next", each against the result of the step before; pressing both in the
/// same poll therefore applies both and lands back on `current`.
pub fn process_buttons(
    gate: &mut DebounceGate,
    now_ms: u64,
    previous_pressed: bool,
    next_pressed: bool,
    current: Screen,
) -> InputResult {
    let mut result = InputResult::default();

    if !gate.is_open(now_ms) {
        return result;
    }

    let mut screen = current;

    if previous_pressed {
        screen = screen.previous();
        gate.accept(now_ms);
        result.previous_accepted = true;
    }

    if next_pressed {
        screen = screen.next();
        gate.accept(now_ms);
        result.next_accepted = true;
    }

    if result.previous_accepted || result.next_accepted {
        result.new_screen = Some(screen);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BUTTON_PERIOD_MS, DEBOUNCE_MS};

    #[test]
    fn test_no_press_no_change() {
        let mut gate = DebounceGate::new();
        let result = process_buttons(&mut gate, 1000, false, false, Screen::Sound);
        assert_eq!(result, InputResult::default());
        assert_eq!(gate.last_accepted_ms(), 0);
    }

    #[test]
    fn test_next_and_previous() {
        let mut gate = DebounceGate::new();
        let result = process_buttons(&mut gate, 1000, false, true, Screen::Climate);
        assert_eq!(result.new_screen, Some(Screen::Sound));
        assert!(result.next_accepted);

        let result = process_buttons(&mut gate, 2000, true, false, Screen::Climate);
        assert_eq!(result.new_screen, Some(Screen::Light));
        assert!(result.previous_accepted);
    }

    #[test]
    fn test_presses_ignored_during_boot_cooldown() {
        let mut gate = DebounceGate::new();
        let result = process_buttons(&mut gate, 150, false, true, Screen::Climate);
        assert_eq!(result.new_screen, None);
    }

    #[test]
    fn test_press_within_cooldown_ignored() {
        let mut gate = DebounceGate::new();
        process_buttons(&mut gate, 1000, false, true, Screen::Climate);

        let result = process_buttons(&mut gate, 1000 + DEBOUNCE_MS, false, true, Screen::Sound);
        assert_eq!(result.new_screen, None);

        let result = process_buttons(&mut gate, 1001 + DEBOUNCE_MS, false, true, Screen::Sound);
        assert_eq!(result.new_screen, Some(Screen::Light));
    }

    #[test]
    fn test_held_button_repeats_every_fifth_poll() {
        let mut gate = DebounceGate::new();
        let mut screen = Screen::Climate;
        let mut accepted_at = [0u64; 3];
        let mut accepted = 0;

        // Poll at the button cadence with "next" held from t = 1000
        let mut now = 1000;
        while accepted < accepted_at.len() {
            if let Some(new_screen) = process_buttons(&mut gate, now, false, true, screen).new_screen {
                screen = new_screen;
                accepted_at[accepted] = now;
                accepted += 1;
            }
            now += BUTTON_PERIOD_MS;
        }

        assert_eq!(accepted_at, [1000, 1250, 1500]);
        assert_eq!(screen, Screen::Climate);
    }

    // Both buttons in one poll apply previous then next. Whether "next" should win
    // outright is undecided; this pins the current behaviour.
    #[test]
    fn test_simultaneous_press_applies_both_in_order() {
        for current in [Screen::Climate, Screen::Sound, Screen::Light] {
            let mut gate = DebounceGate::new();
            let result = process_buttons(&mut gate, 1000, true, true, current);
            assert!(result.previous_accepted);
            assert!(result.next_accepted);
            assert_eq!(result.new_screen, Some(current));
            assert_eq!(gate.last_accepted_ms(), 1000);
        }
    }
}
