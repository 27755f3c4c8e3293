//! Screen layouts for the 128x64 display.
//!
//! Every screen shares the same frame: a header label naming the sensor, two lines of
//! values, and `<PREV` / `NEXT>` hints along the bottom edge. The renderer clears the
//! buffer before calling [`draw_screen`], so these functions only draw.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::climate::ClimateState;
use crate::light::LightState;
use crate::pages::Screen;
use crate::sound::SoundState;
use crate::styles::{LABEL_STYLE, VALUE_STYLE};

// =============================================================================
// Layout
// =============================================================================

const HEADER_POS: Point = Point::new(1, 30);
const FOOTER_PREV_POS: Point = Point::new(1, 64);
const FOOTER_NEXT_POS: Point = Point::new(90, 64);

const CLIMATE_TEMP_POS: Point = Point::new(1, 42);
const CLIMATE_HUMIDITY_POS: Point = Point::new(64, 42);
const CLIMATE_STATUS_POS: Point = Point::new(1, 54);

const SOUND_LEVEL_POS: Point = Point::new(1, 42);
const SOUND_DB_POS: Point = Point::new(70, 42);
const SOUND_STATUS_POS: Point = Point::new(1, 54);
const SOUND_MAX_POS: Point = Point::new(70, 54);

const LIGHT_MIN_POS: Point = Point::new(1, 42);
const LIGHT_MAX_POS: Point = Point::new(75, 42);
const LIGHT_STATUS_POS: Point = Point::new(1, 54);
const LIGHT_PERCENT_POS: Point = Point::new(75, 54);

/// Header label for a screen.
pub const fn header_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Climate => "SENSOR: TMPwHMDT",
        Screen::Sound => "SENSOR: SOUND",
        Screen::Light => "SENSOR: LIGHT",
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the screen selected by `screen` from the latest published states.
pub fn draw_screen<D>(
    display: &mut D,
    screen: Screen,
    climate: &ClimateState,
    sound: &SoundState,
    light: &LightState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_frame(display, screen);

    match screen {
        Screen::Climate => draw_climate_screen(display, climate),
        Screen::Sound => draw_sound_screen(display, sound),
        Screen::Light => draw_light_screen(display, light),
    }
}

/// Header label and navigation hints.
pub fn draw_frame<D>(
    display: &mut D,
    screen: Screen,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::new(header_label(screen), HEADER_POS, LABEL_STYLE).draw(display).ok();
    Text::new("<PREV", FOOTER_PREV_POS, LABEL_STYLE).draw(display).ok();
    Text::new("NEXT>", FOOTER_NEXT_POS, LABEL_STYLE).draw(display).ok();
}

pub fn draw_climate_screen<D>(
    display: &mut D,
    climate: &ClimateState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<24> = String::new();

    match climate.temperature() {
        Some(t) => write!(line, "T: {t:.1}C").ok(),
        None => write!(line, "T: N/A").ok(),
    };
    Text::new(&line, CLIMATE_TEMP_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    match climate.humidity() {
        Some(h) => write!(line, "H: {h:.1}%").ok(),
        None => write!(line, "H: N/A").ok(),
    };
    Text::new(&line, CLIMATE_HUMIDITY_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    match climate.condition() {
        Some(condition) => write!(line, "Stat: {}", condition.label()).ok(),
        None => write!(line, "Sts: N/A").ok(),
    };
    Text::new(&line, CLIMATE_STATUS_POS, VALUE_STYLE).draw(display).ok();
}

pub fn draw_sound_screen<D>(
    display: &mut D,
    sound: &SoundState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<24> = String::new();

    write!(line, "Lvl: {}", sound.level()).ok();
    Text::new(&line, SOUND_LEVEL_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "dB: {}", sound.decibels()).ok();
    Text::new(&line, SOUND_DB_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "Sts: {}", sound.descriptor().label()).ok();
    Text::new(&line, SOUND_STATUS_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "Max: {}", sound.max_level()).ok();
    Text::new(&line, SOUND_MAX_POS, VALUE_STYLE).draw(display).ok();
}

pub fn draw_light_screen<D>(
    display: &mut D,
    light: &LightState,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<24> = String::new();

    write!(line, "Min: {}", light.min_value()).ok();
    Text::new(&line, LIGHT_MIN_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "Max: {}", light.max_value()).ok();
    Text::new(&line, LIGHT_MAX_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "Stat: {}", light.descriptor().label()).ok();
    Text::new(&line, LIGHT_STATUS_POS, VALUE_STYLE).draw(display).ok();

    line.clear();
    write!(line, "Val: {}%", light.percentage()).ok();
    Text::new(&line, LIGHT_PERCENT_POS, VALUE_STYLE).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::MonoTextStyle;

    use super::*;
    use crate::framebuffer::Framebuffer;

    fn render(screen: Screen) -> Framebuffer {
        let mut climate = ClimateState::new();
        climate.apply(23.5, 45.0);

        let mut sound = SoundState::new();
        sound.record(1000);

        let mut light = LightState::new(100);
        light.record(2048);

        let mut fb = Framebuffer::new();
        draw_screen(&mut fb, screen, &climate, &sound, &light);
        fb
    }

    /// True if every pixel of `text` drawn alone at `pos` is lit in `fb`.
    fn contains_text(
        fb: &Framebuffer,
        text: &str,
        pos: Point,
        style: MonoTextStyle<'static, BinaryColor>,
    ) -> bool {
        let mut expected = Framebuffer::new();
        Text::new(text, pos, style).draw(&mut expected).ok();
        assert!(expected.lit_pixels() > 0, "{text:?} drew nothing");

        (0..64).all(|y| (0..128).all(|x| !expected.pixel(x, y) || fb.pixel(x, y)))
    }

    #[test]
    fn test_frame_on_every_screen() {
        for screen in [Screen::Climate, Screen::Sound, Screen::Light] {
            let fb = render(screen);
            assert!(contains_text(&fb, header_label(screen), HEADER_POS, LABEL_STYLE));
            assert!(contains_text(&fb, "<PREV", FOOTER_PREV_POS, LABEL_STYLE));
            assert!(contains_text(&fb, "NEXT>", FOOTER_NEXT_POS, LABEL_STYLE));
        }
    }

    #[test]
    fn test_climate_screen() {
        let fb = render(Screen::Climate);
        assert!(contains_text(&fb, "T: 23.5C", CLIMATE_TEMP_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "H: 45.0%", CLIMATE_HUMIDITY_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Stat: Cool", CLIMATE_STATUS_POS, VALUE_STYLE));
    }

    #[test]
    fn test_climate_screen_without_reading() {
        let mut fb = Framebuffer::new();
        draw_climate_screen(&mut fb, &ClimateState::new());
        assert!(contains_text(&fb, "T: N/A", CLIMATE_TEMP_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "H: N/A", CLIMATE_HUMIDITY_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Sts: N/A", CLIMATE_STATUS_POS, VALUE_STYLE));
    }

    #[test]
    fn test_sound_screen() {
        let fb = render(Screen::Sound);
        assert!(contains_text(&fb, "Lvl: 1000", SOUND_LEVEL_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "dB: 60", SOUND_DB_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Sts: Loud", SOUND_STATUS_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Max: 1000", SOUND_MAX_POS, VALUE_STYLE));
    }

    #[test]
    fn test_light_screen() {
        let fb = render(Screen::Light);
        assert!(contains_text(&fb, "Min: 2048", LIGHT_MIN_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Max: 2048", LIGHT_MAX_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Stat: Bright", LIGHT_STATUS_POS, VALUE_STYLE));
        assert!(contains_text(&fb, "Val: 50%", LIGHT_PERCENT_POS, VALUE_STYLE));
    }

    #[test]
    fn test_screens_differ() {
        let climate = render(Screen::Climate);
        let sound = render(Screen::Sound);
        assert!(!contains_text(&sound, "T: 23.5C", CLIMATE_TEMP_POS, VALUE_STYLE));
        assert!(!contains_text(&climate, "Lvl: 1000", SOUND_LEVEL_POS, VALUE_STYLE));
    }
}
