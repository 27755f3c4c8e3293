//! Text styles for the monochrome screens.
//!
//! Styles are `const` so they live in flash and are shared by every frame. Text is
//! drawn with the default alphabetic baseline, so the `y` of each layout position is
//! the baseline of the line.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_4X6,
    },
    pixelcolor::BinaryColor,
};
use profont::PROFONT_7_POINT;

/// Small font for the header label and the footer hints.
pub const LABEL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_4X6, BinaryColor::On);

/// Font for the measurement lines.
pub const VALUE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On);
