//! Screen navigation for the three sensor screens.
//!
//! The previous/next buttons step through the screens in a ring.
//!
//! # Screens
//!
//! - [`Screen::Climate`] (index 0): Temperature, humidity and comfort condition
//! - [`Screen::Sound`] (index 1): Peak-to-peak level, dB estimate, max and loudness
//! - [`Screen::Light`] (index 2): Min/max raw value, percentage and brightness

use crate::config::SCREEN_COUNT;

/// Screens selectable with the buttons.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    #[default]
    Climate,
    Sound,
    Light,
}

impl Screen {
    /// Screen at `index`, wrapping modulo the screen count.
    pub const fn from_index(index: u8) -> Self {
        match index % SCREEN_COUNT {
            0 => Self::Climate,
            1 => Self::Sound,
            _ => Self::Light,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 { self as u8 }

    /// Following screen: `(i + 1) mod 3`.
    #[inline]
    pub const fn next(self) -> Self { Self::from_index(self.index() + 1) }

    /// Preceding screen: `(i - 1 + 3) mod 3`.
    #[inline]
    pub const fn previous(self) -> Self { Self::from_index(self.index() + SCREEN_COUNT - 1) }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Climate => "Climate",
            Self::Sound => "Sound",
            Self::Light => "Light",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
