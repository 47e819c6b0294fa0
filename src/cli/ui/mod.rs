pub mod navigation;
pub mod wheel;

use dialoguer::theme::ColorfulTheme;
use once_cell::sync::Lazy;

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

/// Shared prompt theme for every dialoguer interaction.
pub fn theme() -> &'static ColorfulTheme {
    &THEME
}
