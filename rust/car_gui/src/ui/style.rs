use iced::theme::{Palette, Theme};
use iced::widget::button;
use iced::{Background, Border, Color};

// #D81B60, #AD1457, #FFF0F5
pub const PINK: Color = Color {
    r: 216. / 255.,
    g: 27. / 255.,
    b: 96. / 255.,
    a: 1.,
};
pub const DEEP_PINK: Color = Color {
    r: 173. / 255.,
    g: 20. / 255.,
    b: 87. / 255.,
    a: 1.,
};
pub const BLUSH: Color = Color {
    r: 1.,
    g: 240. / 255.,
    b: 245. / 255.,
    a: 1.,
};

/// Window background, #FFE4F7.
pub const BACKGROUND: Color = Color {
    r: 1.,
    g: 228. / 255.,
    b: 247. / 255.,
    a: 1.,
};

/// Button face, #F8BBD0.
pub const PETAL: Color = Color {
    r: 248. / 255.,
    g: 187. / 255.,
    b: 208. / 255.,
    a: 1.,
};

pub fn car_theme() -> Theme {
    Theme::custom(
        String::from("Car"),
        Palette {
            background: BACKGROUND,
            text: PINK,
            primary: PETAL,
            ..Palette::LIGHT
        },
    )
}

/// Pale pink buttons that turn deep pink under the cursor.
pub struct PinkButton;

impl PinkButton {
    fn filled(background: Color, text_color: Color) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: PINK,
                width: 1.,
                radius: 6.0.into(),
            },
            ..button::Appearance::default()
        }
    }
}

impl button::StyleSheet for PinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        Self::filled(PETAL, Color::WHITE)
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        Self::filled(PINK, Color::WHITE)
    }

    fn pressed(&self, _style: &Self::Style) -> button::Appearance {
        Self::filled(DEEP_PINK, Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::button::StyleSheet;

    #[test]
    fn theme_paints_the_window_pink() {
        let palette = car_theme().palette();
        assert_eq!(palette.background, BACKGROUND);
        assert_eq!(palette.text, PINK);
        assert_eq!(palette.primary, PETAL);
    }

    #[test]
    fn buttons_darken_when_hovered() {
        let theme = car_theme();
        let active = PinkButton.active(&theme);
        assert_eq!(active.background, Some(Background::Color(PETAL)));
        assert_eq!(active.text_color, Color::WHITE);
        assert_eq!(active.border.color, PINK);

        let hovered = PinkButton.hovered(&theme);
        assert_eq!(hovered.background, Some(Background::Color(PINK)));
    }
}
