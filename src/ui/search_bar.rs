//! Search bar widget: query input plus Search button

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;

/// Search bar component.
///
/// `on_submit` is `None` while submitting is not allowed; the button then
/// renders disabled and Enter in the input does nothing.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let mut input = text_input("Enter Pokémon name or ID", value)
        .on_input(on_input)
        .padding(Padding::new(12.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });
    if let Some(message) = on_submit.clone() {
        input = input.on_submit(message);
    }

    let search = button(text("Search").size(16))
        .padding(Padding::from([10.0, 18.0]))
        .on_press_maybe(on_submit)
        .style(|_theme, status| {
            let background = match status {
                button::Status::Disabled => DarkTheme::PRIMARY_DISABLED,
                _ => DarkTheme::PRIMARY,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: DarkTheme::TEXT,
                border: Border::default().rounded(8),
                ..Default::default()
            }
        });

    container(
        row![input, search]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([6.0, 8.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    })
    .into()
}
