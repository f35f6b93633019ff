//! Result card, error banner and progress indicator

use iced::widget::{column, container, image, row, text, Space};
use iced::{font, Background, Border, Element, Font, Length, Padding};

use super::theme::DarkTheme;
use crate::backend::{Pokemon, Stat};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const SPRITE_HEIGHT: f32 = 200.0;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Upper-case the first letter of every whitespace-separated word.
pub fn display_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

pub fn stat_line(stat: &Stat) -> String {
    format!("{}: {}", stat.name, stat.base)
}

pub fn progress<'a, Message: 'a>(frame: usize) -> Element<'a, Message> {
    let glyph = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    container(
        row![
            text(glyph).size(28).color(DarkTheme::PRIMARY),
            text("Searching...").size(15).color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(24)
    .into()
}

pub fn error_banner<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(15).color(DarkTheme::TEXT))
        .padding(Padding::from([12.0, 16.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::DANGER_SURFACE)),
            border: Border {
                color: DarkTheme::DANGER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// The result card. `sprite` is `None` until the image bytes arrive, or for
/// good if the lookup has no sprite.
pub fn view<'a, Message: 'a>(
    pokemon: &'a Pokemon,
    sprite: Option<&image::Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match sprite {
        Some(handle) => image(handle.clone())
            .height(SPRITE_HEIGHT)
            .width(Length::Fill)
            .content_fit(iced::ContentFit::Contain)
            .into(),
        None => text(if pokemon.sprite_url.is_some() { "..." } else { "No image" })
            .size(14)
            .color(DarkTheme::TEXT_PLACEHOLDER)
            .into(),
    };

    let sprite_box = container(picture)
        .width(Length::Fill)
        .height(SPRITE_HEIGHT)
        .center_x(Length::Fill)
        .center_y(SPRITE_HEIGHT)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SPRITE_BACKDROP)),
            border: Border::default().rounded(12),
            ..Default::default()
        });

    let stats = column(
        pokemon
            .stats
            .iter()
            .map(|stat| text(format!("• {}", stat_line(stat))).size(14).color(DarkTheme::TEXT).into()),
    )
    .spacing(2);

    let body = column![
        text(display_case(&pokemon.name)).size(26).font(BOLD).color(DarkTheme::TEXT),
        labelled("Types:", join_labels(&pokemon.types)),
        labelled("Abilities:", join_labels(&pokemon.abilities)),
        text("Stats:").size(14).font(BOLD).color(DarkTheme::TEXT),
        stats,
    ]
    .spacing(8)
    .padding(16);

    container(column![sprite_box, body])
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

fn labelled<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(14).font(BOLD).color(DarkTheme::TEXT),
        Space::with_width(6),
        text(value).size(14).color(DarkTheme::TEXT_MUTED),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::fixtures::pikachu;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_case() {
        assert_eq!(display_case("pikachu"), "Pikachu");
        assert_eq!(display_case("mr-mime"), "Mr-mime");
        assert_eq!(display_case("tapu koko"), "Tapu Koko");
        assert_eq!(display_case(""), "");
    }

    #[test]
    fn test_pikachu_card_text() {
        let pokemon = pikachu();
        assert_eq!(display_case(&pokemon.name), "Pikachu");
        assert_eq!(join_labels(&pokemon.types), "electric");
        assert_eq!(join_labels(&pokemon.abilities), "static, lightning-rod");

        let lines: Vec<_> = pokemon.stats.iter().map(stat_line).collect();
        assert_eq!(
            lines,
            vec![
                "hp: 35",
                "attack: 55",
                "defense: 40",
                "special-attack: 50",
                "special-defense: 50",
                "speed: 90",
            ]
        );
    }

    #[test]
    fn test_join_labels_empty() {
        assert_eq!(join_labels(&[]), "");
    }
}
