//! Core application state and Iced Application implementation
//!
//! Uses Iced 0.13 API. Network calls run as `Task`s on the tokio executor and
//! report back through messages tagged with the lookup ticket.

use std::future::Future;
use std::time::Duration;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, image, scrollable, text, Space};
use iced::{event, time, window, Background, Border, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::{PokeApiClient, Pokemon};
use crate::error::LookupError;
use crate::lookup::{LookupView, Phase};
use crate::ui::theme::DarkTheme;
use crate::ui::{card, search_bar};

// ============================================================================
// Application State
// ============================================================================

pub struct Pokedex {
    lookup: LookupView,
    sprite: Option<image::Handle>,
    spinner_frame: usize,
    client: PokeApiClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    Reset,
    LookupSettled {
        seq: u64,
        outcome: Result<Pokemon, LookupError>,
    },
    SpriteLoaded {
        seq: u64,
        bytes: Result<Vec<u8>, LookupError>,
    },
    SpinnerTick,
}

impl Pokedex {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            lookup: LookupView::new(),
            sprite: None,
            spinner_frame: 0,
            client,
        }
    }

    pub fn title(&self) -> String {
        String::from("Pokédex")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.lookup.set_query(query);
                Task::none()
            }

            Message::Submit => match self.begin_lookup() {
                Some(request) => Task::perform(request, |message| message),
                None => Task::none(),
            },

            Message::Reset => {
                self.lookup.reset();
                self.sprite = None;
                Task::none()
            }

            Message::LookupSettled { seq, outcome } => {
                if !self.lookup.settle(seq, outcome) {
                    return Task::none();
                }
                match self.lookup.result().and_then(|p| p.sprite_url.clone()) {
                    Some(url) => {
                        let client = self.client.clone();
                        Task::perform(
                            async move { client.fetch_sprite(&url).await },
                            move |bytes| Message::SpriteLoaded { seq, bytes },
                        )
                    }
                    None => Task::none(),
                }
            }

            Message::SpriteLoaded { seq, bytes } => {
                if !self.lookup.is_current(seq) {
                    tracing::debug!("Discarding sprite for stale lookup #{}", seq);
                    return Task::none();
                }
                match bytes {
                    Ok(bytes) => self.sprite = Some(image::Handle::from_bytes(bytes)),
                    Err(e) => tracing::warn!("Sprite for lookup #{} failed: {}", seq, e),
                }
                Task::none()
            }

            Message::SpinnerTick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                Task::none()
            }
        }
    }

    /// Move the view to busy and build the request for the current query.
    ///
    /// `None` when the view refuses the submission; no request is made then.
    fn begin_lookup(&mut self) -> Option<impl Future<Output = Message> + Send + 'static> {
        let ticket = self.lookup.submit()?;
        self.sprite = None;
        self.spinner_frame = 0;
        tracing::info!("Lookup #{}: {:?}", ticket.seq, ticket.key);

        let client = self.client.clone();
        Some(async move {
            let outcome = client.lookup(&ticket.key).await;
            Message::LookupSettled {
                seq: ticket.seq,
                outcome,
            }
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let on_submit = self.lookup.can_submit().then_some(Message::Submit);
        let search_bar = search_bar::view(self.lookup.query(), Message::QueryChanged, on_submit);

        // Busy suppresses error and result; error suppresses result.
        let body: Element<'_, Message> = match self.lookup.phase() {
            Phase::Idle => container(
                text("Type a name like \"pikachu\" or a number like 25")
                    .size(14)
                    .color(DarkTheme::TEXT_MUTED),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
            Phase::Busy => card::progress(self.spinner_frame),
            Phase::ShowingError => card::error_banner(self.lookup.error().unwrap_or_default()),
            Phase::ShowingResult => match self.lookup.result() {
                Some(pokemon) => scrollable(card::view(pokemon, self.sprite.as_ref()))
                    .height(Length::Fill)
                    .into(),
                None => Space::with_height(0).into(),
            },
        };

        container(
            column![search_bar, Space::with_height(16), body]
                .padding(16)
                .max_width(560),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::BACKGROUND)),
            border: Border::default(),
            ..Default::default()
        })
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // listen_with also sees events a focused text input captured, which
        // includes Escape.
        let keys = event::listen_with(escape_to_reset);
        if self.lookup.is_busy() {
            Subscription::batch([
                keys,
                time::every(Duration::from_millis(120)).map(|_| Message::SpinnerTick),
            ])
        } else {
            keys
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn escape_to_reset(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Reset),
        _ => None,
    }
}
