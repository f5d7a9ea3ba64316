// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating grid state and update logic.
//!
//! Populating a category builds the complete thumbnail model in one batch
//! and swaps it in with a single assignment, so no stale entries from the
//! previous category ever remain. The grid stays hidden until the eager
//! decode subset settles or the reveal timeout fires, whichever comes first.

use crate::config::GRID_COLUMNS;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{loader, ImageData, LoadPriority};
use crate::portfolio::ImageSource;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Column, Container, Row, Text};
use iced::{Element, Length, Task};

/// Decode lifecycle of one thumbnail slot.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Decode scheduled or in flight.
    Loading,
    /// Decoded and ready to render.
    Loaded(ImageData),
    /// Decode failed; rendered as a broken-image placeholder, not retried.
    Broken,
}

/// One grid slot: the source, its decode priority, and its decode state.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub source: ImageSource,
    pub priority: LoadPriority,
    pub state: ThumbnailState,
}

impl Thumbnail {
    /// A slot settles when its decode resolves, success or failure.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self.state, ThumbnailState::Loading)
    }
}

/// Messages emitted by gallery widgets and decode tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// An eager or lazy decode settled.
    ThumbnailLoaded {
        generation: u64,
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// The reveal timeout elapsed before all eager decodes settled.
    RevealTimeout { generation: u64 },
    /// A thumbnail was clicked.
    ThumbnailPressed(usize),
    /// The grid scrollable moved; drives the header chrome.
    Scrolled(f32),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the lightbox seeded with this index and sequence context.
    OpenLightbox {
        category: String,
        index: usize,
        sequence: Vec<ImageSource>,
    },
    /// Report a scroll offset to the header visibility chrome.
    ScrollReported(f32),
}

/// Gallery state: the active category and its thumbnail slots.
pub struct State {
    category: Option<String>,
    thumbnails: Vec<Thumbnail>,
    revealed: bool,
    /// Bumped on each populate; decode results from a previous category
    /// are dropped on arrival.
    generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            category: None,
            thumbnails: Vec::new(),
            revealed: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the grid with a freshly built set for `category`.
    ///
    /// Existing slots are cleared before the new batch is swapped in. The
    /// returned task starts the eager decodes and the reveal timer; an empty
    /// sequence reveals immediately with no work scheduled.
    pub fn populate(&mut self, category: &str, sequence: &[ImageSource]) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;

        self.category = Some(category.to_string());
        self.thumbnails = sequence
            .iter()
            .enumerate()
            .map(|(index, source)| Thumbnail {
                source: source.clone(),
                priority: LoadPriority::for_index(index),
                state: ThumbnailState::Loading,
            })
            .collect();

        if self.thumbnails.is_empty() {
            self.revealed = true;
            return Task::none();
        }
        self.revealed = false;

        let mut tasks: Vec<Task<Message>> = self
            .thumbnails
            .iter()
            .enumerate()
            .filter(|(_, thumbnail)| thumbnail.priority.is_eager())
            .map(|(index, thumbnail)| decode_task(generation, index, thumbnail.source.src.clone()))
            .collect();

        tasks.push(Task::perform(loader::reveal_timeout(), move |()| {
            Message::RevealTimeout { generation }
        }));

        Task::batch(tasks)
    }

    /// Clears the grid entirely, e.g. when returning to the hero view.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.category = None;
        self.thumbnails.clear();
        self.revealed = false;
    }

    pub fn update(&mut self, message: Message) -> (Task<Message>, Effect) {
        match message {
            Message::ThumbnailLoaded {
                generation,
                index,
                result,
            } => {
                if generation != self.generation {
                    return (Task::none(), Effect::None);
                }

                if let Some(thumbnail) = self.thumbnails.get_mut(index) {
                    thumbnail.state = match result {
                        Ok(image) => ThumbnailState::Loaded(image),
                        Err(error) => {
                            eprintln!(
                                "Failed to load thumbnail {}: {error}",
                                thumbnail.source.src
                            );
                            ThumbnailState::Broken
                        }
                    };
                }

                if !self.revealed && self.eager_settled() {
                    return (self.reveal(), Effect::None);
                }
                (Task::none(), Effect::None)
            }
            Message::RevealTimeout { generation } => {
                if generation != self.generation || self.revealed {
                    return (Task::none(), Effect::None);
                }
                (self.reveal(), Effect::None)
            }
            Message::ThumbnailPressed(index) => {
                let Some(category) = self.category.clone() else {
                    return (Task::none(), Effect::None);
                };
                if index >= self.thumbnails.len() {
                    return (Task::none(), Effect::None);
                }

                let sequence: Vec<ImageSource> = self
                    .thumbnails
                    .iter()
                    .map(|thumbnail| thumbnail.source.clone())
                    .collect();

                (
                    Task::none(),
                    Effect::OpenLightbox {
                        category,
                        index,
                        sequence,
                    },
                )
            }
            Message::Scrolled(offset) => (Task::none(), Effect::ScrollReported(offset)),
        }
    }

    /// Whether every eager slot has settled.
    fn eager_settled(&self) -> bool {
        self.thumbnails
            .iter()
            .filter(|thumbnail| thumbnail.priority.is_eager())
            .all(Thumbnail::is_settled)
    }

    /// Reveals the grid and starts the deferred decode pass for lazy slots.
    fn reveal(&mut self) -> Task<Message> {
        self.revealed = true;
        let generation = self.generation;

        let tasks: Vec<Task<Message>> = self
            .thumbnails
            .iter()
            .enumerate()
            .filter(|(_, thumbnail)| !thumbnail.priority.is_eager())
            .map(|(index, thumbnail)| decode_task(generation, index, thumbnail.source.src.clone()))
            .collect();

        Task::batch(tasks)
    }

    /// Render the grid.
    ///
    /// Hidden until revealed; thumbnails flow top-to-bottom across a fixed
    /// number of columns, preserving sequence order down each column.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if !self.revealed {
            return Column::new().width(Length::Fill).into();
        }

        if self.thumbnails.is_empty() {
            return Container::new(
                Text::new(i18n.tr("gallery-empty")).size(typography::BODY),
            )
            .width(Length::Fill)
            .padding(spacing::XL)
            .center_x(Length::Fill)
            .into();
        }

        let mut cells: Vec<Vec<Element<'a, Message>>> =
            (0..GRID_COLUMNS).map(|_| Vec::new()).collect();

        for (index, thumbnail) in self.thumbnails.iter().enumerate() {
            cells[index % GRID_COLUMNS].push(thumbnail_cell(index, thumbnail, i18n));
        }

        let mut row = Row::new().spacing(spacing::SM).padding(spacing::LG);
        for column_cells in cells {
            row = row.push(
                Column::with_children(column_cells)
                    .spacing(spacing::SM)
                    .width(Length::Fill),
            );
        }

        scrollable(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
            .into()
    }
}

/// Spawns the decode for one slot, tagged with the populate generation.
fn decode_task(generation: u64, index: usize, src: String) -> Task<Message> {
    Task::perform(loader::load_source(src), move |result| {
        Message::ThumbnailLoaded {
            generation,
            index,
            result,
        }
    })
}

fn thumbnail_cell<'a>(
    index: usize,
    thumbnail: &'a Thumbnail,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &thumbnail.state {
        ThumbnailState::Loaded(image_data) => image::Image::new(image_data.handle.clone())
            .width(Length::Fill)
            .height(Length::Shrink)
            .into(),
        ThumbnailState::Loading => Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_WIDTH * 0.75))
            .style(styles::container::page)
            .into(),
        ThumbnailState::Broken => Container::new(
            Text::new(i18n.tr("gallery-broken-image")).size(typography::CAPTION),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_WIDTH * 0.75))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    };

    button(content)
        .on_press(Message::ThumbnailPressed(index))
        .padding(0.0)
        .style(styles::button::thumbnail)
        .into()
}
