// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.

use crate::config::{LIGHTBOX_FADE_MS, LIGHTBOX_OPEN_CLEAR_DELAY_MS};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{loader, ImageData, ImagePrefetchCache};
use crate::navigation::SequenceNavigator;
use crate::portfolio::ImageSource;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::lightbox::transition::{Phase, Transition};
use crate::ui::state::{SwipeDirection, SwipeTracker};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{keyboard, touch, Element, Length, Task};
use std::time::Duration;

/// Direction of a navigation step within the active sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Next,
    Previous,
}

impl From<SwipeDirection> for NavigationDirection {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Next => Self::Next,
            SwipeDirection::Previous => Self::Previous,
        }
    }
}

/// Messages emitted by lightbox widgets and timers.
#[derive(Debug, Clone)]
pub enum Message {
    /// The open clear-delay elapsed; apply the pending source.
    ClearDelayElapsed { generation: u64 },
    /// The fade swap-delay elapsed; swap to the pending source.
    SwapDelayElapsed { generation: u64 },
    /// An image decode settled, success or failure.
    ImageLoaded {
        generation: u64,
        src: String,
        result: Result<ImageData, Error>,
    },
    /// A background prefetch settled.
    Prefetched {
        src: String,
        result: Result<ImageData, Error>,
    },
    NextPressed,
    PreviousPressed,
    ClosePressed,
    /// Click on the dimmed backdrop, outside the image.
    BackdropPressed,
    /// Click on the image itself; keeps the overlay open.
    ImagePressed,
    /// Keyboard or touch event routed from the application subscription.
    RawEvent(iced::Event),
}

/// Lightbox state: the navigation context, the explicit transition machine,
/// and the per-gesture swipe tracker.
pub struct State {
    navigator: SequenceNavigator,
    transition: Transition,
    current_image: Option<ImageData>,
    swipe: SwipeTracker,
    prefetch: ImagePrefetchCache,
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
            navigator: SequenceNavigator::new(),
            transition: Transition::new(),
            current_image: None,
            swipe: SwipeTracker::new(),
            prefetch: ImagePrefetchCache::with_defaults(),
        }
    }

    /// Whether the overlay is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.transition.is_open()
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index()
    }

    /// Opens the overlay on `index` within a category sequence.
    ///
    /// The current frame is cleared immediately; the target source is applied
    /// after a short fixed delay so a stale frame never shows. Opening an
    /// empty sequence is a no-op.
    pub fn open(
        &mut self,
        category: &str,
        sequence: Vec<ImageSource>,
        index: usize,
    ) -> Task<Message> {
        if sequence.is_empty() {
            return Task::none();
        }

        self.navigator.seed(category, sequence, index);
        let Some(target) = self.navigator.current() else {
            return Task::none();
        };

        let target_src = target.src.clone();
        self.current_image = None; // clear previous image first
        let generation = self.transition.begin_opening(target_src);

        Task::perform(
            async move { tokio::time::sleep(Duration::from_millis(LIGHTBOX_OPEN_CLEAR_DELAY_MS)).await },
            move |()| Message::ClearDelayElapsed { generation },
        )
    }

    /// Closes the overlay, cancelling all pending continuations.
    pub fn close(&mut self) {
        self.transition.close();
        self.current_image = None;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ClearDelayElapsed { generation } => {
                match self.transition.confirm_open(generation) {
                    Some(src) => self.load_or_hit(generation, src),
                    None => Task::none(),
                }
            }
            Message::SwapDelayElapsed { generation } => {
                match self.transition.complete_swap(generation) {
                    Some(src) => {
                        self.current_image = None;
                        self.load_or_hit(generation, src)
                    }
                    None => Task::none(),
                }
            }
            Message::ImageLoaded {
                generation,
                src,
                result,
            } => match result {
                Ok(image) => {
                    self.prefetch.insert(src.clone(), image.clone());
                    if self.transition.image_ready(generation, &src) {
                        self.current_image = Some(image);
                        return self.prefetch_adjacent();
                    }
                    Task::none()
                }
                Err(error) => {
                    // Settled: the broken frame stays, nothing blocks.
                    eprintln!("Failed to load image {src}: {error}");
                    self.transition.image_ready(generation, &src);
                    Task::none()
                }
            },
            Message::Prefetched { src, result } => {
                if let Ok(image) = result {
                    self.prefetch.insert(src, image);
                }
                Task::none()
            }
            Message::NextPressed => self.navigate(NavigationDirection::Next),
            Message::PreviousPressed => self.navigate(NavigationDirection::Previous),
            Message::ClosePressed | Message::BackdropPressed => {
                self.close();
                Task::none()
            }
            Message::ImagePressed => Task::none(),
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    /// Advances or retreats the sequence and starts the fade transition.
    /// A no-op on an empty sequence or a closed overlay.
    fn navigate(&mut self, direction: NavigationDirection) -> Task<Message> {
        if !self.transition.is_open() || self.navigator.is_empty() {
            return Task::none();
        }

        let target = match direction {
            NavigationDirection::Next => self.navigator.navigate_next(),
            NavigationDirection::Previous => self.navigator.navigate_previous(),
        };
        let Some(target) = target else {
            return Task::none();
        };

        let target_src = target.src.clone();
        let Some(generation) = self.transition.begin_fade(target_src) else {
            return Task::none();
        };

        Task::perform(
            async move { tokio::time::sleep(Duration::from_millis(LIGHTBOX_FADE_MS)).await },
            move |()| Message::SwapDelayElapsed { generation },
        )
    }

    /// Applies `src` from the prefetch cache when possible, otherwise starts
    /// a decode. A cache hit fades back in immediately.
    fn load_or_hit(&mut self, generation: u64, src: String) -> Task<Message> {
        if let Some(image) = self.prefetch.get(&src) {
            if self.transition.image_ready(generation, &src) {
                self.current_image = Some(image);
                return self.prefetch_adjacent();
            }
            return Task::none();
        }

        let future = loader::load_source(src.clone());
        Task::perform(async move { (src, future.await) }, move |(src, result)| {
            Message::ImageLoaded {
                generation,
                src,
                result,
            }
        })
    }

    /// Warms the cache with the images adjacent to the current position.
    fn prefetch_adjacent(&mut self) -> Task<Message> {
        let mut candidates: Vec<String> = [self.navigator.peek_next(), self.navigator.peek_previous()]
            .into_iter()
            .flatten()
            .map(|source| source.src.clone())
            .collect();
        candidates.dedup();

        let tasks: Vec<Task<Message>> = self
            .prefetch
            .sources_to_prefetch(&candidates)
            .into_iter()
            .map(|src| {
                let future = loader::load_source(src.clone());
                Task::perform(async move { (src, future.await) }, |(src, result)| {
                    Message::Prefetched { src, result }
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Keyboard and touch dispatch. Keys are only interpreted while the
    /// overlay is open; gesture state lives in the swipe tracker.
    fn handle_raw_event(&mut self, event: iced::Event) -> Task<Message> {
        if !self.transition.is_open() {
            return Task::none();
        }

        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    self.close();
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    self.navigate(NavigationDirection::Next)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    self.navigate(NavigationDirection::Previous)
                }
                _ => Task::none(),
            },
            iced::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { position, .. } => {
                    self.swipe.finger_pressed(position.x);
                    Task::none()
                }
                touch::Event::FingerLifted { position, .. } => {
                    match self.swipe.finger_lifted(position.x) {
                        Some(direction) => self.navigate(direction.into()),
                        None => Task::none(),
                    }
                }
                touch::Event::FingerLost { .. } => {
                    self.swipe.finger_canceled();
                    Task::none()
                }
                touch::Event::FingerMoved { .. } => Task::none(),
            },
            _ => Task::none(),
        }
    }

    /// Render the overlay. Returns an empty element while closed.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if !self.transition.is_open() {
            return Column::new().into();
        }

        let backdrop = mouse_area(
            Container::new(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::BackdropPressed);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop);

        // The enlarged image, faded out while a swap is pending.
        if let Some(image_data) = &self.current_image {
            let image_opacity = match self.transition.phase() {
                Phase::Visible { .. } => opacity::OPAQUE,
                _ => opacity::TRANSPARENT,
            };

            let framed = mouse_area(
                image::Image::new(image_data.handle.clone())
                    .opacity(image_opacity)
                    .width(Length::Shrink)
                    .height(Length::Shrink),
            )
            .on_press(Message::ImagePressed);

            layers = layers.push(
                Container::new(framed)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .padding(spacing::XXL),
            );
        }

        // Navigation arrows degrade away for single-image sequences.
        if self.navigator.len() > 1 {
            layers = layers.push(self.nav_controls());
        }

        layers = layers.push(self.close_control(i18n));

        if let Some((current, total)) = self.navigator.position() {
            layers = layers.push(position_counter(current, total));
        }

        layers.into()
    }

    fn nav_controls(&self) -> Element<'_, Message> {
        let prev = button(
            icons::sized(icons::chevron_left(), sizing::ICON_LG)
                .style(styles::overlay::nav_icon(WHITE)),
        )
        .on_press(Message::PreviousPressed)
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

        let next = button(
            icons::sized(icons::chevron_right(), sizing::ICON_LG)
                .style(styles::overlay::nav_icon(WHITE)),
        )
        .on_press(Message::NextPressed)
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

        let row = Row::new()
            .width(Length::Fill)
            .padding(spacing::LG)
            .push(prev)
            .push(Space::new(Length::Fill, Length::Shrink))
            .push(next);

        Container::new(row)
            .width(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn close_control<'a>(&self, _i18n: &'a I18n) -> Element<'a, Message> {
        let close = button(
            icons::sized(icons::cross(), sizing::ICON_MD).style(styles::overlay::nav_icon(WHITE)),
        )
        .on_press(Message::ClosePressed)
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

        let row = Row::new()
            .width(Length::Fill)
            .padding(spacing::LG)
            .push(Space::new(Length::Fill, Length::Shrink))
            .push(close);

        Container::new(row).width(Length::Fill).into()
    }
}

fn position_counter<'a>(current: usize, total: usize) -> Element<'a, Message> {
    let counter = Container::new(
        Text::new(format!("{current} / {total}")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::MD));

    let column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .push(Space::new(Length::Shrink, Length::Fill))
        .push(counter)
        .push(Space::new(Length::Shrink, Length::Fixed(spacing::LG)));

    column.into()
}
