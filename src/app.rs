//! Application state and the Iced update/view loop
//!
//! Uses Iced 0.13. The window starts as a centered landing page and switches
//! to a header-plus-results layout once a search has been issued. All state
//! transitions go through the session reducer; this module only wires
//! reducer effects to tasks and draws the current snapshot.

use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding, Task, Theme};

use crate::backend::api::SearchClient;
use crate::backend::types::SearchResponse;
use crate::config::CONFIG;
use crate::session::{Action, SearchRequest, SessionState};
use crate::ui;
use crate::ui::theme;

pub struct Seeker {
    input: String,
    session: SessionState,
    client: SearchClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    InputSubmitted,
    PageSelected(u32),
    SearchFinished {
        seq: u64,
        outcome: Result<SearchResponse, String>,
    },
}

impl Default for Seeker {
    fn default() -> Self {
        Self {
            input: String::new(),
            session: SessionState::new(),
            client: SearchClient::new(&CONFIG.api_base_url),
        }
    }
}

fn results_scroll_id() -> scrollable::Id {
    scrollable::Id::new("results")
}

impl Seeker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Task::none()
            }

            Message::InputSubmitted => {
                match self.session.apply(Action::SubmitQuery(self.input.clone())) {
                    Some(request) => self.dispatch(request),
                    None => Task::none(),
                }
            }

            Message::PageSelected(page) => {
                match self.session.apply(Action::ChangePage(page)) {
                    Some(request) => Task::batch([
                        self.dispatch(request),
                        scrollable::scroll_to(
                            results_scroll_id(),
                            AbsoluteOffset { x: 0.0, y: 0.0 },
                        ),
                    ]),
                    None => Task::none(),
                }
            }

            Message::SearchFinished { seq, outcome } => {
                match outcome {
                    Ok(response) => {
                        self.session
                            .apply(Action::RequestSucceeded { seq, response });
                    }
                    Err(detail) => {
                        tracing::error!("search request failed: {}", detail);
                        self.session.apply(Action::RequestFailed { seq });
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if self.searched() {
            self.view_results_page()
        } else {
            self.view_landing()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Something is on screen beyond the landing page once results, an
    /// error, or an issued query exist.
    fn searched(&self) -> bool {
        !self.session.results.is_empty()
            || self.session.error.is_some()
            || self.session.query_issued()
    }

    fn dispatch(&self, request: SearchRequest) -> Task<Message> {
        let client = self.client.clone();
        let SearchRequest { seq, query, page } = request;
        Task::perform(
            async move { client.search(&query, page).await.map_err(|e| e.to_string()) },
            move |outcome| Message::SearchFinished { seq, outcome },
        )
    }

    fn search_input(&self) -> Element<'_, Message> {
        ui::search_bar::view(
            &self.input,
            self.session.is_loading(),
            Message::InputChanged,
            Message::InputSubmitted,
        )
    }

    fn view_landing(&self) -> Element<'_, Message> {
        let content = column![
            text("Seeker").size(40).color(theme::PRIMARY),
            Space::with_height(28),
            self.search_input(),
            Space::with_height(16),
            text("Type a query to search the index")
                .size(14)
                .color(theme::TEXT_MUTED),
        ]
        .align_x(iced::Alignment::Center)
        .max_width(680.0);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(Padding::new(24.0))
            .into()
    }

    fn view_results_page(&self) -> Element<'_, Message> {
        let header = container(
            row![
                text("Seeker").size(22).color(theme::PRIMARY),
                container(self.search_input()).max_width(640.0),
            ]
            .spacing(24)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([12.0, 24.0]))
        .style(|_theme| container::Style {
            border: Border {
                color: theme::BORDER,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

        let mut body = column![].spacing(16).max_width(880.0);

        if let Some(error) = &self.session.error {
            body = body.push(error_banner(error));
        }

        body = body.push(ui::results::view(
            &self.session.results,
            &self.session.query,
        ));

        if let Some(pagination) = ui::pagination::view(
            self.session.page,
            self.session.total,
            Message::PageSelected,
        ) {
            body = body.push(pagination);
        }

        column![
            header,
            scrollable(
                container(body)
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(Padding::new(24.0))
            )
            .id(results_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill),
        ]
        .into()
    }
}

fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14).color(theme::ERROR_TEXT))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(Padding::new(14.0))
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::ERROR_SURFACE)),
            border: Border {
                color: theme::ERROR_BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
