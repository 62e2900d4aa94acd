//! Result list rendering and display-field fallbacks

use iced::widget::{column, container, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use crate::backend::types::SearchResult;
use crate::ui::theme;

/// What actually gets drawn for one result. Derived per render; the wire
/// record is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

/// Derive the display fields for one result.
///
/// Index titles are often junk (bare numbers, stray metadata), so anything
/// blank or 3 characters and shorter falls back to the URL. The snippet
/// prefers `Content` over `Description` and is dropped entirely when the
/// chosen value is blank or 10 characters and shorter.
pub fn display_record(result: &SearchResult) -> DisplayRecord {
    let title = match &result.title {
        Some(title) if !title.trim().is_empty() && title.len() > 3 => title.clone(),
        _ => result.url.clone(),
    };

    // An empty content field defers to the description; whitespace-only
    // content counts as chosen and then fails the blank check below.
    let snippet = result
        .content
        .as_ref()
        .filter(|content| !content.is_empty())
        .or(result.description.as_ref());
    let description = match snippet {
        Some(snippet) if !snippet.trim().is_empty() && snippet.len() > 10 => {
            Some(snippet.clone())
        }
        _ => None,
    };

    DisplayRecord {
        title,
        url: result.url.clone(),
        description,
    }
}

/// The results area: a notice when an issued query matched nothing, nothing
/// at all before the first search, otherwise one card per result.
pub fn view<'a, Message: 'a>(results: &'a [SearchResult], query: &'a str) -> Element<'a, Message> {
    if results.is_empty() {
        if query.is_empty() {
            return Space::with_height(0).into();
        }
        return container(
            column![
                text(format!("No results found for \"{query}\"")).size(18).color(theme::TEXT_MUTED),
                text("Try a different search term").size(13).color(theme::TEXT_PLACEHOLDER),
            ]
            .spacing(8)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(Padding::from([48.0, 0.0]))
        .into();
    }

    let mut list = column![text("Search Results").size(22).color(theme::TEXT)].spacing(16);

    for result in results {
        let record = display_record(result);

        let mut card = column![
            text(record.title).size(17).color(theme::PRIMARY),
            text(record.url).size(13).color(theme::URL_TEXT),
        ]
        .spacing(4);

        if let Some(description) = record.description {
            card = card.push(text(description).size(14).color(theme::TEXT));
        }

        list = list.push(
            container(card)
                .width(Length::Fill)
                .padding(Padding::new(16.0))
                .style(|_theme| container::Style {
                    background: Some(Background::Color(theme::BACKGROUND)),
                    border: Border {
                        color: theme::BORDER,
                        width: 1.0,
                        radius: 10.0.into(),
                    },
                    ..Default::default()
                }),
        );
    }

    list.into()
}
