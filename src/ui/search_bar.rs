//! Search bar component

use iced::widget::{button, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use crate::ui::theme;

/// Text input plus submit button.
///
/// While a request is in flight the button is disabled and relabeled, and
/// Enter-to-submit is withheld. Blank-input filtering is not done here; the
/// session reducer rejects blank submissions.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let mut input = text_input("Search...", value)
        .on_input(on_input)
        .padding(Padding::from([10.0, 16.0]))
        .size(16)
        .style(|_theme, status| text_input::Style {
            background: Background::Color(theme::BACKGROUND),
            border: Border {
                color: match status {
                    text_input::Status::Focused => theme::BORDER_FOCUS,
                    _ => theme::BORDER,
                },
                width: 2.0,
                radius: 24.0.into(),
            },
            icon: theme::TEXT_MUTED,
            placeholder: theme::TEXT_PLACEHOLDER,
            value: theme::TEXT,
            selection: theme::SELECTION,
        });
    if !loading {
        input = input.on_submit(on_submit.clone());
    }

    let submit = button(text(if loading { "Searching..." } else { "Search" }).size(15))
        .padding(Padding::from([10.0, 24.0]))
        .style(|_theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Disabled => theme::SELECTION,
                button::Status::Hovered => theme::BORDER_FOCUS,
                _ => theme::PRIMARY,
            })),
            text_color: Color::WHITE,
            border: Border {
                radius: 24.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .on_press_maybe((!loading).then_some(on_submit));

    row![input, submit]
        .spacing(8)
        .width(Length::Fill)
        .align_y(iced::Alignment::Center)
        .into()
}
