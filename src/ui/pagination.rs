//! Numbered pagination: the page-window math and its widget row
//!
//! The window shows at most 7 tokens. Short ranges list every page; longer
//! ones pin the first and last page and collapse the gaps to ellipses.

use iced::widget::{button, container, row, text};
use iced::{Background, Border, Color, Element, Padding};

use crate::ui::theme;

/// Fixed page size of the remote search API.
pub const RESULTS_PER_PAGE: u64 = 10;

/// One slot in the pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

pub fn total_pages(total_results: u64) -> u32 {
    total_results.div_ceil(RESULTS_PER_PAGE) as u32
}

pub fn has_previous(current_page: u32) -> bool {
    current_page > 1
}

pub fn has_next(current_page: u32, total_pages: u32) -> bool {
    current_page < total_pages
}

/// Compute the visible page tokens.
///
/// Empty when there is at most one page. With more than 7 pages the window
/// keeps page 1 and the last page visible in every band:
/// near the start `1..=5 … last`, near the end `1 … last-4..=last`, and in
/// the middle `1 … current-1..=current+1 … last`.
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let mut tokens = Vec::new();

    if total_pages <= 1 {
        return tokens;
    }

    if total_pages <= 7 {
        for page in 1..=total_pages {
            tokens.push(PageToken::Page(page));
        }
    } else if current_page <= 4 {
        for page in 1..=5 {
            tokens.push(PageToken::Page(page));
        }
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - 3 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        for page in (total_pages - 4)..=total_pages {
            tokens.push(PageToken::Page(page));
        }
    } else {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        for page in (current_page - 1)..=(current_page + 1) {
            tokens.push(PageToken::Page(page));
        }
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}

/// Pagination row: Previous, the page window, Next.
///
/// Returns `None` when there is nothing to paginate. Every button fires
/// `on_page` with the target page number.
pub fn view<'a, Message: Clone + 'a>(
    current_page: u32,
    total_results: u64,
    on_page: impl Fn(u32) -> Message + 'a,
) -> Option<Element<'a, Message>> {
    let total_pages = total_pages(total_results);
    let tokens = page_tokens(current_page, total_pages);
    if tokens.is_empty() {
        return None;
    }

    let mut controls = row![].spacing(8).align_y(iced::Alignment::Center);

    controls = controls.push(
        nav_button("Previous")
            .on_press_maybe(has_previous(current_page).then(|| on_page(current_page - 1))),
    );

    for token in tokens {
        let element: Element<'a, Message> = match token {
            PageToken::Page(page) => {
                let is_current = page == current_page;
                button(text(page.to_string()).size(14))
                    .padding(Padding::from([8.0, 14.0]))
                    .style(move |_theme, status| page_style(is_current, status))
                    .on_press(on_page(page))
                    .into()
            }
            PageToken::Ellipsis => text("...").size(14).color(theme::TEXT_MUTED).into(),
        };
        controls = controls.push(element);
    }

    controls = controls.push(
        nav_button("Next")
            .on_press_maybe(has_next(current_page, total_pages).then(|| on_page(current_page + 1))),
    );

    Some(
        container(controls)
            .width(iced::Length::Fill)
            .center_x(iced::Length::Fill)
            .padding(Padding::from([24.0, 0.0]))
            .into(),
    )
}

fn nav_button<'a, Message>(label: &'a str) -> button::Button<'a, Message> {
    button(text(label).size(14))
        .padding(Padding::from([8.0, 16.0]))
        .style(|_theme, status| page_style(false, status))
}

fn page_style(is_current: bool, status: button::Status) -> button::Style {
    let background = if is_current {
        theme::PRIMARY
    } else {
        match status {
            button::Status::Hovered => theme::SURFACE,
            _ => theme::BACKGROUND,
        }
    };
    let text_color = if is_current {
        Color::WHITE
    } else {
        match status {
            button::Status::Disabled => theme::TEXT_PLACEHOLDER,
            _ => theme::TEXT,
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: if is_current { theme::PRIMARY } else { theme::BORDER },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_tokens() {
        assert!(page_tokens(1, total_pages(0)).is_empty());
        assert!(page_tokens(1, total_pages(5)).is_empty());
        assert!(page_tokens(1, total_pages(10)).is_empty());
    }

    #[test]
    fn test_short_range_lists_every_page() {
        let tokens = page_tokens(1, total_pages(25));
        assert_eq!(
            tokens,
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );

        let tokens = page_tokens(4, 7);
        assert_eq!(tokens.len(), 7);
        assert!(tokens.iter().all(|t| matches!(t, PageToken::Page(_))));
    }

    #[test]
    fn test_start_band_window() {
        let tokens = page_tokens(2, 20);
        assert_eq!(
            tokens,
            vec![
                PageToken::Page(1),
                PageToken::Page(2),
                PageToken::Page(3),
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Ellipsis,
                PageToken::Page(20),
            ]
        );
        // Page 4 is the last page still in the start band.
        assert_eq!(page_tokens(4, 20), tokens);
    }

    #[test]
    fn test_end_band_window() {
        let tokens = page_tokens(18, 20);
        assert_eq!(
            tokens,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(16),
                PageToken::Page(17),
                PageToken::Page(18),
                PageToken::Page(19),
                PageToken::Page(20),
            ]
        );
        // Page 17 (= 20 - 3) is the first page in the end band.
        assert_eq!(page_tokens(17, 20), tokens);
    }

    #[test]
    fn test_middle_band_window() {
        let tokens = page_tokens(10, 20);
        assert_eq!(
            tokens,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(9),
                PageToken::Page(10),
                PageToken::Page(11),
                PageToken::Ellipsis,
                PageToken::Page(20),
            ]
        );
    }

    #[test]
    fn test_middle_band_always_keeps_edges_and_seven_tokens() {
        for current in 5..=16 {
            let tokens = page_tokens(current, 20);
            assert_eq!(tokens.len(), 7, "current page {current}");
            assert_eq!(tokens[0], PageToken::Page(1));
            assert_eq!(tokens[6], PageToken::Page(20));
            let ellipses = tokens
                .iter()
                .filter(|t| matches!(t, PageToken::Ellipsis))
                .count();
            assert_eq!(ellipses, 2, "current page {current}");
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_previous_and_next_gates() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 3));
        assert!(!has_next(3, 3));
    }
}
