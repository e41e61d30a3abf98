// SPDX-License-Identifier: MPL-2.0
//! Toast widgets drawn from the rendered notification subtrees.
//!
//! Nothing here reads the notification properties directly: every toast is
//! built from what the center rendered into its [`MemoryDom`], so the window
//! shows exactly what the tree holds.

use crate::dom::{MemoryDom, NodeId};
use crate::notifications::{ClassNames, NotificationCenter, NotificationView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A notification node was clicked: the root for the body, or a button.
    Clicked(NodeId),
}

/// What one toast displays, read back from its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub root: NodeId,
    pub icon: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub text: String,
    /// Button nodes with their rendered labels.
    pub actions: Vec<(NodeId, String)>,
    pub minimal: bool,
    /// 1.0 while shown, falling to 0.0 over the hide transition.
    pub visibility: f32,
}

impl ToastContent {
    #[must_use]
    pub fn read(
        dom: &MemoryDom,
        classes: &ClassNames,
        view: &NotificationView,
        now: Instant,
    ) -> Self {
        let nodes = view.nodes();
        let own_text = |node: NodeId| dom.text(node).unwrap_or_default().to_string();

        let visibility = if dom.has_class(nodes.height_container, &classes.hide) {
            view.closing()
                .map_or(opacity::TRANSPARENT, |closing| 1.0 - closing.progress(now))
        } else {
            opacity::OPAQUE
        };

        Self {
            root: nodes.root,
            icon: dom
                .attribute(nodes.image, "src")
                .filter(|src| !src.is_empty())
                .map(str::to_string),
            title: own_text(nodes.title),
            subtitle: own_text(nodes.subtitle),
            text: own_text(nodes.text),
            actions: view
                .action_nodes()
                .map(|(node, _)| (node, own_text(node)))
                .collect(),
            minimal: dom.has_class(nodes.actions, &classes.minimal),
            visibility,
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(content: ToastContent) -> Element<'a, Message> {
        let visibility = content.visibility;
        let minimal = content.minimal;

        let mut message = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(content.title).size(typography::TITLE_SM));
        if !content.subtitle.is_empty() {
            message = message.push(
                Text::new(content.subtitle)
                    .size(typography::CAPTION)
                    .style(move |theme: &Theme| {
                        let color = theme.extended_palette().background.strong.text;
                        text::Style {
                            color: Some(faded(color, visibility)),
                        }
                    }),
            );
        }
        message = message.push(Text::new(content.text).size(typography::BODY));

        let mut main = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(src) = content.icon {
            main = main.push(
                Image::new(Handle::from_path(src))
                    .width(Length::Fixed(sizing::ICON_LG))
                    .height(Length::Fixed(sizing::ICON_LG)),
            );
        }
        main = main.push(Container::new(message).width(Length::Fill));

        let buttons: Vec<Element<'a, Message>> = content
            .actions
            .into_iter()
            .map(|(node, label)| {
                button(Text::new(label).size(typography::BODY))
                    .on_press(Message::Clicked(node))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| {
                        action_button_style(theme, status, minimal, visibility)
                    })
                    .into()
            })
            .collect();

        let mut layout = Column::new().spacing(spacing::XS).push(main);
        if !buttons.is_empty() {
            layout = layout.push(
                Container::new(Row::with_children(buttons).spacing(spacing::XS))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );
        }

        let card = Container::new(layout)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, visibility));

        // Buttons capture their press, so the area only sees body clicks.
        mouse_area(card)
            .on_press(Message::Clicked(content.root))
            .into()
    }

    /// Renders every live notification, newest on top, in the top-right
    /// corner.
    pub fn view_overlay(
        center: &NotificationCenter<MemoryDom>,
        now: Instant,
    ) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = center
            .iter()
            .map(|view| {
                Self::view(ToastContent::read(
                    center.substrate(),
                    center.classes(),
                    view,
                    now,
                ))
            })
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
    }
}

fn faded(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, visibility: f32) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(faded(base.color, visibility))),
        border: iced::Border {
            color: faded(palette::PRIMARY_500, visibility),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, visibility * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(base.text, visibility)),
        ..Default::default()
    }
}

/// Style function for action buttons. Buttons of a minimal notification stay
/// faint until hovered.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    minimal: bool,
    visibility: f32,
) -> button::Style {
    let base = theme.extended_palette().background.base;
    let rest = if minimal {
        opacity::MINIMAL_ACTION
    } else {
        opacity::OPAQUE
    };

    let (background, alpha) = match status {
        button::Status::Active => (
            (!minimal).then_some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            rest,
        ),
        button::Status::Hovered => (
            Some(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            }),
            opacity::OPAQUE,
        ),
        button::Status::Pressed => (
            Some(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_700
            }),
            opacity::OPAQUE,
        ),
        button::Status::Disabled => (None, opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background: background
            .map(|color| iced::Background::Color(faded(color, visibility))),
        text_color: faded(base.text, alpha * visibility),
        border: iced::Border {
            color: faded(palette::GRAY_200, alpha * visibility),
            width: if minimal { 0.0 } else { border::WIDTH_SM },
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
