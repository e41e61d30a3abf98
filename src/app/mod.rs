// SPDX-License-Identifier: MPL-2.0
//! Demo window hosting a notification center.
//!
//! The `App` owns a [`NotificationCenter`] rendering into a [`MemoryDom`] and
//! draws it with the toast widgets. Clicks on toasts are forwarded to the
//! center as node clicks; a tick subscription runs while a dismissal is
//! pending so hide transitions complete.

mod message;
mod subscription;

pub use message::{Flags, Message, Sample};

use crate::config;
use crate::dom::MemoryDom;
use crate::notifications::{
    Action, ClickEvent, Dismissal, DispatchOutcome, NotificationCenter, NotificationOptions,
};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::toast::{self, Toast};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub struct App {
    center: NotificationCenter<MemoryDom>,
    /// Clock reading used to draw hide transitions.
    now: Instant,
    posted: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.center.len())
            .field("posted", &self.posted)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&config::Config::default())
    }
}

impl App {
    fn with_config(config: &config::Config) -> Self {
        Self {
            center: NotificationCenter::from_config(MemoryDom::new(), config),
            now: Instant::now(),
            posted: 0,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        let mut app = Self::with_config(&config);

        if let Some(warning) = warning {
            app.center.add_notification(
                NotificationOptions::new()
                    .title("Settings not loaded")
                    .subtitle("Using built-in defaults")
                    .text(warning),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.center.len() {
            0 => "Notification Center".to_string(),
            n => format!("Notification Center ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.center.has_pending_dismissals())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        match message {
            Message::Post(sample) => {
                self.posted += 1;
                let opts = self.sample_options(sample);
                let id = self.center.add_notification(opts).id();
                log::debug!("posted {sample:?} as {id:?}");
            }
            Message::ToggleMinimal => {
                let minimal = !self.center.defaults().to_minimal;
                self.center.defaults_mut().to_minimal = minimal;
                self.center.select_all().set("minimal", minimal);
            }
            Message::DismissAll => {
                for id in self.center.ids() {
                    self.center.dismiss_at(id, self.now);
                }
            }
            Message::Toast(toast::Message::Clicked(node)) => {
                let outcome = self.center.click_at(ClickEvent::on(node), self.now);
                if outcome == DispatchOutcome::Ignored {
                    log::debug!("click on {node:?} matched no notification");
                }
            }
            Message::Tick(now) => {
                self.now = now;
                self.center.tick(now);
            }
        }
        Task::none()
    }

    fn sample_options(&self, sample: Sample) -> NotificationOptions {
        let number = self.posted;
        match sample {
            Sample::Plain => NotificationOptions::new()
                .title(format!("Notification #{number}"))
                .text("Click Close, or the card itself if click-to-dismiss is configured."),
            Sample::Interactive => NotificationOptions::new()
                .title("Download finished")
                .subtitle(format!("report-{number}.pdf"))
                .action(
                    "Snooze",
                    Action::callback(move |_| {
                        log::info!("snoozed notification #{number}");
                        Dismissal::Keep
                    }),
                )
                .action(
                    "Open",
                    Action::callback(move |_| log::info!("opening report-{number}.pdf")),
                )
                .action("Close", Action::Unset),
            Sample::Minimal => NotificationOptions::new()
                .title("Quiet update")
                .text("Buttons stay faint until hovered.")
                .minimal(true),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::XS)
            .push(control("Post", Message::Post(Sample::Plain)))
            .push(control("Post with actions", Message::Post(Sample::Interactive)))
            .push(control("Post minimal", Message::Post(Sample::Minimal)))
            .push(control("Toggle minimal", Message::ToggleMinimal))
            .push(control("Dismiss all", Message::DismissAll));

        let panel = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(controls)
                .push(text(format!(
                    "{} live, {} posted",
                    self.center.len(),
                    self.posted
                ))),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

        Stack::new()
            .push(panel)
            .push(Toast::view_overlay(&self.center, self.now).map(Message::Toast))
            .into()
    }
}

fn control(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn newest_button(app: &App, label: &str) -> crate::dom::NodeId {
        let view = app.center.iter().next().expect("a notification");
        view.action_nodes()
            .find(|(_, l)| *l == label)
            .map(|(node, _)| node)
            .expect("button present")
    }

    #[test]
    fn post_adds_notification_on_top() {
        let mut app = App::default();
        let _ = app.update(Message::Post(Sample::Plain));
        let _ = app.update(Message::Post(Sample::Interactive));

        assert_eq!(app.center.len(), 2);
        assert_eq!(app.center.iter().next().unwrap().title(), "Download finished");
        assert_eq!(app.title(), "Notification Center (2)");
    }

    #[test]
    fn close_button_detaches_after_tick() {
        let mut app = App::default();
        let _ = app.update(Message::Post(Sample::Plain));
        let close = newest_button(&app, config::DEFAULT_ACTION_LABEL);

        let _ = app.update(Message::Toast(toast::Message::Clicked(close)));
        assert!(app.center.has_pending_dismissals());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(6)));
        assert!(app.center.is_empty());
        assert!(!app.center.has_pending_dismissals());
    }

    #[test]
    fn snooze_keeps_notification() {
        let mut app = App::default();
        let _ = app.update(Message::Post(Sample::Interactive));
        let snooze = newest_button(&app, "Snooze");

        let _ = app.update(Message::Toast(toast::Message::Clicked(snooze)));
        assert_eq!(app.center.len(), 1);
        assert!(!app.center.has_pending_dismissals());
    }

    #[test]
    fn toggle_minimal_updates_live_and_future_notifications() {
        let mut app = App::default();
        let _ = app.update(Message::Post(Sample::Plain));
        let _ = app.update(Message::ToggleMinimal);
        let _ = app.update(Message::Post(Sample::Plain));

        assert!(app.center.iter().all(|view| view.minimal()));
    }

    #[test]
    fn dismiss_all_closes_everything() {
        let mut app = App::default();
        let _ = app.update(Message::Post(Sample::Plain));
        let _ = app.update(Message::Post(Sample::Minimal));
        let _ = app.update(Message::DismissAll);

        assert_eq!(app.center.len(), 2);
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(6)));
        assert!(app.center.is_empty());
    }

    #[test]
    fn corrupted_settings_post_a_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write settings");

        let (app, _) = App::new(Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
        });

        assert_eq!(app.center.len(), 1);
        assert_eq!(app.center.iter().next().unwrap().title(), "Settings not loaded");
    }
}
