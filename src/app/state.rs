use crate::app::event::{AppEvent, ModalId};
use crate::config::AppConfig;
use crate::modal::{DismissSender, ModalController, ModalProps};
use crate::ui::header::NAV_LINKS;
use crate::ui::icon_input::IconInputState;
use crate::ui::mobile_menu::{self, MenuItem};
use crate::ui::progress_bar::ProgressSize;
use crate::ui::select::{SelectOption, SelectState};
use ratatui::layout::Rect;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub struct MobileMenuState {
    pub modal: ModalController,
    pub selected: usize,
}

impl MobileMenuState {
    pub fn new(config: &AppConfig) -> Self {
        let props = ModalProps {
            allow_escape: config.modal.allow_escape,
            max_width: config.modal.max_width,
            label: Some("Menu".to_string()),
            content_height: mobile_menu::CONTENT_HEIGHT,
        };
        Self {
            modal: ModalController::new(props, config.modal.transition()),
            selected: 0,
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = mobile_menu::items().len() - 1;
        self.selected = (self.selected + 1).min(last);
    }

    pub fn selected_item(&self) -> Option<MenuItem> {
        mobile_menu::items().get(self.selected).copied()
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub viewport: Rect,
    pub nav_selected: usize,
    pub menu: MobileMenuState,
    pub dismiss_menu: DismissSender<AppEvent>,
    pub progress: u8,
    pub progress_size: ProgressSize,
    pub sort: SelectState,
    pub search: IconInputState,
    pub status_message: Option<String>,
    pub last_frame: Option<Instant>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, event_tx: UnboundedSender<AppEvent>, viewport: Rect) -> Self {
        let menu = MobileMenuState::new(&config);
        Self {
            config,
            viewport,
            nav_selected: 0,
            menu,
            dismiss_menu: DismissSender::new(event_tx, AppEvent::Dismiss(ModalId::MobileMenu)),
            progress: 40,
            progress_size: ProgressSize::default(),
            sort: SelectState::new(
                "Sort",
                vec![
                    SelectOption::new("newest", "Newest Releases"),
                    SelectOption::new("price", "Price"),
                    SelectOption::new("curated", "Curated"),
                ],
            ),
            search: IconInputState::default(),
            status_message: None,
            last_frame: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn open_menu(&mut self) {
        if !self.menu.modal.is_on() {
            self.menu.selected = 0;
        }
        self.menu.modal.set_on(true);
        self.last_frame = None;
        self.dirty = true;
    }

    pub fn close_menu(&mut self) {
        self.menu.modal.set_on(false);
        self.last_frame = None;
        self.dirty = true;
    }

    pub fn is_animating(&self) -> bool {
        self.menu.modal.is_animating()
    }

    pub fn nav_left(&mut self) {
        self.nav_selected = self.nav_selected.saturating_sub(1);
    }

    pub fn nav_right(&mut self) {
        self.nav_selected = (self.nav_selected + 1).min(NAV_LINKS.len() - 1);
    }

    pub fn adjust_progress(&mut self, delta: i16) {
        self.progress = (i16::from(self.progress) + delta).clamp(0, 100) as u8;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "{} · {} · {}%",
            NAV_LINKS[self.nav_selected],
            self.sort.display(),
            self.progress
        )
    }
}
