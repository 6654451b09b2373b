use crate::app::action::Action;
use crate::app::event::{AppEvent, ModalId};
use crate::app::state::*;
use crate::modal::{EventOutcome, ModalError, ModalState, ModalView};
use crate::ui::header;
use crate::ui::layout::compute_layout;
use crate::ui::mobile_menu::{self, MenuItem};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Frame(at) => {
            handle_frame(state, at);
            vec![]
        }
        AppEvent::Dismiss(ModalId::MobileMenu) => {
            tracing::info!("mobile menu dismissed");
            state.close_menu();
            vec![]
        }
    }
}

fn handle_frame(state: &mut AppState, at: Instant) {
    if !state.is_animating() {
        // Late frame from a ticker that is being stopped.
        state.last_frame = None;
        return;
    }
    let dt = state
        .last_frame
        .map(|last| at.saturating_duration_since(last))
        .unwrap_or(Duration::ZERO);
    state.last_frame = Some(at);
    state.menu.modal.advance(dt);
    state.dirty = true;

    if !state.is_animating() {
        state.last_frame = None;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    if let CEvent::Resize(width, height) = event {
        state.viewport = Rect::new(0, 0, width, height);
        return vec![];
    }

    // Key releases and repeats are only reported on some platforms.
    if let CEvent::Key(key) = &event {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }
    }

    // The menu captures all input while it is on screen
    if state.menu.modal.is_visible() {
        return handle_menu_event(state, &event);
    }

    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        _ => vec![],
    }
}

fn handle_menu_event(state: &mut AppState, event: &CEvent) -> Vec<Action> {
    // Reopening while the menu slides out reverses the exit
    if state.menu.modal.state() == ModalState::Exiting && requests_menu(state, event) {
        state.open_menu();
        return vec![];
    }

    let outcome = state
        .menu
        .modal
        .handle_event(event, state.viewport, &mut state.dismiss_menu);

    match outcome {
        Ok(EventOutcome::Ignored) => match event {
            CEvent::Key(key) => handle_menu_key(state, *key),
            CEvent::Mouse(mouse) => handle_menu_mouse(state, *mouse),
            _ => vec![],
        },
        Ok(EventOutcome::Consumed | EventOutcome::Dismissed) => vec![],
        Err(e) => dismiss_failed(state, e),
    }
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Keys are ignored while the menu animates out
    if !state.menu.modal.is_on() {
        return vec![];
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu.move_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.menu.move_down();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_menu_item(state),
        _ => vec![],
    }
}

fn handle_menu_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if !state.menu.modal.is_on() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let ModalView::Visible(layout) = state.menu.modal.view(state.viewport) else {
        return vec![];
    };
    let content = ratatui::widgets::Block::default()
        .borders(ratatui::widgets::Borders::ALL)
        .padding(layout.padding)
        .inner(layout.panel);
    if !content.contains(Position::new(mouse.column, mouse.row)) {
        return vec![];
    }
    match mobile_menu::item_at_row(mouse.row - content.y) {
        Some(index) => {
            state.menu.selected = index;
            activate_menu_item(state)
        }
        None => vec![],
    }
}

fn activate_menu_item(state: &mut AppState) -> Vec<Action> {
    let Some(item) = state.menu.selected_item() else {
        return vec![];
    };
    if let MenuItem::Category(label) | MenuItem::Legal(label) = item {
        state.status_message = Some(format!("Selected {}", label));
    }
    match state.menu.modal.request_close(&mut state.dismiss_menu) {
        Ok(()) => vec![],
        Err(e) => dismiss_failed(state, e),
    }
}

fn dismiss_failed(state: &mut AppState, error: ModalError) -> Vec<Action> {
    tracing::warn!(%error, "menu dismiss failed");
    state.status_message = Some(format!("Could not close menu: {}", error));
    vec![Action::Bell]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if state.search.focused {
        return handle_search_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('m') => {
            state.open_menu();
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.nav_left();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.nav_right();
            vec![]
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.adjust_progress(10);
            vec![]
        }
        KeyCode::Char('-') => {
            state.adjust_progress(-10);
            vec![]
        }
        KeyCode::Char('p') => {
            state.progress_size = state.progress_size.next();
            vec![]
        }
        KeyCode::Char('s') => {
            state.sort.cycle();
            vec![]
        }
        KeyCode::Char('i') => {
            state.search.size = state.search.size.toggle();
            vec![]
        }
        KeyCode::Char('/') => {
            state.search.focused = true;
            vec![]
        }
        KeyCode::Esc => {
            state.status_message = None;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.search.focused = false,
        KeyCode::Backspace => state.search.delete_back(),
        KeyCode::Char(c) => state.search.insert_char(c),
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if hits_menu_button(state, &mouse) {
        state.open_menu();
    }
    vec![]
}

/// `m` or a click on the header's menu button.
fn requests_menu(state: &AppState, event: &CEvent) -> bool {
    match event {
        CEvent::Key(key) => key.code == KeyCode::Char('m'),
        CEvent::Mouse(mouse) => hits_menu_button(state, mouse),
        _ => false,
    }
}

fn hits_menu_button(state: &AppState, mouse: &MouseEvent) -> bool {
    if !state.config.ui.mouse || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    let header_area = compute_layout(state.viewport).header;
    header::menu_button_area(header_area)
        .is_some_and(|button| button.contains(Position::new(mouse.column, mouse.row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use tokio::sync::mpsc::error::TryRecvError;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Feed frames 16ms apart until the menu stops animating.
    fn run_frames(state: &mut AppState) {
        let mut at = Instant::now();
        for _ in 0..1000 {
            handle_event(state, AppEvent::Frame(at));
            if !state.is_animating() {
                return;
            }
            at += Duration::from_millis(16);
        }
        panic!("menu never settled");
    }

    #[test]
    fn menu_opens_animates_and_closes_through_channel() {
        let (mut state, mut rx) = test_state();
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert_eq!(state.menu.modal.state(), ModalState::Entering);
        run_frames(&mut state);
        assert_eq!(state.menu.modal.state(), ModalState::Entered);

        handle_event(&mut state, key(KeyCode::Esc));
        // Dismiss is a request; the menu stays up until the owner acts.
        assert_eq!(state.menu.modal.state(), ModalState::Entered);
        let event = rx.try_recv().unwrap();
        assert!(matches!(event, AppEvent::Dismiss(ModalId::MobileMenu)));
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);

        handle_event(&mut state, event);
        assert_eq!(state.menu.modal.state(), ModalState::Exiting);
        run_frames(&mut state);
        assert_eq!(state.menu.modal.state(), ModalState::Unmounted);
        assert!(state.last_frame.is_none());
    }

    #[test]
    fn dismiss_button_closes_menu() {
        let (mut state, mut rx) = test_state();
        state.config.modal.allow_escape = false;
        state.menu = MobileMenuState::new(&state.config);
        state.open_menu();
        run_frames(&mut state);

        handle_event(&mut state, key(KeyCode::Esc));
        handle_event(&mut state, click(0, 0));
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);

        handle_event(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::Dismiss(ModalId::MobileMenu)
        ));
    }

    #[test]
    fn selecting_a_link_records_status_and_closes() {
        let (mut state, mut rx) = test_state();
        state.open_menu();
        run_frames(&mut state);
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.status_message.as_deref(), Some("Selected New Releases"));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn keys_do_not_leak_to_page_while_menu_visible() {
        let (mut state, _rx) = test_state();
        state.open_menu();
        let actions = handle_event(&mut state, key(KeyCode::Char('q')));
        assert!(actions.is_empty());
        handle_event(&mut state, key(KeyCode::Char('+')));
        assert_eq!(state.progress, 40);
    }

    #[test]
    fn ctrl_c_quits_even_with_menu_open() {
        let (mut state, _rx) = test_state();
        state.open_menu();
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, event), vec![Action::Quit]);
    }

    #[test]
    fn reopen_during_exit_converges_to_entered() {
        let (mut state, _rx) = test_state();
        state.open_menu();
        run_frames(&mut state);
        handle_event(&mut state, AppEvent::Dismiss(ModalId::MobileMenu));
        let now = Instant::now();
        handle_event(&mut state, AppEvent::Frame(now));
        handle_event(&mut state, AppEvent::Frame(now + Duration::from_millis(50)));
        assert_eq!(state.menu.modal.state(), ModalState::Exiting);

        handle_event(&mut state, key(KeyCode::Char('m')));
        assert_eq!(state.menu.modal.state(), ModalState::Entering);
        run_frames(&mut state);
        assert_eq!(state.menu.modal.state(), ModalState::Entered);
    }

    #[test]
    fn menu_button_click_during_exit_reopens() {
        let (mut state, _rx) = test_state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(60, 24)));
        state.open_menu();
        run_frames(&mut state);
        state.close_menu();
        let now = Instant::now();
        handle_event(&mut state, AppEvent::Frame(now));
        handle_event(&mut state, AppEvent::Frame(now + Duration::from_millis(50)));
        assert_eq!(state.menu.modal.state(), ModalState::Exiting);

        let header_area = compute_layout(state.viewport).header;
        let button = header::menu_button_area(header_area).unwrap();
        handle_event(&mut state, click(button.x, button.y));
        assert_eq!(state.menu.modal.state(), ModalState::Entering);
    }

    #[test]
    fn outside_click_dismisses_and_inside_click_selects() {
        let (mut state, mut rx) = test_state();
        state.open_menu();
        run_frames(&mut state);

        let ModalView::Visible(layout) = state.menu.modal.view(state.viewport) else {
            panic!("menu should be visible");
        };
        // First category sits two rows below the dismiss button.
        let content_y = layout.panel.y + 1 + layout.padding.top;
        let content_x = layout.panel.x + 1 + layout.padding.left;
        handle_event(&mut state, click(content_x, content_y + 2));
        assert_eq!(state.status_message.as_deref(), Some("Selected Sale"));
        assert!(rx.try_recv().is_ok());

        handle_event(&mut state, click(0, 0));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn menu_button_click_opens_menu_on_narrow_screens() {
        let (mut state, _rx) = test_state();
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Resize(60, 24)),
        );
        let header_area = compute_layout(state.viewport).header;
        let button = header::menu_button_area(header_area).unwrap();
        handle_event(&mut state, click(button.x, button.y));
        assert!(state.menu.modal.is_on());
    }

    #[test]
    fn failed_dismiss_rings_bell_and_keeps_menu_open() {
        let (mut state, rx) = test_state();
        drop(rx);
        state.open_menu();
        run_frames(&mut state);
        let actions = handle_event(&mut state, key(KeyCode::Esc));
        assert_eq!(actions, vec![Action::Bell]);
        assert_eq!(state.menu.modal.state(), ModalState::Entered);
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Could not close menu"));
    }

    #[test]
    fn search_captures_typing_until_blurred() {
        let (mut state, _rx) = test_state();
        handle_event(&mut state, key(KeyCode::Char('/')));
        for c in "qm".chars() {
            handle_event(&mut state, key(KeyCode::Char(c)));
        }
        assert_eq!(state.search.text, "qm");
        assert!(!state.menu.modal.is_on());
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(!state.search.focused);
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('q'))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn page_keys_update_components() {
        let (mut state, _rx) = test_state();
        handle_event(&mut state, key(KeyCode::Char('+')));
        assert_eq!(state.progress, 50);
        handle_event(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.sort.value, "price");
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.nav_selected, 1);
    }

    #[test]
    fn stray_frames_are_ignored_when_idle() {
        let (mut state, _rx) = test_state();
        handle_event(&mut state, AppEvent::Frame(Instant::now()));
        assert!(state.last_frame.is_none());
        assert_eq!(state.menu.modal.state(), ModalState::Unmounted);
    }
}
