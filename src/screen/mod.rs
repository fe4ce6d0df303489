//! The single screen: owns the selection, the press animators and the
//! notification queue, and turns gestures into dispatches.

pub mod actions;
pub mod render;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::CHARACTERS;
use crate::dispatch::{self, ButtonId, Roll};
use crate::input::{ClickState, InputEvent};
use crate::logging::{self, UiEvent};
use crate::notify::NotificationCenter;
use crate::press::PressAnimator;
use crate::selection::SelectionStore;

/// Standalone action buttons that get a press animator, after the characters.
const ANIMATED_ACTIONS: [ButtonId; 4] = [
    ButtonId::Wish,
    ButtonId::Domain,
    ButtonId::Explore,
    ButtonId::OpenChest,
];

/// Index into `Screen::animators`, or `None` for plain (element) buttons.
fn animator_slot(button: ButtonId) -> Option<usize> {
    match button {
        ButtonId::Character(i) if i < CHARACTERS.len() => Some(i),
        ButtonId::Character(_) | ButtonId::Element(_) => None,
        other => ANIMATED_ACTIONS
            .iter()
            .position(|&b| b == other)
            .map(|p| CHARACTERS.len() + p),
    }
}

pub struct Screen<R: Roll> {
    pub selection: SelectionStore,
    pub notifications: NotificationCenter,
    animators: Vec<PressAnimator>,
    /// Action ID of the target under an unfinished gesture.
    held: Option<u16>,
    /// Vertical scroll offset of the content, in rows.
    pub scroll: u16,
    rng: R,
}

impl<R: Roll> Screen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            selection: SelectionStore::new(),
            notifications: NotificationCenter::new(),
            animators: vec![PressAnimator::new(); CHARACTERS.len() + ANIMATED_ACTIONS.len()],
            held: None,
            scroll: 0,
            rng,
        }
    }

    /// Handle one input event. Returns true if it changed anything.
    ///
    /// `scroll_limit` is the largest offset the last frame could show.
    pub fn handle_input(&mut self, event: &InputEvent, scroll_limit: u16) -> bool {
        match *event {
            InputEvent::PressDown(action_id) => {
                if let Some(previous) = self.held.take() {
                    self.cancel_gesture(previous);
                }
                self.held = Some(action_id);
                if let Some(animator) = self.animator_for_action_mut(action_id) {
                    animator.press_down();
                }
                true
            }
            InputEvent::PressUp(under_pointer) => {
                let Some(action_id) = self.held.take() else {
                    return false;
                };
                if under_pointer == Some(action_id) {
                    if let Some(animator) = self.animator_for_action_mut(action_id) {
                        animator.press_up();
                    }
                    self.activate(action_id);
                } else {
                    self.cancel_gesture(action_id);
                }
                true
            }
            InputEvent::PressCancel => match self.held.take() {
                Some(action_id) => {
                    self.cancel_gesture(action_id);
                    true
                }
                None => false,
            },
            InputEvent::Dismiss => self.notifications.dismiss().is_some(),
            InputEvent::Scroll(delta) => {
                let next = (self.scroll as i32 + delta).clamp(0, scroll_limit as i32) as u16;
                let changed = next != self.scroll;
                self.scroll = next;
                changed
            }
        }
    }

    /// Advance every press animation by `steps` steps of `dt` seconds.
    pub fn tick(&mut self, steps: u32, dt: f32) {
        for animator in &mut self.animators {
            animator.advance(steps, dt);
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &mut ClickState) {
        render::render(self, f, area, click_state);
    }

    /// Press animator for `button`, if it has one.
    pub fn animator(&self, button: ButtonId) -> Option<&PressAnimator> {
        animator_slot(button).and_then(|i| self.animators.get(i))
    }

    /// Current visual scale of `button`; plain buttons are always 1.0.
    pub fn scale_of(&self, button: ButtonId) -> f32 {
        self.animator(button).map_or(1.0, PressAnimator::scale)
    }

    /// True while a gesture that started on `action_id` is in progress.
    pub fn is_pressed(&self, action_id: u16) -> bool {
        self.held == Some(action_id)
    }

    fn animator_for_action_mut(&mut self, action_id: u16) -> Option<&mut PressAnimator> {
        let slot = actions::button_for(action_id).and_then(animator_slot)?;
        self.animators.get_mut(slot)
    }

    fn cancel_gesture(&mut self, action_id: u16) {
        if let Some(animator) = self.animator_for_action_mut(action_id) {
            animator.press_cancel();
        }
        logging::record(&UiEvent::GestureCancelled { action_id });
    }

    fn activate(&mut self, action_id: u16) {
        match action_id {
            actions::DISMISS_NOTIFICATION => {
                self.notifications.dismiss();
                return;
            }
            actions::MODAL_SURFACE => return,
            _ => {}
        }
        let Some(button) = actions::button_for(action_id) else {
            return;
        };
        logging::record(&UiEvent::Activated { button });
        if let Some(notification) = dispatch::dispatch(button, &mut self.selection, &mut self.rng) {
            self.notifications.present(notification);
        }
    }
}
