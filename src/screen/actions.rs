//! Semantic action IDs for click targets on the screen.

use crate::catalog::{CHARACTERS, ELEMENTS};
use crate::dispatch::ButtonId;

/// Character buttons: `CHARACTER_BASE + index`.
pub const CHARACTER_BASE: u16 = 1;
/// Element buttons: `ELEMENT_BASE + index`.
pub const ELEMENT_BASE: u16 = 20;
pub const WISH: u16 = 40;
pub const DOMAIN: u16 = 41;
pub const EXPLORE: u16 = 42;
pub const OPEN_CHEST: u16 = 43;
/// The dismiss button on the visible notification.
pub const DISMISS_NOTIFICATION: u16 = 90;
/// The rest of the notification popup. Swallows taps so they never reach
/// the content underneath.
pub const MODAL_SURFACE: u16 = 91;
/// Id for indices outside the catalog; maps back to no button.
pub const NO_BUTTON: u16 = u16::MAX;

/// Click-target ID for `button`; [`NO_BUTTON`] for indices outside the catalog.
pub fn action_id(button: ButtonId) -> u16 {
    match button {
        ButtonId::Character(i) if i < CHARACTERS.len() => CHARACTER_BASE + i as u16,
        ButtonId::Element(i) if i < ELEMENTS.len() => ELEMENT_BASE + i as u16,
        ButtonId::Character(_) | ButtonId::Element(_) => NO_BUTTON,
        ButtonId::Wish => WISH,
        ButtonId::Domain => DOMAIN,
        ButtonId::Explore => EXPLORE,
        ButtonId::OpenChest => OPEN_CHEST,
    }
}

/// Inverse of [`action_id`]; `None` for ids that name no button.
pub fn button_for(action_id: u16) -> Option<ButtonId> {
    let characters = CHARACTER_BASE..CHARACTER_BASE + CHARACTERS.len() as u16;
    let elements = ELEMENT_BASE..ELEMENT_BASE + ELEMENTS.len() as u16;
    match action_id {
        id if characters.contains(&id) => Some(ButtonId::Character((id - CHARACTER_BASE) as usize)),
        id if elements.contains(&id) => Some(ButtonId::Element((id - ELEMENT_BASE) as usize)),
        WISH => Some(ButtonId::Wish),
        DOMAIN => Some(ButtonId::Domain),
        EXPLORE => Some(ButtonId::Explore),
        OPEN_CHEST => Some(ButtonId::OpenChest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_button() -> Vec<ButtonId> {
        let mut all: Vec<ButtonId> = (0..CHARACTERS.len()).map(ButtonId::Character).collect();
        all.extend((0..ELEMENTS.len()).map(ButtonId::Element));
        all.extend([ButtonId::Wish, ButtonId::Domain, ButtonId::Explore, ButtonId::OpenChest]);
        all
    }

    #[test]
    fn every_button_round_trips() {
        for button in every_button() {
            assert_eq!(button_for(action_id(button)), Some(button));
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u16> = every_button().into_iter().map(action_id).collect();
        ids.extend([DISMISS_NOTIFICATION, MODAL_SURFACE, NO_BUTTON]);
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn unknown_ids_map_to_nothing() {
        assert_eq!(button_for(0), None);
        assert_eq!(button_for(CHARACTER_BASE + CHARACTERS.len() as u16), None);
        assert_eq!(button_for(ELEMENT_BASE + ELEMENTS.len() as u16), None);
        assert_eq!(button_for(DISMISS_NOTIFICATION), None);
        assert_eq!(button_for(MODAL_SURFACE), None);
    }

    #[test]
    fn out_of_catalog_indices_do_not_alias_other_buttons() {
        for i in [CHARACTERS.len(), 19, 40, usize::MAX] {
            assert_eq!(action_id(ButtonId::Character(i)), NO_BUTTON);
            assert_eq!(button_for(action_id(ButtonId::Character(i))), None);
        }
        for i in [ELEMENTS.len(), 20, 65_536] {
            assert_eq!(action_id(ButtonId::Element(i)), NO_BUTTON);
        }
    }
}
