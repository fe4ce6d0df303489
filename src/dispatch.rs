//! Turn a button activation into the notification the user sees.
//!
//! Character buttons are the only ones that touch state: they update the
//! selection before the notification is built. Wish draws a character at
//! random and reports it without selecting it.

use serde::Serialize;
use tachyonfx::SimpleRng;

use crate::catalog::{self, Character, CHARACTERS, ELEMENTS};
use crate::selection::SelectionStore;

/// Dismiss label used when a notification does not name one.
pub const DEFAULT_DISMISS_LABEL: &str = "OK";

/// Every interactive element on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonId {
    Character(usize),
    Element(usize),
    Wish,
    Domain,
    Explore,
    OpenChest,
}

/// A modal message: title, body, and the label of its single dismiss button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub dismiss_label: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, dismiss_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            dismiss_label: dismiss_label.into(),
        }
    }
}

/// Source of uniform picks in `0..n`.
pub trait Roll {
    /// Pick an index in `0..n`. `n` is never zero.
    fn roll(&mut self, n: usize) -> usize;
}

impl Roll for SimpleRng {
    fn roll(&mut self, n: usize) -> usize {
        let pick = (self.gen_f32() * n as f32) as usize;
        pick.min(n - 1)
    }
}

/// Draw one character uniformly from the fixed list.
pub fn draw_wish(rng: &mut impl Roll) -> &'static Character {
    let idx = rng.roll(CHARACTERS.len()).min(CHARACTERS.len() - 1);
    &CHARACTERS[idx]
}

/// Resolve `button` to its notification, applying the selection change for
/// character picks. Ids outside the catalog resolve to `None` and change
/// nothing.
pub fn dispatch(
    button: ButtonId,
    selection: &mut SelectionStore,
    rng: &mut impl Roll,
) -> Option<Notification> {
    let notification = match button {
        ButtonId::Character(i) => {
            let character = CHARACTERS.get(i)?;
            selection.select(character.name);
            Notification::new(
                format!("¡{} seleccionado!", character.name),
                format!(
                    "Has elegido a {}, un usuario de {}",
                    character.name, character.element
                ),
                "Genial!",
            )
        }
        ButtonId::Element(i) => {
            let element = ELEMENTS.get(i)?;
            Notification::new(
                format!("Elemento {}", element.name),
                format!("Has seleccionado el elemento {} {}", element.name, element.icon),
                "Entendido",
            )
        }
        ButtonId::Wish => {
            let drawn = draw_wish(rng);
            Notification::new(
                "🌟 ¡Wish Result! 🌟",
                format!("¡Felicidades! Has obtenido a {} ({})", drawn.name, drawn.element),
                "¡Increíble!",
            )
        }
        ButtonId::Domain => Notification::new(
            "¡Entrando al dominio!",
            "⚔️ Prepárate para la batalla",
            DEFAULT_DISMISS_LABEL,
        ),
        ButtonId::Explore => Notification::new(
            "¡Explorando!",
            "🧭 Descubriendo nuevos lugares en Teyvat",
            DEFAULT_DISMISS_LABEL,
        ),
        ButtonId::OpenChest => Notification::new(
            "🎁 ¡Cofre Abierto!",
            "💎 Has encontrado materiales raros",
            DEFAULT_DISMISS_LABEL,
        ),
    };

    log::debug!("{:?} -> {:?}", button, notification.title);
    Some(notification)
}

/// Button label text, icon first, as the screen draws it.
pub fn label(button: ButtonId) -> Option<String> {
    let text = match button {
        ButtonId::Character(i) => {
            let c = CHARACTERS.get(i)?;
            format!("{} {}", catalog::CHARACTER_ICON, c.name)
        }
        ButtonId::Element(i) => {
            let e = ELEMENTS.get(i)?;
            format!("{} {}", e.icon, e.name)
        }
        ButtonId::Wish => format!("{} {}", catalog::WISH.icon, catalog::WISH.title),
        ButtonId::Domain => format!("{} {}", catalog::DOMAIN.icon, catalog::DOMAIN.title),
        ButtonId::Explore => format!("{} {}", catalog::EXPLORE.icon, catalog::EXPLORE.title),
        ButtonId::OpenChest => format!("{} {}", catalog::OPEN_CHEST.icon, catalog::OPEN_CHEST.title),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Always picks the same index.
    struct Fixed(usize);

    impl Roll for Fixed {
        fn roll(&mut self, _n: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn character_pick_selects_then_notifies() {
        let mut sel = SelectionStore::new();
        let n = dispatch(ButtonId::Character(0), &mut sel, &mut Fixed(0)).unwrap();
        assert_eq!(sel.get(), "Zhongli");
        assert_eq!(n.title, "¡Zhongli seleccionado!");
        assert!(n.body.contains("Zhongli"));
        assert!(n.body.contains("Geo"));
        assert_eq!(n.dismiss_label, "Genial!");
    }

    #[test]
    fn every_character_button_selects_its_name() {
        for (i, c) in CHARACTERS.iter().enumerate() {
            let mut sel = SelectionStore::new();
            dispatch(ButtonId::Character(i), &mut sel, &mut Fixed(0));
            assert_eq!(sel.get(), c.name);
        }
    }

    #[test]
    fn element_button_leaves_selection_alone() {
        let mut sel = SelectionStore::new();
        sel.select("Venti");
        let n = dispatch(ButtonId::Element(5), &mut sel, &mut Fixed(0)).unwrap();
        assert_eq!(sel.get(), "Venti");
        assert_eq!(n.title, "Elemento Hydro");
        assert_eq!(n.body, "Has seleccionado el elemento Hydro 💧");
        assert_eq!(n.dismiss_label, "Entendido");
    }

    #[test]
    fn wish_reports_drawn_character() {
        let mut sel = SelectionStore::new();
        let n = dispatch(ButtonId::Wish, &mut sel, &mut Fixed(3)).unwrap();
        assert_eq!(n.body, "¡Felicidades! Has obtenido a Ganyu (Cryo)");
        assert_eq!(n.dismiss_label, "¡Increíble!");
        assert_eq!(sel.get(), "none");
    }

    #[test]
    fn fixed_actions_use_default_dismiss() {
        let mut sel = SelectionStore::new();
        for button in [ButtonId::Domain, ButtonId::Explore, ButtonId::OpenChest] {
            let n = dispatch(button, &mut sel, &mut Fixed(0)).unwrap();
            assert_eq!(n.dismiss_label, DEFAULT_DISMISS_LABEL);
            assert!(!n.title.is_empty());
        }
        assert!(sel.is_none());
    }

    #[test]
    fn unknown_ids_do_nothing() {
        let mut sel = SelectionStore::new();
        assert_eq!(dispatch(ButtonId::Character(5), &mut sel, &mut Fixed(0)), None);
        assert_eq!(dispatch(ButtonId::Element(7), &mut sel, &mut Fixed(0)), None);
        assert!(sel.is_none());
        assert_eq!(label(ButtonId::Element(99)), None);
    }

    #[test]
    fn out_of_range_roll_is_clamped() {
        assert_eq!(draw_wish(&mut Fixed(42)).name, "Raiden");
    }

    #[test]
    fn labels_put_icon_first() {
        assert_eq!(label(ButtonId::Character(1)).unwrap(), "⚔️ Diluc");
        assert_eq!(label(ButtonId::Element(1)).unwrap(), "🔥 Pyro");
        assert_eq!(label(ButtonId::Wish).unwrap(), "✨ Hacer Wish");
    }

    #[test]
    fn wish_distribution_is_roughly_uniform() {
        let mut rng = SimpleRng::new(0x5EED);
        let mut counts = [0usize; 5];
        let trials = 10_000;
        for _ in 0..trials {
            let drawn = draw_wish(&mut rng);
            let idx = CHARACTERS.iter().position(|c| c.name == drawn.name).unwrap();
            counts[idx] += 1;
        }
        // expected 2000 each
        for (i, &n) in counts.iter().enumerate() {
            assert!(
                (1600..=2400).contains(&n),
                "{} drawn {} times out of {}: {:?}",
                CHARACTERS[i].name,
                n,
                trials,
                counts
            );
        }
    }

    proptest! {
        #[test]
        fn wish_never_touches_selection(prior in proptest::option::of("\\PC{0,16}"), seed in any::<u32>()) {
            let mut sel = SelectionStore::new();
            if let Some(name) = &prior {
                sel.select(name.clone());
            }
            let before = sel.clone();
            let mut rng = SimpleRng::new(seed);
            dispatch(ButtonId::Wish, &mut sel, &mut rng);
            prop_assert_eq!(sel, before);
        }

        #[test]
        fn wish_always_names_a_catalog_character(seed in any::<u32>()) {
            let mut rng = SimpleRng::new(seed);
            let drawn = draw_wish(&mut rng);
            prop_assert!(CHARACTERS.iter().any(|c| c.name == drawn.name));
        }
    }
}
