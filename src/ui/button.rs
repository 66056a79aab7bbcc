//! Favorite button presentation.
//!
//! The button shows a filled star when the paper is a favorite and an empty
//! star with the `outline` class otherwise. State always comes from the
//! server's `is_active`; nothing here infers it from the current label.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use crate::favorites::{FavoriteError, PaperId, ToggleResponse};

use super::notice::{LOGIN_NOTICE, Notifier};

pub const FILLED_STAR: &str = "★";
pub const EMPTY_STAR: &str = "☆";
pub const OUTLINE_CLASS: &str = "outline";

/// A UI element with a mutable label and class list.
///
/// `text` returns an owned label so shared handles can implement the trait.
pub trait Control {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

// =============================================================================
// BUTTON STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Active,
    Inactive,
}

impl ButtonState {
    #[must_use]
    pub fn from_active(is_active: bool) -> Self {
        if is_active { Self::Active } else { Self::Inactive }
    }

    /// Initial state for a paper given the user's favorite ids.
    #[must_use]
    pub fn for_paper(paper_id: &PaperId, favorite_ids: &HashSet<PaperId>) -> Self {
        Self::from_active(favorite_ids.contains(paper_id))
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Active => FILLED_STAR,
            Self::Inactive => EMPTY_STAR,
        }
    }

    #[must_use]
    pub fn is_outlined(self) -> bool {
        matches!(self, Self::Inactive)
    }
}

/// Write `state` onto `control`, whatever it showed before.
pub fn apply_state(control: &mut impl Control, state: ButtonState) {
    control.set_text(state.glyph());
    if state.is_outlined() {
        control.add_class(OUTLINE_CLASS);
    } else {
        control.remove_class(OUTLINE_CLASS);
    }
}

/// Map a toggle result onto the button.
///
/// Success updates the control. Auth failures raise exactly one login notice.
/// Every other failure produces exactly one diagnostic. The control is left
/// untouched on any failure.
pub fn apply_toggle_result(
    control: &mut impl Control,
    result: &Result<ToggleResponse, FavoriteError>,
    notifier: &impl Notifier,
) {
    match result {
        Ok(response) => apply_state(control, ButtonState::from_active(response.is_active)),
        Err(err) if err.is_auth_required() => notifier.alert(LOGIN_NOTICE),
        Err(err) => notifier.diagnostic(err),
    }
}

// =============================================================================
// IN-MEMORY BUTTON
// =============================================================================

/// Headless `Control` used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteButton {
    text: String,
    classes: BTreeSet<String>,
}

impl FavoriteButton {
    #[must_use]
    pub fn new(text: &str, classes: &[&str]) -> Self {
        Self { text: text.to_owned(), classes: classes.iter().map(|c| (*c).to_owned()).collect() }
    }

    #[must_use]
    pub fn with_state(state: ButtonState) -> Self {
        let mut button = Self::default();
        apply_state(&mut button, state);
        button
    }

    /// Space-separated class list, as it would appear in a `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl Control for FavoriteButton {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

/// One button shared by several in-flight clicks. Each click holds its own
/// clone of the handle; whichever response resolves last sets the label.
impl<C: Control> Control for Rc<RefCell<C>> {
    fn text(&self) -> String {
        self.borrow().text()
    }

    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }

    fn has_class(&self, class: &str) -> bool {
        self.borrow().has_class(class)
    }

    fn add_class(&mut self, class: &str) {
        self.borrow_mut().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.borrow_mut().remove_class(class);
    }
}

#[cfg(test)]
#[path = "button_test.rs"]
mod tests;
