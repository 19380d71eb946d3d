//! Admin dashboard components.

mod animated_card;
mod confirmation_dialog;
mod empty_state;
mod form_success_message;
mod inline_loader;
pub mod pages;
mod screen_reader_only;
mod status_badge;

pub use animated_card::{AnimatedCard, card_class};
pub use confirmation_dialog::{
    ConfirmationDialog, confirm_label, confirmation_message, is_dismiss_key, should_dismiss,
};
pub use empty_state::EmptyState;
pub use form_success_message::FormSuccessMessage;
pub use inline_loader::{InlineLoader, LoaderSize};
pub use pages::{AdminContactPage, AdminSettingsPage};
pub use screen_reader_only::ScreenReaderOnly;
pub use status_badge::{StatusBadge, badge_class};
