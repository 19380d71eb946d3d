//! Admin page components for route-based navigation.

mod contact_page;
mod settings_page;

pub use contact_page::AdminContactPage;
pub use settings_page::AdminSettingsPage;
