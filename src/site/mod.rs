pub mod content;
mod html;
mod pages;

pub use html::escape;
pub use pages::{checker_page, contact_page, landing_page, CheckerView, ContactTab, ContactView};
