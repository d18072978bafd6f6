pub mod loading_spinner;

pub use loading_spinner::InlineSpinner;
