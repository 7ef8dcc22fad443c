//! Common reusable UI components shared by the pages

pub mod form;
pub mod message;
pub mod spinner;
pub mod tabs;
pub mod upload;

pub use form::{CheckboxField, OptionSelect, SelectField, TextAreaField, TextField, str_options};
pub use message::{ErrorMessage, StatusLine, SuccessMessage};
pub use spinner::{LoadingLabel, LoadingSplash, Spinner};
pub use tabs::{StepIndicator, Tabs};
pub use upload::{FilePicker, PickedFile, upload};
