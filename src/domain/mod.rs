pub mod composer;
pub mod enums;
pub mod presentation;
pub mod tags;

pub use composer::{HistoryEntry, IdeaComposer};
pub use enums::{DisplayMode, Field, Language, TextColor, TextSize, UiMode};
pub use presentation::{Background, Presentation};
