pub mod card;
pub mod editor;
