pub mod card;
pub mod components;
pub mod embed;
