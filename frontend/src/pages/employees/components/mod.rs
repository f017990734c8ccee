pub mod card;
pub mod search;
