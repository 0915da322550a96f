pub mod card;
pub mod deck;
pub mod hand;
pub mod sim;
