pub mod letters;

pub use letters::LetterBag;
