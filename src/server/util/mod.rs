pub mod parse;
pub mod translit;
