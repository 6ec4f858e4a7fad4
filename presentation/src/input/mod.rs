//! Reading user input: curriculum text and the API credential

pub mod credential;
pub mod text;
