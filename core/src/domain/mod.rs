pub mod chat;
pub mod common;
pub mod food_analysis;
pub mod food_recognition;
pub mod nutrition;
pub mod portion;

#[cfg(test)]
pub(crate) mod test_doubles;
