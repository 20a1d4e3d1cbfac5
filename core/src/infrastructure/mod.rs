pub mod classification;
pub mod history;
pub mod http;
pub mod llm;
pub mod nutrition;
pub mod vision;
