pub mod form;
pub mod loading;
pub mod message;
