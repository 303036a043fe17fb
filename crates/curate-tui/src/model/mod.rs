pub mod feed;
pub mod form;
pub mod papers;
