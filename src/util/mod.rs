pub mod category;
pub mod similarity;
pub mod time;
