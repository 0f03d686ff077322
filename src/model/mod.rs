pub mod api;
pub mod award;
pub mod bracket;
pub mod db;
pub mod import;
pub mod standing;
