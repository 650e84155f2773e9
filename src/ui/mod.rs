pub mod marker;
pub mod panels;
pub mod plot;
