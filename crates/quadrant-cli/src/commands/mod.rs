pub mod results;
pub mod settings;
pub mod survey;
