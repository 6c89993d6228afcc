mod question;
mod render;
mod results;
mod settings;
mod start;

pub use render::render;
