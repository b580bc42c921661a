pub mod html;
pub mod model;
pub mod server;
