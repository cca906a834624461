mod render;
mod server;

pub use render::render;
pub use server::serve;
