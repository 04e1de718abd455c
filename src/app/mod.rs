pub mod server;

pub use server::{build_router, serve, INFORMATION_PATH};
