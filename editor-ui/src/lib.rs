pub mod api;
pub mod bridge;
pub mod components;
pub mod config;
pub mod editor;
pub mod interop;
pub mod state;
pub mod storage;

pub use api::*;
pub use bridge::*;
pub use components::*;
pub use editor::*;
pub use interop::*;
pub use state::*;
pub use storage::*;
