mod card;
mod config;
pub mod constants;
mod game;
mod notice;
mod reducer;
mod source;
mod state;

pub use card::*;
pub use config::*;
pub use game::*;
pub use notice::*;
pub use reducer::*;
pub use source::*;
pub use state::*;
