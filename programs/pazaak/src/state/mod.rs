pub mod commitment;
pub mod config;
pub mod enums;
pub mod room;
pub mod seeds;

pub use commitment::*;
pub use config::*;
pub use enums::*;
pub use room::*;
pub use seeds::*;
