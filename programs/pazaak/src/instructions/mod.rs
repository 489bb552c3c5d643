pub mod cancel_room;
pub mod close_room;
pub mod create_room;
pub mod initialize_config;
pub mod join_room;
pub mod resolve_dispute;
pub mod settle_room;
pub mod treasury;
pub mod update_config;

pub use cancel_room::*;
pub use close_room::*;
pub use create_room::*;
pub use initialize_config::*;
pub use join_room::*;
pub use resolve_dispute::*;
pub use settle_room::*;
pub use update_config::*;
