pub mod cell;
pub mod column;
pub mod config;
pub mod household;
pub mod pin;
pub mod tab;

pub use cell::*;
pub use column::*;
pub use config::*;
pub use household::*;
pub use pin::*;
pub use tab::*;
