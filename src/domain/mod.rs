mod account;
mod event;
mod money;

pub use account::*;
pub use event::*;
pub use money::*;
