mod algebra;
mod command;
mod compound;
mod convert;
mod core;
mod map;
mod option;
mod shared;

pub use self::algebra::*;
pub use self::command::*;
pub use self::compound::*;
pub use self::core::*;
pub use self::map::*;
pub use self::option::*;
pub use self::shared::*;
