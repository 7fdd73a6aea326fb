mod base;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub(crate) use interface::*;
pub use middleware::*;
pub use printer::*;
