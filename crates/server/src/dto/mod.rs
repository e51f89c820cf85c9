mod request;
mod route;
mod warning;

pub use request::*;
pub use route::*;
pub use warning::*;
