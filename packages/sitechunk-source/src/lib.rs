mod error;
mod http;
mod parse;

pub use error::{Error, Result};
pub use http::HttpSource;
pub use parse::Parser;
