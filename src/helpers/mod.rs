//! Helper functions shared by components, the document shell and commands

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
