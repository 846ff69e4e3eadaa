//! Page components for InkFox.

mod index;
mod not_found;

pub use index::Index;
pub use not_found::PageNotFound;
