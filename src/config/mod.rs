//! Configuration management.

mod xdg;

pub use xdg::XdgDirs;
