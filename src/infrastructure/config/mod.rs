//! Configuration persistence infrastructure module

mod xdg;

pub use xdg::XdgConfigStore;
