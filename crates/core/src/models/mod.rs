//! Data models for EtumLabs

mod admin;
mod event;
mod media;
mod news;
mod profile;

pub use admin::*;
pub use event::*;
pub use media::*;
pub use news::*;
pub use profile::*;
