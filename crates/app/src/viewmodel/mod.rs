//! View models for the site pages
//!
//! Each page keeps its state behind `&self` so a pending submission and
//! the page that owns it can be driven at the same time.

mod admin;
mod auth;
mod events;
mod gallery;
mod nav;
mod news;
mod profile;
mod protected;
mod register;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use admin::AdminViewModel;
pub use auth::LoginViewModel;
pub use events::{EventsViewModel, ViewMode};
pub use gallery::GalleryViewModel;
pub use nav::NavigationViewModel;
pub use news::NewsViewModel;
pub use profile::ProfileViewModel;
pub use protected::ViewOutcome;
pub use register::RegisterViewModel;

/// Lock page state; a poisoned lock still yields the data
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
