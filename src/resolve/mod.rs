//! Interface identity resolution.
//!
//! This module provides:
//! - The resolved record ([`ResolvedInterface`]) and its in-progress draft
//!   carried inside errors ([`PartialRecord`])
//! - The resolution engine over injectable providers ([`Resolver`])
//! - A convenience entry point over the live host ([`resolve`])
//! - The failure taxonomy ([`ResolveError`])

mod error;
mod record;
mod resolver;


pub use error::ResolveError;
pub use record::{PartialRecord, ResolvedInterface};
pub use resolver::{Resolver, resolve};
