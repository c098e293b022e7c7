//! Enumeration providers for the two external lookup tables.
//!
//! This module provides:
//! - Row types for the enumerated tables ([`InterfaceEntry`], [`CaptureDevice`])
//! - Injectable query traits ([`InterfaceProvider`], [`CaptureDeviceProvider`])
//! - Real implementations backed by the host ([`SystemInterfaces`], [`PcapDevices`])
//!
//! # Snapshot semantics
//!
//! The real providers load their table once at construction and answer every
//! query from that in-memory snapshot. A single resolution therefore sees one
//! consistent view of the host's network configuration, and iteration order is
//! exactly the order the OS or libpcap reported.

mod capture;
mod entry;
mod source;
mod system;

pub use capture::PcapDevices;
pub use entry::{CaptureDevice, InterfaceEntry};
pub use source::{CaptureDeviceProvider, InterfaceProvider, ProviderError};
pub use system::SystemInterfaces;
