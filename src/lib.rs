//! ifident: local network interface identity resolution.
//!
//! Given an OS interface name ("eth0") or one of its bound IP addresses,
//! produces one record holding the IP address, hardware (MAC) address,
//! canonical OS name, and the name the packet-capture subsystem uses to open
//! the interface. The three sources are keyed inconsistently (name, address,
//! device name); the resolved IP is the join key reconciling them.

pub mod provider;
pub mod resolve;
