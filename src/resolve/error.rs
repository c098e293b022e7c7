//! Error types for interface resolution.

use std::net::IpAddr;

use thiserror::Error;

use super::PartialRecord;
use crate::provider::ProviderError;

/// Error type for [`Resolver::resolve`](super::Resolver::resolve).
///
/// Every failure is terminal and surfaces immediately; there is no internal
/// retry or fallback interface. Variants carry the input and the partial
/// record built so far, so callers can see how far resolution got.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input name does not match any OS interface.
    #[error("no interface named {name:?}")]
    InterfaceNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The OS address-enumeration call itself failed.
    ///
    /// Distinct from an interface reporting no addresses.
    #[error("address query failed: {0}")]
    AddressQueryFailed(#[source] ProviderError),

    /// The named interface exists but reports zero bound addresses.
    #[error("no address bound to interface {name:?} ({partial})")]
    NoAddressForInterface {
        /// The name that was looked up.
        name: String,
        /// What had been resolved before the failure.
        partial: PartialRecord,
    },

    /// The named interface has bound addresses, but none of them is IPv4.
    #[error("no IPv4 address bound to interface {name:?} ({partial})")]
    NoIpv4AddressForInterface {
        /// The name that was looked up.
        name: String,
        /// What had been resolved before the failure.
        partial: PartialRecord,
    },

    /// No OS interface's bound addresses contain the input address.
    #[error("no interface owns address {ip} ({partial})")]
    InterfaceNotFoundForIp {
        /// The address that was looked up.
        ip: IpAddr,
        /// What had been resolved before the failure.
        partial: PartialRecord,
    },

    /// No capture device's address list contains the resolved address.
    #[error("no capture device bound to resolved address ({partial})")]
    CaptureDeviceNotFound {
        /// What had been resolved before the failure.
        partial: PartialRecord,
    },

    /// Loading one of the enumeration snapshots failed.
    ///
    /// Only produced by the convenience entry point
    /// [`resolve`](super::resolve), before the algorithm proper starts.
    #[error("enumeration failed: {0}")]
    Enumeration(#[source] ProviderError),
}
