//! Query traits for the two enumeration surfaces, and their error type.

use thiserror::Error;

use super::{CaptureDevice, InterfaceEntry};

/// Error type for enumeration operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The capture subsystem's device listing failed.
    #[error("capture device enumeration failed: {0}")]
    Pcap(#[from] pcap::Error),

    /// Platform-specific enumeration error with a generic message.
    #[error("platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Read-only access to the OS interface table.
///
/// # Design
///
/// - Implementations answer from a snapshot so that one resolution sees one
///   consistent view of the table.
/// - Enables dependency injection for testing with fixed tables instead of
///   the real host configuration.
///
/// # Ordering
///
/// [`all`](Self::all) and [`addresses_of`](Self::addresses_of) return entries
/// in the order the underlying source enumerated them. Implementations must
/// not re-sort: the resolver's reverse scans are first-match, so with
/// duplicate bindings (the same address on two interfaces) re-sorting would
/// change which interface wins.
pub trait InterfaceProvider: Send + Sync {
    /// Looks up the interface whose canonical name equals `name`.
    fn by_name(&self, name: &str) -> Option<InterfaceEntry>;

    /// Returns every interface in enumeration order.
    fn all(&self) -> &[InterfaceEntry];

    /// Returns the address-with-prefix strings bound to the named interface,
    /// in enumeration order (e.g. `"192.168.1.10/24"`).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the address query itself fails, which
    /// is distinct from the interface having no bound addresses (an empty
    /// vector).
    fn addresses_of(&self, name: &str) -> Result<Vec<String>, ProviderError>;
}

/// Read-only access to the capture-device table.
///
/// The same ordering rule applies as for [`InterfaceProvider`]: devices come
/// back in the order the capture subsystem listed them, never re-sorted.
pub trait CaptureDeviceProvider: Send + Sync {
    /// Returns every capture device in enumeration order.
    fn all_devices(&self) -> &[CaptureDevice];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTable {
        entries: Vec<InterfaceEntry>,
        addresses: Vec<Vec<String>>,
    }

    impl InterfaceProvider for FixedTable {
        fn by_name(&self, name: &str) -> Option<InterfaceEntry> {
            self.entries.iter().find(|e| e.name == name).cloned()
        }

        fn all(&self) -> &[InterfaceEntry] {
            &self.entries
        }

        fn addresses_of(&self, name: &str) -> Result<Vec<String>, ProviderError> {
            self.entries
                .iter()
                .position(|e| e.name == name)
                .map(|i| self.addresses[i].clone())
                .ok_or_else(|| ProviderError::Platform {
                    message: format!("unknown interface: {name}"),
                })
        }
    }

    fn table() -> FixedTable {
        FixedTable {
            entries: vec![
                InterfaceEntry::new("eth0", Some("aa:bb:cc:dd:ee:ff".parse().unwrap())),
                InterfaceEntry::new("lo", None),
            ],
            addresses: vec![vec!["192.168.1.10/24".to_string()], vec!["127.0.0.1/8".to_string()]],
        }
    }

    #[test]
    fn by_name_finds_matching_entry() {
        let entry = table().by_name("eth0").unwrap();

        assert_eq!(entry.name, "eth0");
        assert!(entry.hardware_address.is_some());
    }

    #[test]
    fn by_name_misses_unknown_name() {
        assert!(table().by_name("wlan0").is_none());
    }

    #[test]
    fn all_preserves_enumeration_order() {
        let names: Vec<_> = table().all().iter().map(|e| e.name.clone()).collect();

        assert_eq!(names, ["eth0", "lo"]);
    }

    #[test]
    fn addresses_of_returns_bound_addresses() {
        let addrs = table().addresses_of("lo").unwrap();

        assert_eq!(addrs, ["127.0.0.1/8"]);
    }

    #[test]
    fn addresses_of_fails_for_unknown_name() {
        let err = table().addresses_of("wlan0").unwrap_err();

        assert!(err.to_string().contains("wlan0"));
    }

    #[test]
    fn provider_error_platform_displays_message() {
        let error = ProviderError::Platform {
            message: "unsupported operation".to_string(),
        };
        assert!(error.to_string().contains("unsupported operation"));
    }
}
