//! Row types for the enumerated interface and capture-device tables.

use std::net::IpAddr;

use pnet_datalink::MacAddr;

/// A single row of the OS interface table.
///
/// Carries the two fields the OS keys an interface by that are not addresses:
/// the canonical name and the link-layer address. Bound addresses are queried
/// separately via [`InterfaceProvider::addresses_of`](super::InterfaceProvider::addresses_of)
/// because that lookup can fail independently of enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// The canonical OS-level interface name (e.g. "eth0").
    pub name: String,
    /// The link-layer (MAC) address, if the OS reports one.
    ///
    /// Loopback and some tunnel interfaces have none.
    pub hardware_address: Option<MacAddr>,
}

impl InterfaceEntry {
    /// Creates a new interface table row.
    #[must_use]
    pub fn new(name: impl Into<String>, hardware_address: Option<MacAddr>) -> Self {
        Self {
            name: name.into(),
            hardware_address,
        }
    }
}

/// A single row of the capture-device table.
///
/// The device name is what the capture subsystem expects when opening the
/// interface for raw capture; it may differ from the OS interface name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDevice {
    /// The name the capture subsystem uses to open this interface.
    pub name: String,
    /// Addresses the capture subsystem reports as bound to this device,
    /// in reported order.
    pub addresses: Vec<IpAddr>,
}

impl CaptureDevice {
    /// Creates a new capture-device table row.
    #[must_use]
    pub fn new(name: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }

    /// Returns true if `ip` appears in this device's address list.
    #[must_use]
    pub fn is_bound_to(&self, ip: IpAddr) -> bool {
        self.addresses.contains(&ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod interface_entry {
        use super::*;

        #[test]
        fn new_accepts_missing_hardware_address() {
            let entry = InterfaceEntry::new("lo", None);

            assert_eq!(entry.name, "lo");
            assert!(entry.hardware_address.is_none());
        }

        #[test]
        fn new_keeps_hardware_address() {
            let mac: MacAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
            let entry = InterfaceEntry::new("eth0", Some(mac));

            assert_eq!(entry.hardware_address, Some(mac));
        }
    }

    mod capture_device {
        use super::*;

        #[test]
        fn is_bound_to_matches_listed_address() {
            let device = CaptureDevice::new("eth0", vec!["192.168.1.10".parse().unwrap()]);

            assert!(device.is_bound_to("192.168.1.10".parse().unwrap()));
            assert!(!device.is_bound_to("192.168.1.11".parse().unwrap()));
        }

        #[test]
        fn is_bound_to_false_for_empty_address_list() {
            let device = CaptureDevice::new("any", vec![]);

            assert!(!device.is_bound_to("127.0.0.1".parse().unwrap()));
        }

        #[test]
        fn is_bound_to_distinguishes_families() {
            let device = CaptureDevice::new("eth0", vec!["::1".parse().unwrap()]);

            assert!(device.is_bound_to("::1".parse().unwrap()));
            assert!(!device.is_bound_to("127.0.0.1".parse().unwrap()));
        }
    }
}
