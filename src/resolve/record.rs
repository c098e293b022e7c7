//! The resolved-interface record and its in-progress draft.

use std::fmt;
use std::net::IpAddr;

use pnet_datalink::MacAddr;
use serde::{Serialize, Serializer};

use crate::provider::InterfaceEntry;

/// A local network interface's resolved identity.
///
/// Produced only fully populated: `ip` and `capture_device_name` are always
/// set, `os_name` is always non-empty, and `hardware_address` is absent only
/// when the OS reports none for the owning interface. Immutable once
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInterface {
    /// The address the three tables were joined on.
    pub ip: IpAddr,
    /// The owning interface's link-layer (MAC) address, if the OS reports one.
    #[serde(serialize_with = "mac_as_string")]
    pub hardware_address: Option<MacAddr>,
    /// The canonical OS-level interface name (e.g. "eth0").
    pub os_name: String,
    /// The name the capture subsystem uses to open this interface.
    pub capture_device_name: String,
}

impl fmt::Display for ResolvedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip={} mac={} os_name={} capture_device={}",
            self.ip,
            OptionalMac(self.hardware_address),
            self.os_name,
            self.capture_device_name
        )
    }
}

/// The partially built record carried inside errors for diagnosis.
///
/// Shows how far resolution got before it failed; unset fields print as `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    /// The join address, once known.
    pub ip: Option<IpAddr>,
    /// The owning interface's link-layer address, once known.
    pub hardware_address: Option<MacAddr>,
    /// The owning interface's canonical name, once known.
    pub os_name: Option<String>,
}

impl PartialRecord {
    /// Draft for an interface found in the OS table, before an address is
    /// selected.
    #[must_use]
    pub fn for_interface(entry: &InterfaceEntry) -> Self {
        Self {
            ip: None,
            hardware_address: entry.hardware_address,
            os_name: Some(entry.name.clone()),
        }
    }

    /// Draft after the OS-level lookups succeeded, entering the capture tail.
    #[must_use]
    pub fn resolved_os_side(ip: IpAddr, entry: &InterfaceEntry) -> Self {
        Self {
            ip: Some(ip),
            hardware_address: entry.hardware_address,
            os_name: Some(entry.name.clone()),
        }
    }
}

impl fmt::Display for PartialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            Some(ip) => write!(f, "ip={ip}")?,
            None => write!(f, "ip=?")?,
        }
        write!(f, " mac={}", OptionalMac(self.hardware_address))?;
        match &self.os_name {
            Some(name) => write!(f, " os_name={name}"),
            None => write!(f, " os_name=?"),
        }
    }
}

struct OptionalMac(Option<MacAddr>);

impl fmt::Display for OptionalMac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(mac) => write!(f, "{mac}"),
            None => write!(f, "?"),
        }
    }
}

/// Serializes the MAC as its textual form (`"aa:bb:cc:dd:ee:ff"`).
fn mac_as_string<S: Serializer>(mac: &Option<MacAddr>, ser: S) -> Result<S::Ok, S::Error> {
    match mac {
        Some(mac) => ser.serialize_some(&mac.to_string()),
        None => ser.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ResolvedInterface {
        ResolvedInterface {
            ip: "192.168.1.10".parse().unwrap(),
            hardware_address: Some("aa:bb:cc:dd:ee:ff".parse().unwrap()),
            os_name: "eth0".to_string(),
            capture_device_name: "eth0".to_string(),
        }
    }

    #[test]
    fn display_shows_all_fields() {
        let shown = record().to_string();

        assert_eq!(
            shown,
            "ip=192.168.1.10 mac=aa:bb:cc:dd:ee:ff os_name=eth0 capture_device=eth0"
        );
    }

    #[test]
    fn display_marks_missing_hardware_address() {
        let mut record = record();
        record.hardware_address = None;

        assert!(record.to_string().contains("mac=?"));
    }

    #[test]
    fn serializes_mac_as_string() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["ip"], "192.168.1.10");
        assert_eq!(json["hardware_address"], "aa:bb:cc:dd:ee:ff");
        assert_eq!(json["os_name"], "eth0");
        assert_eq!(json["capture_device_name"], "eth0");
    }

    #[test]
    fn serializes_missing_mac_as_null() {
        let mut record = record();
        record.hardware_address = None;

        let json = serde_json::to_value(record).unwrap();

        assert!(json["hardware_address"].is_null());
    }

    mod partial_record {
        use super::*;
        use crate::provider::InterfaceEntry;

        #[test]
        fn empty_draft_prints_placeholders() {
            let partial = PartialRecord::default();

            assert_eq!(partial.to_string(), "ip=? mac=? os_name=?");
        }

        #[test]
        fn for_interface_copies_entry_fields() {
            let entry = InterfaceEntry::new("eth0", Some("aa:bb:cc:dd:ee:ff".parse().unwrap()));
            let partial = PartialRecord::for_interface(&entry);

            assert_eq!(partial.os_name.as_deref(), Some("eth0"));
            assert_eq!(partial.hardware_address, entry.hardware_address);
            assert!(partial.ip.is_none());
        }

        #[test]
        fn resolved_os_side_sets_ip() {
            let entry = InterfaceEntry::new("eth0", None);
            let partial = PartialRecord::resolved_os_side("10.0.0.1".parse().unwrap(), &entry);

            assert_eq!(
                partial.to_string(),
                "ip=10.0.0.1 mac=? os_name=eth0"
            );
        }
    }
}
