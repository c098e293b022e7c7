//! The cross-source resolution algorithm.

use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::IpNetwork;

use super::{PartialRecord, ResolveError, ResolvedInterface};
use crate::provider::{
    CaptureDeviceProvider, InterfaceEntry, InterfaceProvider, PcapDevices, SystemInterfaces,
};

/// Resolves one identifier against the two enumeration tables.
///
/// The identifier is classified as an IP literal or an interface name, the
/// owning OS interface is found through the matching table, and the capture
/// device is then found by the resolved address. The resolved IP is the join
/// key across all three sources, since it is the one value they share.
///
/// Holds only the two providers; each call is independent and read-only, so
/// concurrent calls on one `Resolver` are safe.
#[derive(Debug, Clone)]
pub struct Resolver<I, C> {
    interfaces: I,
    devices: C,
}

impl<I: InterfaceProvider, C: CaptureDeviceProvider> Resolver<I, C> {
    /// Creates a resolver over the given providers.
    #[must_use]
    pub const fn new(interfaces: I, devices: C) -> Self {
        Self {
            interfaces,
            devices,
        }
    }

    /// Resolves an interface name or a bound IP address to the full record.
    ///
    /// # Errors
    ///
    /// Every failure is terminal; see [`ResolveError`] for the taxonomy.
    /// Partial success is never returned: either all lookups succeed and the
    /// record comes back fully populated, or the first failing lookup's error
    /// comes back instead.
    pub fn resolve(&self, identifier: &str) -> Result<ResolvedInterface, ResolveError> {
        let (ip, owner) = match identifier.parse::<IpAddr>() {
            Ok(ip) => {
                tracing::debug!(%ip, "identifier classified as IP literal");
                (ip, self.owner_of(ip)?)
            }
            Err(_) => {
                tracing::debug!(name = identifier, "identifier classified as interface name");
                let (ip, owner) = self.first_ipv4_of(identifier)?;
                (IpAddr::V4(ip), owner)
            }
        };

        let partial = PartialRecord::resolved_os_side(ip, &owner);
        let capture_device_name = self.capture_device_for(ip, partial)?;
        tracing::debug!(
            %ip,
            os_name = %owner.name,
            capture_device = %capture_device_name,
            "interface resolved"
        );

        Ok(ResolvedInterface {
            ip,
            hardware_address: owner.hardware_address,
            os_name: owner.name,
            capture_device_name,
        })
    }

    /// Name path: finds the named interface and selects its first bound IPv4
    /// address.
    ///
    /// Selection walks the bound addresses in provider order and takes the
    /// first entry that parses as an address-with-prefix and is IPv4;
    /// unparseable and non-IPv4 entries are skipped. An interface whose
    /// addresses are all skipped fails here rather than continuing with no
    /// join key and dying downstream in the capture scan.
    fn first_ipv4_of(&self, name: &str) -> Result<(Ipv4Addr, InterfaceEntry), ResolveError> {
        let entry =
            self.interfaces
                .by_name(name)
                .ok_or_else(|| ResolveError::InterfaceNotFound {
                    name: name.to_string(),
                })?;

        let addrs = self
            .interfaces
            .addresses_of(name)
            .map_err(ResolveError::AddressQueryFailed)?;
        if addrs.is_empty() {
            return Err(ResolveError::NoAddressForInterface {
                name: name.to_string(),
                partial: PartialRecord::for_interface(&entry),
            });
        }

        let ip = addrs
            .iter()
            .find_map(|s| match s.parse::<IpNetwork>() {
                Ok(IpNetwork::V4(net)) => Some(net.ip()),
                _ => None,
            })
            .ok_or_else(|| ResolveError::NoIpv4AddressForInterface {
                name: name.to_string(),
                partial: PartialRecord::for_interface(&entry),
            })?;

        Ok((ip, entry))
    }

    /// IP path: reverse-scans the interface table for the address's owner.
    ///
    /// First match wins, in provider order. Address query errors abort the
    /// scan immediately; unparseable address entries are skipped.
    fn owner_of(&self, ip: IpAddr) -> Result<InterfaceEntry, ResolveError> {
        for entry in self.interfaces.all() {
            let addrs = self
                .interfaces
                .addresses_of(&entry.name)
                .map_err(ResolveError::AddressQueryFailed)?;

            let owns = addrs
                .iter()
                .filter_map(|s| s.parse::<IpNetwork>().ok())
                .any(|net| net.ip() == ip);
            if owns {
                tracing::debug!(%ip, os_name = %entry.name, "owning interface found");
                return Ok(entry.clone());
            }
        }

        Err(ResolveError::InterfaceNotFoundForIp {
            ip,
            partial: PartialRecord {
                ip: Some(ip),
                ..PartialRecord::default()
            },
        })
    }

    /// Capture tail: reverse-scans the device table for the resolved address.
    ///
    /// First match wins, in provider order.
    fn capture_device_for(
        &self,
        ip: IpAddr,
        partial: PartialRecord,
    ) -> Result<String, ResolveError> {
        self.devices
            .all_devices()
            .iter()
            .find(|device| device.is_bound_to(ip))
            .map(|device| device.name.clone())
            .ok_or(ResolveError::CaptureDeviceNotFound { partial })
    }
}

/// Resolves against the live host's interface and capture-device tables.
///
/// Convenience wrapper that snapshots [`SystemInterfaces`] and [`PcapDevices`]
/// and runs one resolution over them.
///
/// # Errors
///
/// [`ResolveError::Enumeration`] when the capture-device snapshot cannot be
/// loaded, otherwise whatever [`Resolver::resolve`] returns.
///
/// # Example
///
/// ```no_run
/// let record = ifident::resolve::resolve("eth0")?;
/// println!("capture via {}", record.capture_device_name);
/// # Ok::<(), ifident::resolve::ResolveError>(())
/// ```
pub fn resolve(identifier: &str) -> Result<ResolvedInterface, ResolveError> {
    let interfaces = SystemInterfaces::snapshot();
    let devices = PcapDevices::snapshot().map_err(ResolveError::Enumeration)?;
    Resolver::new(interfaces, devices).resolve(identifier)
}
