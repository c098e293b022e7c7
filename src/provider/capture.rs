//! Capture-device table backed by libpcap.

use super::{CaptureDevice, CaptureDeviceProvider, ProviderError};

/// Snapshot of the capture subsystem's device table.
///
/// Enumerates once at construction via [`pcap::Device::list`] and answers
/// every query from the captured data. Device order is the order libpcap
/// listed them.
#[derive(Debug, Clone)]
pub struct PcapDevices {
    devices: Vec<CaptureDevice>,
}

impl PcapDevices {
    /// Captures the current capture-device table.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Pcap`] when libpcap's device listing fails,
    /// e.g. for lack of capture privileges.
    pub fn snapshot() -> Result<Self, ProviderError> {
        let devices: Vec<CaptureDevice> = pcap::Device::list()?
            .into_iter()
            .map(|d| {
                let addresses = d.addresses.into_iter().map(|a| a.addr).collect();
                CaptureDevice::new(d.name, addresses)
            })
            .collect();

        tracing::debug!(devices = devices.len(), "captured pcap device table");
        Ok(Self { devices })
    }
}

impl CaptureDeviceProvider for PcapDevices {
    fn all_devices(&self) -> &[CaptureDevice] {
        &self.devices
    }
}
