//! OS interface table backed by `pnet_datalink`.

use super::{InterfaceEntry, InterfaceProvider, ProviderError};

/// Snapshot of the host's interface table.
///
/// Enumerates once at construction via [`pnet_datalink::interfaces`] and
/// answers every query from the captured data, so one resolution works
/// against one consistent view of the host. Entry order is the OS-reported
/// order.
///
/// # Example
///
/// ```no_run
/// use ifident::provider::{InterfaceProvider, SystemInterfaces};
///
/// let interfaces = SystemInterfaces::snapshot();
/// for entry in interfaces.all() {
///     println!("{}: {:?}", entry.name, entry.hardware_address);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SystemInterfaces {
    entries: Vec<InterfaceEntry>,
    // Parallel to `entries`; CIDR strings as the OS reports them.
    addresses: Vec<Vec<String>>,
}

impl SystemInterfaces {
    /// Captures the current interface table.
    #[must_use]
    pub fn snapshot() -> Self {
        let mut entries = Vec::new();
        let mut addresses = Vec::new();

        for ifi in pnet_datalink::interfaces() {
            entries.push(InterfaceEntry::new(ifi.name.clone(), ifi.mac));
            addresses.push(ifi.ips.iter().map(ToString::to_string).collect());
        }

        tracing::debug!(interfaces = entries.len(), "captured OS interface table");
        Self { entries, addresses }
    }
}

impl InterfaceProvider for SystemInterfaces {
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
                message: format!("interface not in snapshot: {name}"),
            })
    }
}
