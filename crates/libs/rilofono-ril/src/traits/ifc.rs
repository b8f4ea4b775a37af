use crate::error::{IfcError, IfcStep};

/// Network interface configuration primitives.
///
/// Return codes follow the netutils convention: 0 on success, anything else
/// on failure.
pub trait InterfaceConfigurator: Send + Sync {
    /// Assign `ipaddr/prefix_length`, install the default route via
    /// `gateway` and set the DNS servers. Address arguments use the
    /// OEM-hook wire encoding.
    fn configure(
        &self,
        ifname: &str,
        ipaddr: i32,
        prefix_length: u32,
        gateway: i32,
        dns1: i32,
        dns2: i32,
    ) -> i32;

    fn remove_default_route(&self, ifname: &str) -> i32;

    fn clear_addresses(&self, ifname: &str) -> i32;

    fn down(&self, ifname: &str) -> i32;

    /// Tear down `ifname`: default route, then addresses, then link.
    ///
    /// Every step runs even if an earlier one fails; the first failure is
    /// returned.
    fn remove(&self, ifname: &str) -> Result<(), IfcError> {
        let steps = [
            (IfcStep::RemoveDefaultRoute, self.remove_default_route(ifname)),
            (IfcStep::ClearAddresses, self.clear_addresses(ifname)),
            (IfcStep::Down, self.down(ifname)),
        ];
        match steps.into_iter().find(|(_, code)| *code != 0) {
            Some((step, code)) => Err(IfcError {
                ifname: ifname.to_string(),
                step,
                code,
            }),
            None => Ok(()),
        }
    }
}
