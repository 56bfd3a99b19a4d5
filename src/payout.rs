multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PayoutModule {
    /// Whether a plain EGLD transfer to `address` would be accepted.
    /// User accounts always accept; contracts only when deployed payable.
    fn can_receive_egld(&self, address: &ManagedAddress) -> bool {
        if !self.blockchain().is_smart_contract(address) {
            return true;
        }
        let metadata = self.blockchain().get_code_metadata(address);
        metadata.is_payable() || metadata.is_payable_by_sc()
    }

    /// Checks the recipient before any storage is touched, so callers can
    /// fail with their own message. Must be called ahead of the mutations
    /// that `send_egld` settles.
    fn require_can_receive(&self, to: &ManagedAddress, amount: &BigUint, err_msg: &str) {
        if *amount > 0u64 {
            require!(self.can_receive_egld(to), err_msg);
        }
    }

    fn send_egld(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct_egld(to, amount);
        }
    }
}
