multiversx_sc::imports!();

use crate::errors::ERR_ACCESS_DENIED;

/// Operator gate. Applied per endpoint: ballot creation and fee withdrawal
/// call it, finishing a ballot deliberately does not.
#[multiversx_sc::module]
pub trait AccessModule: crate::storage::StorageModule {
    fn require_operator(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.operator().get(), ERR_ACCESS_DENIED);
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.operator().get()
    }
}
