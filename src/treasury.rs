multiversx_sc::imports!();

use crate::errors::{ERR_NOTHING_TO_WITHDRAW, ERR_WITHDRAW_FAILED};

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessModule
    + crate::payout::PayoutModule
{
    // ========================================================
    // ENDPOINT: withdrawFees
    // Operator only. A zero `to` means the operator, a zero
    // `amount` means the whole balance.
    // ========================================================

    #[endpoint(withdrawFees)]
    fn withdraw_fees(&self, to: ManagedAddress, amount: BigUint) {
        self.require_operator();

        let to = if to.is_zero() {
            self.operator().get()
        } else {
            to
        };
        let balance = self.fees().get();
        let amount = if amount == 0u64 { balance.clone() } else { amount };

        require!(amount > 0u64, ERR_NOTHING_TO_WITHDRAW);
        require!(amount <= balance, ERR_WITHDRAW_FAILED);
        self.require_can_receive(&to, &amount, ERR_WITHDRAW_FAILED);

        self.fees().set(&balance - &amount);
        self.send_egld(&to, &amount);

        self.fee_withdrawal_event(&to, &amount);
    }

    #[view(fees)]
    fn get_fees(&self) -> BigUint {
        self.fees().get()
    }
}
