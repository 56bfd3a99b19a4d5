multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("ballotCreated")]
    fn ballot_created_event(
        &self,
        #[indexed] id: u64,
        candidates: &ManagedVec<ManagedAddress>,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] ballot_id: u64,
        #[indexed] candidate_id: u32,
    );

    #[event("ballotFinished")]
    fn ballot_finished_event(
        &self,
        #[indexed] id: u64,
        #[indexed] winner_id: u32,
        #[indexed] winner: &ManagedAddress,
        amount_paid: &BigUint,
    );

    #[event("feeWithdrawal")]
    fn fee_withdrawal_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);
}
