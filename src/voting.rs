multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_REFUND_FAILED, ERR_VOTE_NOT_ACCEPTED, ERR_WRONG_CANDIDATE_ID,
    ERR_WRONG_VOTE_VALUE,
};
use crate::{FEE, POOL_SHARE, VOTE_COST};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessModule
    + crate::payout::PayoutModule
    + crate::registry::RegistryModule
{
    // ========================================================
    // ENDPOINT: vote
    // One vote per address per ballot, for exactly VOTE_COST.
    // Anything above VOTE_COST is refunded in the same call.
    // ========================================================

    #[endpoint(vote)]
    #[payable("EGLD")]
    fn vote(&self, ballot_id: u64, candidate_id: u32) {
        let voter = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        let now = self.blockchain().get_block_timestamp();

        require!(self.ballot_exists(ballot_id), ERR_VOTE_NOT_ACCEPTED);
        let mut ballot = self.ballots(ballot_id).get();
        require!(ballot.is_accepting_votes(now), ERR_VOTE_NOT_ACCEPTED);
        require!(
            candidate_id < ballot.candidates_count,
            ERR_WRONG_CANDIDATE_ID
        );
        require!(
            !self.has_voted(ballot_id, &voter).get(),
            ERR_ALREADY_VOTED
        );

        let vote_cost = BigUint::from(VOTE_COST);
        require!(payment >= vote_cost, ERR_WRONG_VOTE_VALUE);

        // ── Refund must be deliverable before anything is recorded ──
        let excess = &payment - &vote_cost;
        self.require_can_receive(&voter, &excess, ERR_REFUND_FAILED);

        // ── Commit ──
        self.has_voted(ballot_id, &voter).set(true);

        let slot = candidate_id as usize + 1;
        let mut candidate = self.candidates(ballot_id).get(slot);
        candidate.vote_count += 1;
        self.candidates(ballot_id).set(slot, &candidate);

        self.total_votes(ballot_id).update(|total| *total += 1);

        ballot.pool += POOL_SHARE;
        self.ballots(ballot_id).set(&ballot);
        self.fees().update(|fees| *fees += FEE);

        self.send_egld(&voter, &excess);

        self.voted_event(&voter, ballot_id, candidate_id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(totalVotes)]
    fn get_total_votes(&self, ballot_id: u64) -> u64 {
        self.total_votes(ballot_id).get()
    }

    #[view(hasVoted)]
    fn get_has_voted(&self, ballot_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(ballot_id, voter).get()
    }
}
