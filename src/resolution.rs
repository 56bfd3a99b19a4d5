multiversx_sc::imports!();

use crate::errors::{ERR_BALLOT_NOT_FOUND, ERR_CANNOT_FINISH, ERR_PAYOUT_FAILED};
use crate::types::{leading_candidate, Resolution, WinnerOutcome};

#[multiversx_sc::module]
pub trait ResolutionModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessModule
    + crate::payout::PayoutModule
    + crate::registry::RegistryModule
{
    // ========================================================
    // ENDPOINT: finishVote
    // Permissionless once the deadline has passed. Records the
    // winner and pays out the pool in one step. If the winner
    // cannot receive EGLD nothing is recorded and the call can
    // be retried later.
    // ========================================================

    #[endpoint(finishVote)]
    fn finish_vote(&self, ballot_id: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(self.ballot_exists(ballot_id), ERR_CANNOT_FINISH);
        let mut ballot = self.ballots(ballot_id).get();
        require!(ballot.can_finish(now), ERR_CANNOT_FINISH);

        let (winner, outcome) = self.compute_winner(ballot_id);
        let amount_paid = core::mem::replace(&mut ballot.pool, BigUint::zero());
        self.require_can_receive(&winner, &amount_paid, ERR_PAYOUT_FAILED);

        ballot.resolution = Resolution::Resolved(outcome);
        self.ballots(ballot_id).set(&ballot);

        self.send_egld(&winner, &amount_paid);

        let winner_id = outcome.winner_id(ballot.candidates_count);
        self.ballot_finished_event(ballot_id, winner_id, &winner, &amount_paid);
    }

    // ========================================================
    // INTERNAL: winner computation
    // ========================================================

    /// Current leader of a ballot. With no votes at all, the operator
    /// stands in as recipient.
    fn compute_winner(&self, ballot_id: u64) -> (ManagedAddress, WinnerOutcome) {
        let candidates = self.candidates(ballot_id);
        match leading_candidate(candidates.iter().map(|c| c.vote_count)) {
            Some(index) => {
                let leader = candidates.get(index as usize + 1);
                (leader.address, WinnerOutcome::Candidate(index))
            },
            None => (
                self.operator().get(),
                WinnerOutcome::NoVotesDefaultOperator,
            ),
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Who would win if the ballot were finished now. Returns
    /// `(winner, winnerId)`, where `winnerId == candidatesCount`
    /// means nobody has voted and the operator stands in.
    #[view(currentWinner)]
    fn current_winner(&self, ballot_id: u64) -> MultiValue2<ManagedAddress, u32> {
        require!(self.ballot_exists(ballot_id), ERR_BALLOT_NOT_FOUND);
        let candidates_count = self.ballots(ballot_id).get().candidates_count;
        let (winner, outcome) = self.compute_winner(ballot_id);
        (winner, outcome.winner_id(candidates_count)).into()
    }
}
