multiversx_sc::imports!();

use crate::errors::{ERR_BALLOT_NOT_FOUND, ERR_CANDIDATE_NOT_FOUND, ERR_NO_CANDIDATES};
use crate::types::{Ballot, Candidate, Resolution};
use crate::VOTING_PERIOD;

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::access::AccessModule
{
    // ========================================================
    // ENDPOINT: createBallot
    // Operator only. Ids are sequential from 0 and never reused.
    // ========================================================

    #[endpoint(createBallot)]
    fn create_ballot(&self, candidates: MultiValueEncoded<ManagedAddress>) -> u64 {
        self.require_operator();

        let addresses = candidates.to_vec();
        require!(!addresses.is_empty(), ERR_NO_CANDIDATES);

        let ballot_id = self.ballot_count().get();
        let deadline = self.blockchain().get_block_timestamp() + VOTING_PERIOD;

        let mut candidates_mapper = self.candidates(ballot_id);
        for address in addresses.iter() {
            candidates_mapper.push(&Candidate {
                address: address.clone_value(),
                vote_count: 0,
            });
        }

        let ballot = Ballot {
            candidates_count: addresses.len() as u32,
            deadline,
            pool: BigUint::zero(),
            resolution: Resolution::Unresolved,
        };
        self.ballots(ballot_id).set(&ballot);
        self.ballot_count().set(ballot_id + 1);

        self.ballot_created_event(ballot_id, &addresses);

        ballot_id
    }

    // ========================================================
    // INTERNAL: lookups that fail on unknown ids
    // ========================================================

    fn ballot_exists(&self, ballot_id: u64) -> bool {
        ballot_id < self.ballot_count().get()
    }

    fn require_ballot(&self, ballot_id: u64) -> Ballot<Self::Api> {
        require!(self.ballot_exists(ballot_id), ERR_BALLOT_NOT_FOUND);
        self.ballots(ballot_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(totalBallots)]
    fn total_ballots(&self) -> u64 {
        self.ballot_count().get()
    }

    #[view(getBallot)]
    fn get_ballot(&self, ballot_id: u64) -> Ballot<Self::Api> {
        self.require_ballot(ballot_id)
    }

    #[view(getCandidate)]
    fn get_candidate(&self, ballot_id: u64, index: u32) -> Candidate<Self::Api> {
        let ballot = self.require_ballot(ballot_id);
        require!(index < ballot.candidates_count, ERR_CANDIDATE_NOT_FOUND);
        self.candidates(ballot_id).get(index as usize + 1)
    }

    #[view(getCandidates)]
    fn get_candidates(&self, ballot_id: u64) -> MultiValueEncoded<Candidate<Self::Api>> {
        require!(self.ballot_exists(ballot_id), ERR_BALLOT_NOT_FOUND);
        let mut result = MultiValueEncoded::new();
        for candidate in self.candidates(ballot_id).iter() {
            result.push(candidate);
        }
        result
    }

    /// Recorded winner index once finished, nothing while voting is open.
    #[view(getWinnerId)]
    fn get_winner_id(&self, ballot_id: u64) -> OptionalValue<u32> {
        self.require_ballot(ballot_id).winner_id().into()
    }
}
