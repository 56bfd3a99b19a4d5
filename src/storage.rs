multiversx_sc::imports!();

use crate::types::{Ballot, Candidate};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Access ──

    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Ballots ──

    /// Number of ballots ever created; also the next ballot id.
    #[storage_mapper("ballotCount")]
    fn ballot_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("ballots")]
    fn ballots(&self, ballot_id: u64) -> SingleValueMapper<Ballot<Self::Api>>;

    /// 1-based, like every VecMapper. Candidate index `i` lives at `i + 1`.
    #[storage_mapper("candidates")]
    fn candidates(&self, ballot_id: u64) -> VecMapper<Candidate<Self::Api>>;

    // ── Votes ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, ballot_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("totalVotes")]
    fn total_votes(&self, ballot_id: u64) -> SingleValueMapper<u64>;

    // ── Treasury ──

    #[storage_mapper("fees")]
    fn fees(&self) -> SingleValueMapper<BigUint>;
}
