#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod errors;
pub mod events;
pub mod pay_to_vote_proxy;
pub mod payout;
pub mod registry;
pub mod resolution;
pub mod storage;
pub mod treasury;
pub mod types;
pub mod voting;

// ============================================================
// Constants
// ============================================================

/// Voting window: 3 days in seconds
pub const VOTING_PERIOD: u64 = 3 * 24 * 60 * 60;

/// Price of a single vote: 0.01 EGLD
pub const VOTE_COST: u64 = 10_000_000_000_000_000;

/// Part of every vote kept by the operator: 0.001 EGLD
pub const FEE: u64 = 1_000_000_000_000_000;

/// Part of every vote added to the ballot's prize pool
pub const POOL_SHARE: u64 = VOTE_COST - FEE;

// ============================================================
// Contract
// ============================================================

/// Pay-to-vote ballots. The operator opens ballots over a fixed list of
/// candidates; anyone may vote once per ballot by paying `VOTE_COST`.
/// After the deadline anyone may finish the ballot, which sends the pool
/// to the most voted candidate. `FEE` of every vote accrues to the
/// operator and is withdrawn separately.
#[multiversx_sc::contract]
pub trait PayToVote:
    storage::StorageModule
    + events::EventsModule
    + access::AccessModule
    + payout::PayoutModule
    + registry::RegistryModule
    + voting::VotingModule
    + resolution::ResolutionModule
    + treasury::TreasuryModule
{
    #[init]
    fn init(&self) {
        let operator = self.blockchain().get_caller();
        self.operator().set(&operator);
        self.ballot_count().set(0u64);
        self.fees().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue3<u64, BigUint, BigUint> {
        (
            VOTING_PERIOD,
            BigUint::from(VOTE_COST),
            BigUint::from(FEE),
        )
            .into()
    }
}
