multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Resolution: the permanent outcome of a ballot
// ============================================================

/// Who a closed ballot was resolved to.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum WinnerOutcome {
    /// Index of the winning candidate.
    Candidate(u32),
    /// Nobody voted. The (empty) pool goes to the operator.
    NoVotesDefaultOperator,
}

impl WinnerOutcome {
    /// Index reported to clients. The no-winner case maps to the
    /// `candidates_count` sentinel, one past the last valid index.
    pub fn winner_id(&self, candidates_count: u32) -> u32 {
        match self {
            WinnerOutcome::Candidate(index) => *index,
            WinnerOutcome::NoVotesDefaultOperator => candidates_count,
        }
    }
}

/// Set exactly once, by `finishVote`. Never reverted.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Resolution {
    Unresolved,
    Resolved(WinnerOutcome),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

// ============================================================
// Ballot: one election round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Ballot<M: ManagedTypeApi> {
    /// Fixed at creation, always >= 1
    pub candidates_count: u32,
    /// Voting closes at this block timestamp; finishing opens at it
    pub deadline: u64,
    /// Prize pool. Grows by VOTE_COST - FEE per vote, drained once on finish
    pub pool: BigUint<M>,
    pub resolution: Resolution,
}

impl<M: ManagedTypeApi> Ballot<M> {
    pub fn is_accepting_votes(&self, now: u64) -> bool {
        !self.resolution.is_resolved() && now < self.deadline
    }

    pub fn can_finish(&self, now: u64) -> bool {
        !self.resolution.is_resolved() && now >= self.deadline
    }

    /// Recorded winner index, `None` while unresolved.
    pub fn winner_id(&self) -> Option<u32> {
        match self.resolution {
            Resolution::Unresolved => None,
            Resolution::Resolved(outcome) => Some(outcome.winner_id(self.candidates_count)),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Candidate<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub vote_count: u64,
}

// ============================================================
// Tie-break
// ============================================================

/// Picks the candidate with the most votes. Only a strictly greater count
/// replaces the current leader, so ties go to the lowest index. Returns
/// `None` when no candidate has any votes.
pub fn leading_candidate<I>(vote_counts: I) -> Option<u32>
where
    I: IntoIterator<Item = u64>,
{
    let mut leader: Option<(u32, u64)> = None;
    for (index, votes) in vote_counts.into_iter().enumerate() {
        let best_votes = leader.map_or(0, |(_, best)| best);
        if votes > best_votes {
            leader = Some((index as u32, votes));
        }
    }
    leader.map(|(index, _)| index)
}
