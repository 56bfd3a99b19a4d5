pub const ERR_ACCESS_DENIED: &str = "access denied";
pub const ERR_BALLOT_NOT_FOUND: &str = "ballot not found";
pub const ERR_CANDIDATE_NOT_FOUND: &str = "candidate not found";
pub const ERR_NO_CANDIDATES: &str = "no candidates";

pub const ERR_VOTE_NOT_ACCEPTED: &str = "vote can't be accepted";
pub const ERR_WRONG_CANDIDATE_ID: &str = "wrong candidate id";
pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_WRONG_VOTE_VALUE: &str = "wrong vote value";
pub const ERR_REFUND_FAILED: &str = "failed to refund";

pub const ERR_CANNOT_FINISH: &str = "voting cannot be finished";
pub const ERR_PAYOUT_FAILED: &str = "failed to send prize";

pub const ERR_NOTHING_TO_WITHDRAW: &str = "nothing to withdraw";
pub const ERR_WITHDRAW_FAILED: &str = "failed to withdraw";
