use multiversx_sc::proxy_imports::*;

use crate::types::{Ballot, Candidate};

pub struct PayToVoteProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PayToVoteProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PayToVoteProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PayToVoteProxyMethods { wrapped_tx: tx }
    }
}

pub struct PayToVoteProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> PayToVoteProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> PayToVoteProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> PayToVoteProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Endpoints ──

    pub fn create_ballot<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        candidates: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createBallot")
            .argument(&candidates)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        ballot_id: Arg0,
        candidate_id: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("vote")
            .argument(&ballot_id)
            .argument(&candidate_id)
            .original_result()
    }

    pub fn finish_vote<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("finishVote")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn withdraw_fees<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawFees")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    // ── Views ──

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("owner")
            .original_result()
    }

    pub fn total_ballots(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalBallots")
            .original_result()
    }

    pub fn get_ballot<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Ballot<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBallot")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn get_candidate<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u32>>(
        self,
        ballot_id: Arg0,
        index: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Candidate<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidate")
            .argument(&ballot_id)
            .argument(&index)
            .original_result()
    }

    pub fn get_candidates<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Candidate<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidates")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn get_winner_id<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinnerId")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn total_votes<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalVotes")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        ballot_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&ballot_id)
            .argument(&voter)
            .original_result()
    }

    pub fn current_winner<Arg0: ProxyArg<u64>>(
        self,
        ballot_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<ManagedAddress<Env::Api>, u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentWinner")
            .argument(&ballot_id)
            .original_result()
    }

    pub fn fees(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fees")
            .original_result()
    }

    pub fn get_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfig")
            .original_result()
    }
}
