//! FundMe Integration Tests
//!
//! Scenario tests run against the Odra test VM.

#[cfg(test)]
mod common {
    use fund_me_contracts::fund_me::{FundMe, FundMeHostRef, FundMeInitArgs};
    use fund_me_contracts::mock_aggregator::{
        MockV3Aggregator, MockV3AggregatorHostRef, MockV3AggregatorInitArgs,
    };
    use odra::host::{Deployer, HostEnv, HostRef};
    use odra::prelude::Addressable;

    pub const DECIMALS: u8 = 8;
    pub const INITIAL_ANSWER: i64 = 2_000_00000000;
    pub const ONE_CSPR: u64 = 1_000_000_000;

    /// Mock feed at 2000 USD per CSPR and a FundMe owned by account 0
    pub fn deploy() -> (HostEnv, MockV3AggregatorHostRef, FundMeHostRef) {
        let env = odra_test::env();
        let feed = MockV3Aggregator::deploy(
            &env,
            MockV3AggregatorInitArgs {
                decimals: DECIMALS,
                initial_answer: INITIAL_ANSWER,
            },
        );
        let fund_me = FundMe::deploy(
            &env,
            FundMeInitArgs {
                price_feed: feed.address().clone(),
            },
        );
        (env, feed, fund_me)
    }
}

#[cfg(test)]
mod constructor_tests {
    use super::common::deploy;
    use fund_me_contracts::mock_aggregator::MOCK_VERSION;
    use odra::host::HostRef;
    use odra::prelude::Addressable;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sets_the_price_feed_address() {
        let (_, feed, fund_me) = deploy();
        assert_eq!(fund_me.get_price_feed(), feed.address().clone());
    }

    #[test]
    fn test_sets_the_owner_to_the_deployer() {
        let (env, _, fund_me) = deploy();
        assert_eq!(fund_me.get_owner(), env.get_account(0));
    }

    #[test]
    fn test_reports_the_feed_version() {
        let (_, _, fund_me) = deploy();
        assert_eq!(fund_me.get_version(), MOCK_VERSION);
    }

    #[test]
    fn test_starts_empty() {
        let (env, _, fund_me) = deploy();
        assert_eq!(fund_me.get_funders_count(), 0);
        assert!(fund_me.get_balance().is_zero());
        assert!(fund_me
            .get_address_to_amount_funded(env.get_account(0))
            .is_zero());
    }
}

#[cfg(test)]
mod fund_tests {
    use super::common::{deploy, ONE_CSPR};
    use fund_me_contracts::errors::FundMeError;
    use fund_me_contracts::events::Funded;
    use odra::casper_types::U512;
    use odra::host::HostRef;
    use pretty_assertions::assert_eq;
    const MILLI_CSPR: u64 = 1_000_000;

    fn usd(whole: u64) -> U512 {
        U512::from(whole) * U512::from(10u64).pow(U512::from(18u64))
    }

    #[test]
    fn test_fails_without_value() {
        let (_, _, fund_me) = deploy();
        assert_eq!(
            fund_me.with_tokens(U512::zero()).try_fund(),
            Err(FundMeError::InsufficientValue.into())
        );
    }

    #[test]
    fn test_fails_below_fifty_usd() {
        // 0.001 CSPR at 2000 USD = 2 USD
        let (_, _, fund_me) = deploy();
        assert_eq!(fund_me.get_conversion_rate(U512::from(MILLI_CSPR)), usd(2));
        assert_eq!(
            fund_me.with_tokens(U512::from(MILLI_CSPR)).try_fund(),
            Err(FundMeError::InsufficientValue.into())
        );
    }

    #[test]
    fn test_failed_deposits_leave_ledger_unchanged() {
        let (env, _, fund_me) = deploy();
        let funder = env.get_account(1);
        env.set_caller(funder);

        for _ in 0..3 {
            assert!(fund_me
                .with_tokens(U512::from(MILLI_CSPR))
                .try_fund()
                .is_err());
        }

        assert!(fund_me.get_address_to_amount_funded(funder).is_zero());
        assert_eq!(fund_me.get_funders_count(), 0);
        assert!(fund_me.get_balance().is_zero());
        assert_eq!(env.events_count(&fund_me), 0);
    }

    #[test]
    fn test_emits_funded_event() {
        let (env, _, fund_me) = deploy();
        let funder = env.get_account(1);
        env.set_caller(funder);

        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        assert_eq!(env.events_count(&fund_me), 1);
        assert!(env.emitted_event(
            &fund_me,
            Funded {
                funder,
                amount: U512::from(ONE_CSPR),
                usd_value: usd(2000),
            }
        ));
    }

    #[test]
    fn test_updates_the_amount_funded() {
        let (env, _, fund_me) = deploy();
        let deployer = env.get_account(0);

        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        assert_eq!(
            fund_me.get_address_to_amount_funded(deployer),
            U512::from(ONE_CSPR)
        );
        assert_eq!(fund_me.get_balance(), U512::from(ONE_CSPR));
    }

    #[test]
    fn test_adds_funder_to_the_sequence() {
        let (env, _, fund_me) = deploy();

        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        assert_eq!(fund_me.get_funders_count(), 1);
        assert_eq!(fund_me.get_funder(0), env.get_account(0));
    }

    #[test]
    fn test_repeated_deposits_accumulate() {
        let (env, _, fund_me) = deploy();
        let funder = env.get_account(2);
        env.set_caller(funder);

        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();
        fund_me.with_tokens(U512::from(2 * ONE_CSPR)).fund();

        assert_eq!(
            fund_me.get_address_to_amount_funded(funder),
            U512::from(3 * ONE_CSPR)
        );
        assert_eq!(fund_me.get_funders_count(), 2);
        assert_eq!(fund_me.get_funder(1), funder);
    }

    #[test]
    fn test_funder_index_out_of_range() {
        let (_, _, fund_me) = deploy();
        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        assert_eq!(
            fund_me.try_get_funder(1),
            Err(FundMeError::FunderIndexOutOfRange.into())
        );
    }

    #[test]
    fn test_fails_closed_on_non_positive_price() {
        let (_, mut feed, fund_me) = deploy();

        feed.update_answer(0);
        assert_eq!(
            fund_me.with_tokens(U512::from(ONE_CSPR)).try_fund(),
            Err(FundMeError::OracleUnavailable.into())
        );

        feed.update_answer(-1);
        assert_eq!(
            fund_me.with_tokens(U512::from(ONE_CSPR)).try_fund(),
            Err(FundMeError::OracleUnavailable.into())
        );
        assert_eq!(fund_me.get_funders_count(), 0);
        assert!(fund_me.get_balance().is_zero());
    }

    #[test]
    fn test_threshold_follows_the_price() {
        // At 40 USD per CSPR, 1 CSPR no longer qualifies
        let (_, mut feed, fund_me) = deploy();
        feed.update_answer(40_00000000);

        assert_eq!(fund_me.get_conversion_rate(U512::from(ONE_CSPR)), usd(40));
        assert_eq!(
            fund_me.with_tokens(U512::from(ONE_CSPR)).try_fund(),
            Err(FundMeError::InsufficientValue.into())
        );
    }
}

#[cfg(test)]
mod withdraw_tests {
    use super::common::{deploy, ONE_CSPR};
    use fund_me_contracts::errors::FundMeError;
    use fund_me_contracts::events::Withdrawn;
    use odra::casper_types::U512;
    use odra::host::HostRef;
    use odra::prelude::Addressable;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_withdraw_from_a_single_funder() {
        let (env, _, mut fund_me) = deploy();
        let owner = env.get_account(0);
        let fund_me_address = fund_me.address().clone();
        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        let starting_contract_balance = env.balance_of(&fund_me_address);
        let starting_owner_balance = env.balance_of(&owner);

        fund_me.withdraw();

        assert!(env.balance_of(&fund_me_address).is_zero());
        assert_eq!(
            env.balance_of(&owner),
            starting_owner_balance + starting_contract_balance
        );
        assert!(fund_me.get_address_to_amount_funded(owner).is_zero());
    }

    #[test]
    fn test_withdraw_from_multiple_funders() {
        let (env, _, mut fund_me) = deploy();
        let owner = env.get_account(0);
        let fund_me_address = fund_me.address().clone();

        for index in 0..6 {
            env.set_caller(env.get_account(index));
            fund_me.with_tokens(U512::from(ONE_CSPR)).fund();
        }
        env.set_caller(owner);

        let starting_contract_balance = env.balance_of(&fund_me_address);
        let starting_owner_balance = env.balance_of(&owner);
        assert_eq!(starting_contract_balance, U512::from(6 * ONE_CSPR));

        fund_me.withdraw();

        assert!(env.balance_of(&fund_me_address).is_zero());
        assert_eq!(
            env.balance_of(&owner),
            starting_owner_balance + starting_contract_balance
        );
        assert_eq!(
            fund_me.try_get_funder(0),
            Err(FundMeError::FunderIndexOutOfRange.into())
        );
        assert_eq!(fund_me.get_funders_count(), 0);
        assert!(env.emitted_event(
            &fund_me,
            Withdrawn {
                recipient: owner,
                amount: U512::from(6 * ONE_CSPR),
                funders_cleared: 6,
            }
        ));
        for index in 0..6 {
            assert!(fund_me
                .get_address_to_amount_funded(env.get_account(index))
                .is_zero());
        }
    }

    #[test]
    fn test_only_the_owner_can_withdraw() {
        let (env, _, mut fund_me) = deploy();
        let funder = env.get_account(1);
        let fund_me_address = fund_me.address().clone();
        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        env.set_caller(funder);
        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();

        let attacker = env.get_account(2);
        env.set_caller(attacker);
        assert_eq!(fund_me.try_withdraw(), Err(FundMeError::NotOwner.into()));

        assert_eq!(env.balance_of(&fund_me_address), U512::from(2 * ONE_CSPR));
        assert_eq!(fund_me.get_funders_count(), 2);
        assert_eq!(
            fund_me.get_address_to_amount_funded(funder),
            U512::from(ONE_CSPR)
        );
    }

    #[test]
    fn test_ledger_reopens_after_withdraw() {
        let (env, _, mut fund_me) = deploy();
        let funder = env.get_account(3);

        env.set_caller(funder);
        fund_me.with_tokens(U512::from(ONE_CSPR)).fund();
        env.set_caller(env.get_account(0));
        fund_me.withdraw();

        env.set_caller(funder);
        fund_me.with_tokens(U512::from(2 * ONE_CSPR)).fund();

        assert_eq!(fund_me.get_funders_count(), 1);
        assert_eq!(fund_me.get_funder(0), funder);
        assert_eq!(
            fund_me.get_address_to_amount_funded(funder),
            U512::from(2 * ONE_CSPR)
        );
        assert_eq!(fund_me.get_balance(), U512::from(2 * ONE_CSPR));
    }
}
