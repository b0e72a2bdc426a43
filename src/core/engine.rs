//! Operation engine
//!
//! This module provides the MoneyEngine, the single entry point callers use to
//! run withdrawals and transfers. It routes each request to the matching
//! operation and wires the repository-backed services together.

use crate::config::LimitsConfig;
use crate::core::credit_account::CreditService;
use crate::core::debit_account::DebitService;
use crate::core::notification::{LowFundsNotification, PayInLimitNotification};
use crate::core::traits::{AccountRepository, CreditAccount, DebitAccount, NotificationService};
use crate::core::transfer::TransferMoney;
use crate::core::withdraw::WithdrawMoney;
use crate::types::{AccountId, MoneyError, OperationKind, OperationRecord};
use rust_decimal::Decimal;

/// Debit service wired to a repository and notification sink
pub type RepositoryDebit<R, S> = DebitService<R, LowFundsNotification<S>>;

/// Credit service wired to a repository and notification sink
pub type RepositoryCredit<R, S> = CreditService<R, PayInLimitNotification<S>>;

/// Withdraw/transfer engine
///
/// Stateless between calls: every operation loads the accounts it needs,
/// writes them back, and keeps nothing.
#[derive(Debug, Clone)]
pub struct MoneyEngine<D, C> {
    withdraw: WithdrawMoney<D>,
    transfer: TransferMoney<D, C>,
}

impl<D, C> MoneyEngine<D, C>
where
    D: DebitAccount + Clone,
    C: CreditAccount,
{
    pub fn new(debit_account: D, credit_account: C) -> Self {
        MoneyEngine {
            withdraw: WithdrawMoney::new(debit_account.clone()),
            transfer: TransferMoney::new(debit_account, credit_account),
        }
    }

    /// Withdraw `amount` from one account
    pub fn withdraw(&self, account_id: AccountId, amount: Decimal) -> Result<(), MoneyError> {
        self.withdraw.execute(account_id, amount)
    }

    /// Transfer `amount` between two accounts
    pub fn transfer(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), MoneyError> {
        self.transfer
            .execute(from_account_id, to_account_id, amount)
    }

    /// Process a single operation record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A transfer record has no destination
    /// - The routed operation fails
    pub fn process(&self, record: OperationRecord) -> Result<(), MoneyError> {
        match record.kind {
            OperationKind::Withdraw => self.withdraw(record.from, record.amount),
            OperationKind::Transfer => {
                let to = record.to.ok_or(MoneyError::MissingDestination)?;
                self.transfer(record.from, to, record.amount)
            }
        }
    }
}

impl<R, S> MoneyEngine<RepositoryDebit<R, S>, RepositoryCredit<R, S>>
where
    R: AccountRepository + Clone,
    S: NotificationService + Clone,
{
    /// Build an engine whose services share one repository and one sink
    pub fn with_repository(repository: R, sink: S, limits: LimitsConfig) -> Self {
        let debit = DebitService::new(
            repository.clone(),
            LowFundsNotification::new(sink.clone()),
            limits.clone(),
        );
        let credit = CreditService::new(repository, PayInLimitNotification::new(sink), limits);
        MoneyEngine::new(debit, credit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_repository::InMemoryAccountRepository;
    use crate::core::testing::{sample_account, RecordingSink, SentNotification};
    use crate::types::Account;
    use rstest::rstest;
    use std::sync::Arc;

    type Engine = MoneyEngine<
        RepositoryDebit<Arc<InMemoryAccountRepository>, Arc<RecordingSink>>,
        RepositoryCredit<Arc<InMemoryAccountRepository>, Arc<RecordingSink>>,
    >;

    fn engine_with(
        accounts: Vec<Account>,
    ) -> (Engine, Arc<InMemoryAccountRepository>, Arc<RecordingSink>) {
        let repository = Arc::new(InMemoryAccountRepository::new());
        for account in accounts {
            repository.insert(account);
        }
        let sink = Arc::new(RecordingSink::default());
        let engine =
            MoneyEngine::with_repository(repository.clone(), sink.clone(), LimitsConfig::default());
        (engine, repository, sink)
    }

    fn stored(repository: &InMemoryAccountRepository, n: u128) -> Account {
        repository.get_account_by_id(sample_account(n).id).unwrap()
    }

    #[test]
    fn test_transfer_moves_funds_without_notifications() {
        let (engine, repository, sink) = engine_with(vec![
            sample_account(1).with_balance(Decimal::new(1000, 0)),
            sample_account(2),
        ]);

        engine
            .transfer(sample_account(1).id, sample_account(2).id, Decimal::new(100, 0))
            .unwrap();

        let from = stored(&repository, 1);
        let to = stored(&repository, 2);
        assert_eq!(from.balance, Decimal::new(900, 0));
        assert_eq!(from.withdrawn, Decimal::new(-100, 0));
        assert_eq!(to.balance, Decimal::new(100, 0));
        assert_eq!(to.paid_in, Decimal::new(100, 0));
        assert_eq!(from.version, 1);
        assert_eq!(to.version, 1);
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_withdraw_debits_and_notifies_low_funds() {
        let (engine, repository, sink) =
            engine_with(vec![sample_account(1).with_balance(Decimal::new(600, 0))]);

        engine
            .withdraw(sample_account(1).id, Decimal::new(200, 0))
            .unwrap();

        let account = stored(&repository, 1);
        assert_eq!(account.balance, Decimal::new(400, 0));
        assert_eq!(account.withdrawn, Decimal::new(-200, 0));
        assert_eq!(
            sink.sent(),
            vec![SentNotification::FundsLow("owner1@test.com".to_string())]
        );
    }

    #[test]
    fn test_withdraw_insufficient_funds_leaves_account_untouched() {
        let original = sample_account(1).with_balance(Decimal::new(50, 0));
        let (engine, repository, sink) = engine_with(vec![original.clone()]);

        let result = engine.withdraw(original.id, Decimal::new(51, 0));

        assert_eq!(
            result,
            Err(MoneyError::insufficient_funds(
                original.id,
                Decimal::new(50, 0),
                Decimal::new(51, 0)
            ))
        );
        assert_eq!(stored(&repository, 1), original);
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_withdraw_entire_balance_is_allowed() {
        let (engine, repository, _) =
            engine_with(vec![sample_account(1).with_balance(Decimal::new(50, 0))]);

        engine
            .withdraw(sample_account(1).id, Decimal::new(50, 0))
            .unwrap();

        assert_eq!(stored(&repository, 1).balance, Decimal::ZERO);
    }

    #[test]
    fn test_transfer_pay_in_limit_leaves_both_accounts_untouched() {
        let from = sample_account(1).with_balance(Decimal::new(1000, 0));
        let to = sample_account(2).with_paid_in(Decimal::new(3950, 0));
        let (engine, repository, sink) = engine_with(vec![from.clone(), to.clone()]);

        let result = engine.transfer(from.id, to.id, Decimal::new(100, 0));

        assert!(matches!(result, Err(MoneyError::PayInLimitReached { .. })));
        assert_eq!(stored(&repository, 1), from);
        assert_eq!(stored(&repository, 2), to);
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_transfer_near_limit_notifies_destination_owner() {
        let (engine, _, sink) = engine_with(vec![
            sample_account(1).with_balance(Decimal::new(1000, 0)),
            sample_account(2).with_paid_in(Decimal::new(3400, 0)),
        ]);

        engine
            .transfer(sample_account(1).id, sample_account(2).id, Decimal::new(200, 0))
            .unwrap();

        assert_eq!(
            sink.sent(),
            vec![SentNotification::ApproachingPayInLimit(
                "owner2@test.com".to_string()
            )]
        );
    }

    #[test]
    fn test_transfer_unknown_destination_fails_before_debit() {
        let from = sample_account(1).with_balance(Decimal::new(1000, 0));
        let (engine, repository, _) = engine_with(vec![from.clone()]);
        let missing = sample_account(7).id;

        let result = engine.transfer(from.id, missing, Decimal::ONE);

        assert_eq!(result, Err(MoneyError::account_not_found(missing)));
        assert_eq!(stored(&repository, 1), from);
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1, 0))]
    fn test_non_positive_amounts_touch_nothing(#[case] amount: Decimal) {
        let from = sample_account(1).with_balance(Decimal::new(1000, 0));
        let to = sample_account(2);
        let (engine, repository, sink) = engine_with(vec![from.clone(), to.clone()]);

        assert_eq!(
            engine.withdraw(from.id, amount),
            Err(MoneyError::invalid_amount(amount))
        );
        assert_eq!(
            engine.transfer(from.id, to.id, amount),
            Err(MoneyError::invalid_amount(amount))
        );
        assert_eq!(stored(&repository, 1), from);
        assert_eq!(stored(&repository, 2), to);
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_failed_operation_can_be_retried_after_top_up() {
        let (engine, repository, _) =
            engine_with(vec![sample_account(1).with_balance(Decimal::new(50, 0))]);
        let id = sample_account(1).id;

        assert!(engine.withdraw(id, Decimal::new(80, 0)).is_err());

        let mut topped_up = stored(&repository, 1);
        topped_up.balance = Decimal::new(1000, 0);
        repository.update(&mut topped_up).unwrap();

        engine.withdraw(id, Decimal::new(80, 0)).unwrap();
        assert_eq!(stored(&repository, 1).balance, Decimal::new(920, 0));
    }

    #[test]
    fn test_process_routes_records() {
        let (engine, repository, _) = engine_with(vec![
            sample_account(1).with_balance(Decimal::new(1000, 0)),
            sample_account(2),
        ]);
        let (a, b) = (sample_account(1).id, sample_account(2).id);

        engine
            .process(OperationRecord::withdraw(a, Decimal::new(100, 0)))
            .unwrap();
        engine
            .process(OperationRecord::transfer(a, b, Decimal::new(300, 0)))
            .unwrap();

        assert_eq!(stored(&repository, 1).balance, Decimal::new(600, 0));
        assert_eq!(stored(&repository, 2).balance, Decimal::new(300, 0));
    }

    #[test]
    fn test_process_transfer_without_destination() {
        let (engine, _, _) = engine_with(vec![sample_account(1)]);
        let record = OperationRecord {
            kind: OperationKind::Transfer,
            from: sample_account(1).id,
            to: None,
            amount: Decimal::ONE,
        };

        assert_eq!(engine.process(record), Err(MoneyError::MissingDestination));
    }
}
