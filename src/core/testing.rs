//! Recording test doubles shared by the core unit tests

use crate::core::traits::{AccountRepository, CreditAccount, DebitAccount, NotificationService};
use crate::types::{Account, AccountId, MoneyError, User};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub fn account_id(n: u128) -> AccountId {
    Uuid::from_u128(n)
}

/// Account `n` owned by `owner{n}@test.com`, all figures zero
pub fn sample_account(n: u128) -> Account {
    let user = User::new(
        Uuid::from_u128(1000 + n),
        &format!("Owner {}", n),
        &format!("owner{}@test.com", n),
    );
    Account::new(account_id(n), user)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentNotification {
    ApproachingPayInLimit(String),
    FundsLow(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<SentNotification>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, notification: SentNotification) -> Result<(), MoneyError> {
        if self.fail {
            return Err(MoneyError::notification("sink unavailable"));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

impl NotificationService for RecordingSink {
    fn notify_approaching_pay_in_limit(&self, email_address: &str) -> Result<(), MoneyError> {
        self.record(SentNotification::ApproachingPayInLimit(
            email_address.to_string(),
        ))
    }

    fn notify_funds_low(&self, email_address: &str) -> Result<(), MoneyError> {
        self.record(SentNotification::FundsLow(email_address.to_string()))
    }
}

/// Repository that keeps every write for inspection
#[derive(Debug, Default)]
pub struct RecordingRepository {
    accounts: Mutex<HashMap<AccountId, Account>>,
    updates: Mutex<Vec<Account>>,
    fail_updates: bool,
}

impl RecordingRepository {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts.into_iter().map(|a| (a.id, a)).collect()),
            updates: Mutex::new(Vec::new()),
            fail_updates: false,
        }
    }

    pub fn failing_updates() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<Account> {
        self.updates.lock().unwrap().clone()
    }
}

impl AccountRepository for RecordingRepository {
    fn get_account_by_id(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.accounts
            .lock()
            .unwrap()
            .get(&account_id)
            .cloned()
            .ok_or_else(|| MoneyError::account_not_found(account_id))
    }

    fn update(&self, account: &mut Account) -> Result<(), MoneyError> {
        if self.fail_updates {
            return Err(MoneyError::storage("write rejected"));
        }
        self.updates.lock().unwrap().push(account.clone());
        account.version += 1;
        self.accounts
            .lock()
            .unwrap()
            .insert(account.id, account.clone());
        Ok(())
    }
}

/// Calls observed by the debit and credit doubles, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoadDebit(AccountId),
    CheckBalance(Decimal),
    Debit(AccountId, Decimal),
    LoadCredit(AccountId),
    CheckPayInLimit(Decimal),
    Credit(AccountId, Decimal),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// Debit capability double with a canned sufficiency answer
#[derive(Debug)]
pub struct FakeDebit {
    pub log: CallLog,
    pub sufficient: bool,
    pub fail_load: bool,
}

impl FakeDebit {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            sufficient: true,
            fail_load: false,
        }
    }
}

impl DebitAccount for FakeDebit {
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.log.lock().unwrap().push(Call::LoadDebit(account_id));
        if self.fail_load {
            return Err(MoneyError::account_not_found(account_id));
        }
        let mut account = sample_account(account_id.as_u128());
        account.balance = Decimal::new(1000, 0);
        Ok(account)
    }

    fn has_sufficient_balance(&self, _account: &Account, amount: Decimal) -> bool {
        self.log.lock().unwrap().push(Call::CheckBalance(amount));
        self.sufficient
    }

    fn debit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError> {
        self.log.lock().unwrap().push(Call::Debit(account.id, amount));
        account.balance -= amount;
        Ok(())
    }
}

/// Credit capability double with a canned limit answer
#[derive(Debug)]
pub struct FakeCredit {
    pub log: CallLog,
    pub limit_reached: bool,
    pub fail_credit: bool,
}

impl FakeCredit {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            limit_reached: false,
            fail_credit: false,
        }
    }
}

impl CreditAccount for FakeCredit {
    fn load_account(&self, account_id: AccountId) -> Result<Account, MoneyError> {
        self.log.lock().unwrap().push(Call::LoadCredit(account_id));
        Ok(sample_account(account_id.as_u128()))
    }

    fn is_pay_in_limit_reached(&self, _account: &Account, amount: Decimal) -> bool {
        self.log.lock().unwrap().push(Call::CheckPayInLimit(amount));
        self.limit_reached
    }

    fn credit(&self, account: &mut Account, amount: Decimal) -> Result<(), MoneyError> {
        self.log
            .lock()
            .unwrap()
            .push(Call::Credit(account.id, amount));
        if self.fail_credit {
            return Err(MoneyError::storage("write rejected"));
        }
        account.balance += amount;
        Ok(())
    }
}
