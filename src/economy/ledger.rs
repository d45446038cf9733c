//! Resource ledger - the dungeon's authoritative resource storage

use ahash::AHashMap;

use crate::core::error::{CoreError, Result};
use crate::economy::cost::CostSet;
use crate::economy::resource::{ResourceAccount, ResourceKind};

/// Whole units earned by `rate` over `delta` seconds.
///
/// Truncates per call; the fractional remainder is dropped, never carried.
pub fn accrual_units(rate: f64, delta: f64) -> u64 {
    let units = (rate * delta).floor();
    if units >= 1.0 {
        units as u64
    } else {
        0
    }
}

/// Resource accounts for one world
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    accounts: AHashMap<ResourceKind, ResourceAccount>,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLedger {
    /// Create a ledger with every account opened at zero
    pub fn new() -> Self {
        let accounts = ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind, ResourceAccount::new(kind)))
            .collect();
        Self { accounts }
    }

    /// Get current amount of a resource
    pub fn get(&self, kind: ResourceKind) -> u64 {
        self.accounts.get(&kind).map(|a| a.amount).unwrap_or(0)
    }

    /// Credit a resource unconditionally
    pub fn add(&mut self, kind: ResourceKind, amount: u64) {
        let account = self
            .accounts
            .entry(kind)
            .or_insert_with(|| ResourceAccount::new(kind));
        account.amount = account.amount.saturating_add(amount);
    }

    /// Check whether at least `amount` of a resource is available
    pub fn has(&self, kind: ResourceKind, amount: u64) -> bool {
        self.get(kind) >= amount
    }

    /// Debit a single resource, returns false (and changes nothing) if short
    pub fn consume(&mut self, kind: ResourceKind, amount: u64) -> bool {
        let available = self.get(kind);
        if available < amount {
            tracing::debug!("Insufficient {}: need {}, have {}", kind, amount, available);
            return false;
        }
        match self.accounts.get_mut(&kind) {
            Some(account) => {
                account.amount -= amount;
                true
            }
            None => amount == 0,
        }
    }

    /// Check if every resource in the cost set is available
    pub fn covers(&self, cost: &CostSet) -> bool {
        cost.iter().all(|(kind, amount)| self.has(kind, amount))
    }

    /// Resources the ledger is short of for this cost, with the missing amount
    pub fn shortfall(&self, cost: &CostSet) -> Vec<(ResourceKind, u64)> {
        cost.iter()
            .filter(|(kind, amount)| !self.has(*kind, *amount))
            .map(|(kind, amount)| (kind, amount - self.get(kind)))
            .collect()
    }

    /// Debit a whole cost set, all or nothing.
    ///
    /// Availability of every entry is checked before anything is debited, so a
    /// failed charge leaves every account untouched.
    pub fn charge(&mut self, cost: &CostSet) -> bool {
        if !self.covers(cost) {
            tracing::debug!("Charge rejected, short of {:?}", self.shortfall(cost));
            return false;
        }
        for (kind, amount) in cost.iter() {
            if let Some(account) = self.accounts.get_mut(&kind) {
                account.amount -= amount;
            }
        }
        true
    }

    /// Overwrite an amount; used when restoring a snapshot
    pub(crate) fn set(&mut self, kind: ResourceKind, amount: u64) {
        self.accounts
            .entry(kind)
            .or_insert_with(|| ResourceAccount::new(kind))
            .amount = amount;
    }

    pub fn generation_rate(&self, kind: ResourceKind) -> f64 {
        self.accounts.get(&kind).map(|a| a.generation_rate).unwrap_or(0.0)
    }

    /// Set passive generation for a resource, in units per second
    pub fn set_generation_rate(&mut self, kind: ResourceKind, rate: f64) -> Result<()> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(CoreError::InvalidRate { kind, rate });
        }
        self.accounts
            .entry(kind)
            .or_insert_with(|| ResourceAccount::new(kind))
            .generation_rate = rate;
        Ok(())
    }

    /// Credit passive generation for `delta` seconds.
    ///
    /// Returns what was credited, per kind, skipping kinds that earned nothing.
    pub fn accrue_generation(&mut self, delta: f64) -> Vec<(ResourceKind, u64)> {
        let mut credited = Vec::new();
        for kind in ResourceKind::ALL {
            let rate = self.generation_rate(kind);
            if rate <= 0.0 {
                continue;
            }
            let units = accrual_units(rate, delta);
            if units > 0 {
                self.add(kind, units);
                credited.push((kind, units));
            }
        }
        credited
    }

    /// Accounts in fixed kind order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceAccount> + '_ {
        ResourceKind::ALL.iter().filter_map(|kind| self.accounts.get(kind))
    }

    /// Sum of every account
    pub fn total(&self) -> u64 {
        self.iter().fold(0u64, |sum, a| sum.saturating_add(a.amount))
    }
}
