use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::engine::errors::ContributionError;
use crate::engine::limits::{dollar_limit_for_year, MINIMUM_AGE, PROGRAM_START_YEAR};
use crate::models::{TransactionHistory, TransactionSummary};
use crate::storage::{RoomCache, RoomStore};
use crate::types::{Amount, Year};

/// A single holder's TFSA: their date of birth and their transaction history.
///
/// Contribution room is memoized per year in the account's [`RoomStore`]. The
/// history is shared and never modified, so cached years stay valid for the
/// lifetime of the account.
pub struct Tfsa<S: RoomStore = RoomCache> {
    date_of_birth: NaiveDate,
    history: Arc<TransactionHistory>,
    store: S
}

/// One line of the per-year breakdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct YearReport {
    pub year: Year,
    /// New room granted this year.
    pub dollar_limit: Amount,
    /// Activity dated in this year.
    pub summary: TransactionSummary,
    /// Room at the start of the year, carry-forward included.
    pub contribution_room: Amount,
    /// Room left after this year's contributions.
    pub available_room: Amount
}

impl Tfsa<RoomCache> {
    pub fn new(date_of_birth: NaiveDate, history: Arc<TransactionHistory>) -> Self {
        Self::with_store(date_of_birth, history, RoomCache::new())
    }
}

impl<S: RoomStore> Tfsa<S> {
    pub fn with_store(date_of_birth: NaiveDate, history: Arc<TransactionHistory>, store: S) -> Self {
        Self {
            date_of_birth,
            history,
            store
        }
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The later of the holder's 18th birthday year and 2009. No room exists before it.
    pub fn first_eligible_year(&self) -> Year {
        (self.date_of_birth.year() + MINIMUM_AGE).max(PROGRAM_START_YEAR)
    }

    /// Total room available at the start of `year`.
    ///
    /// Unused room carries forward. Contributions made in the prior year consume
    /// room, and withdrawals made in the prior year are given back, so
    /// `room(y) = limit(y) + room(y - 1) - contributions(y - 1) + withdrawals(y - 1)`.
    /// Any year at or before the first eligible year is just that year's limit.
    ///
    /// # Errors
    /// Returns `ContributionError::UnsupportedYear` if `year`, or any year the
    /// recursion reaches, has no published limit, and `ContributionError::Amount`
    /// if the running room overflows.
    pub fn contribution_room(&self, year: Year) -> Result<Amount, ContributionError> {
        if let Some(room) = self.store.load(year) {
            trace!("Contribution room for [{year}] served from cache: {room}");
            return Ok(room);
        }

        let dollar_limit = dollar_limit_for_year(year)?;

        let room = if year > self.first_eligible_year() {
            let prior_room = self.contribution_room(year - 1)?;
            let prior_summary = self.summary(year - 1)?;

            prior_room
                .checked_sub(prior_summary.contributions)
                .and_then(|carried_forward| carried_forward.checked_add(prior_summary.withdrawals))
                .and_then(|carried_forward| dollar_limit.checked_add(carried_forward))
                .ok_or_else(|| ContributionError::overflow(year))?
        } else {
            dollar_limit
        };

        debug!("Contribution room for [{year}] computed: {room}");
        self.store.save(year, room);

        Ok(room)
    }

    /// Room left in `year` once that year's own contributions are deducted.
    /// Withdrawals made during `year` are not returned until the following year.
    pub fn available_room(&self, year: Year) -> Result<Amount, ContributionError> {
        let room = self.contribution_room(year)?;

        room.checked_sub(self.summary(year)?.contributions)
            .ok_or_else(|| ContributionError::overflow(year))
    }

    /// `(year, dollar limit)` for every year from the first eligible year through
    /// `current_year` inclusive.
    pub fn yearly_gross_contribution_room(&self, current_year: Year) -> Result<Vec<(Year, Amount)>, ContributionError> {
        self.eligible_years(current_year)
            .map(|year| Ok((year, dollar_limit_for_year(year)?)))
            .collect()
    }

    /// The sum of every yearly dollar limit the holder has been granted so far.
    pub fn total_gross_contribution_room(&self, current_year: Year) -> Result<Amount, ContributionError> {
        Ok(self
            .yearly_gross_contribution_room(current_year)?
            .into_iter()
            .map(|(_, amount)| amount)
            .sum())
    }

    /// `(year, contribution room)` for every eligible year through `current_year`,
    /// filled bottom-up so each year reuses the cached previous one.
    pub fn yearly_contribution_room(&self, current_year: Year) -> Result<Vec<(Year, Amount)>, ContributionError> {
        self.eligible_years(current_year)
            .map(|year| Ok((year, self.contribution_room(year)?)))
            .collect()
    }

    pub fn report(&self, current_year: Year) -> Result<Vec<YearReport>, ContributionError> {
        self.eligible_years(current_year)
            .map(|year| {
                Ok(YearReport {
                    year,
                    dollar_limit: dollar_limit_for_year(year)?,
                    summary: self.summary(year)?,
                    contribution_room: self.contribution_room(year)?,
                    available_room: self.available_room(year)?
                })
            })
            .collect()
    }

    fn summary(&self, year: Year) -> Result<TransactionSummary, ContributionError> {
        self.history
            .year_summary(year)
            .map_err(|source| ContributionError::Amount { year, source })
    }

    fn eligible_years(&self, current_year: Year) -> RangeInclusive<Year> {
        self.first_eligible_year()..=current_year
    }
}
