//! Daily announcement use case

use std::io::{self, Write};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::calendar::{CalendarTable, MonthDay, FALLBACK_OBJECT};
use crate::domain::AnnouncementMessage;

use super::channel::OutputChannel;
use super::ports::{Clock, NotificationError, Notifier};

/// Errors from the announce use case
#[derive(Debug, Error)]
pub enum AnnounceError {
    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("Failed to write announcement: {0}")]
    Io(#[from] io::Error),
}

/// Output from the announce use case
#[derive(Debug, Clone)]
pub struct AnnounceOutput {
    /// Date the announcement was made for
    pub date: NaiveDate,
    /// The delivered message
    pub message: AnnouncementMessage,
    /// Whether the date had no table entry
    pub used_fallback: bool,
}

/// Resolve today's hallowed object and deliver the announcement
pub struct AnnounceUseCase<C>
where
    C: Clock,
{
    table: CalendarTable,
    clock: C,
}

impl<C> AnnounceUseCase<C>
where
    C: Clock,
{
    /// Create a new use case instance
    pub fn new(table: CalendarTable, clock: C) -> Self {
        Self { table, clock }
    }

    /// Compose the announcement for `date`.
    ///
    /// Never fails: dates without an entry get the fallback object.
    pub fn announcement_for(&self, date: NaiveDate) -> (AnnouncementMessage, bool) {
        let month_day = MonthDay::of(date);
        let (object, used_fallback) = match self.table.lookup(month_day) {
            Some(object) => (object, false),
            None => {
                warn!(%month_day, "no hallowed object for this day, using fallback");
                (&FALLBACK_OBJECT, true)
            }
        };
        debug!(%date, singular = object.singular, "resolved hallowed object");

        (AnnouncementMessage::compose(date, object), used_fallback)
    }

    /// Announce for today, as given by the clock
    pub async fn execute<N, W>(
        &self,
        channel: &mut OutputChannel<N, W>,
    ) -> Result<AnnounceOutput, AnnounceError>
    where
        N: Notifier,
        W: Write,
    {
        let date = self.clock.today();
        let (message, used_fallback) = self.announcement_for(date);

        channel.deliver(&message).await?;
        debug!(%date, channel = channel.name(), "announcement delivered");

        Ok(AnnounceOutput {
            date,
            message,
            used_fallback,
        })
    }
}
