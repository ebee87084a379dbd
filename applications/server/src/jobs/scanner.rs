//! Daily birthday scanner
//!
//! Once a day at a configured local wall-clock time, reads every record and
//! mails a reminder to anyone whose birthday matches the current date. One
//! recipient's delivery failure never blocks the rest of the scan.

use crate::services::{mailer::Mailer, templates};
use bday_core::dates;
use bday_storage::RecordStore;
use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::Arc;
use std::time::Duration;

pub struct BirthdayScanner {
    store: Arc<RecordStore>,
    mailer: Arc<dyn Mailer>,
    signature: String,
}

impl BirthdayScanner {
    pub fn new(store: Arc<RecordStore>, mailer: Arc<dyn Mailer>, signature: String) -> Self {
        Self {
            store,
            mailer,
            signature,
        }
    }

    /// Spawn the daily scan loop firing at `hour:minute` local time
    pub fn start(self: Arc<Self>, hour: u32, minute: u32) {
        tokio::spawn(async move {
            tracing::info!(
                "Birthday scanner scheduled daily at {:02}:{:02}",
                hour,
                minute
            );
            loop {
                tokio::time::sleep(delay_until_next(hour, minute)).await;
                tracing::info!("Running daily birthday check");
                self.run_scan(Local::now().date_naive()).await;
            }
        });
    }

    /// Scan all records against `today` and mail every match
    ///
    /// Fire-and-forget: failures are logged, nothing is returned to the
    /// scheduler, and the scan always runs to completion.
    pub async fn run_scan(&self, today: NaiveDate) {
        let records = match self.store.get_all().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Birthday scan aborted, could not read records: {}", e);
                return;
            }
        };

        for record in records {
            if !dates::matches_today(&record.date_of_birth, today) {
                continue;
            }

            let formatted_dob = dates::format_long(&record.date_of_birth);
            let (subject, body) =
                templates::reminder(&record.name, &formatted_dob, &self.signature);

            match self.mailer.send(&record.email, &subject, &body).await {
                Ok(()) => tracing::info!("Birthday reminder sent to {}", record.email),
                Err(e) => {
                    tracing::error!(
                        "Failed to send birthday reminder to {}: {}",
                        record.email,
                        e
                    );
                }
            }
        }
    }
}

/// Time until the next local occurrence of `hour:minute`
fn delay_until_next(hour: u32, minute: u32) -> Duration {
    // Out-of-range times are rejected by config validation before we get here.
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);

    let now = Local::now().naive_local();
    let mut target = now.date().and_time(time);
    if target <= now {
        target += chrono::Duration::days(1);
    }

    (target - now).to_std().unwrap_or(Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_always_within_a_day() {
        let delay = delay_until_next(11, 0);
        assert!(delay <= Duration::from_secs(24 * 60 * 60));
        assert!(delay > Duration::ZERO);
    }
}
