use crate::core::engine::EngineRules;
use crate::core::engine::codes::ShiftCodes;
use crate::core::logic::Core;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::month_key::MonthKey;
use crate::models::summary::MonthReport;
use crate::ui::messages::warning;
use crate::utils::date::all_days_of_month;
use chrono::NaiveDate;

/// Upper bound for hand-entered training hours on a single day.
pub const MAX_TRAINING_HOURS: f64 = 24.0;

/// Changes requested for one day; `None` leaves the field untouched.
#[derive(Debug, Default, Clone)]
pub struct DayEdit {
    pub codes: Option<String>,
    pub training_hours: Option<f64>,
    pub overtime_minutes: Option<u32>,
}

/// A month report plus where it came from.
pub struct ReportOutcome {
    pub report: MonthReport,
    pub from_cache: bool,
}

pub struct MonthLogic;

impl MonthLogic {
    fn write_blank_month(pool: &mut DbPool, month: MonthKey) -> AppResult<Vec<DayRecord>> {
        let records: Vec<DayRecord> = all_days_of_month(month)
            .into_iter()
            .map(DayRecord::blank)
            .collect();

        let tx = pool.conn.transaction()?;
        queries::delete_month(&tx, month)?;
        queries::invalidate_month(&tx, month)?;
        for rec in &records {
            queries::upsert_day(&tx, rec)?;
        }
        tx.commit()?;

        Ok(records)
    }

    /// Records of `month`, creating one blank record per day on first access.
    pub fn ensure_month(pool: &mut DbPool, month: MonthKey) -> AppResult<Vec<DayRecord>> {
        if queries::month_exists(&pool.conn, month)? {
            return queries::load_month(&pool.conn, month);
        }

        let records = Self::write_blank_month(pool, month)?;
        ttlog_lenient(
            &pool.conn,
            "init_month",
            &month.to_string(),
            &format!("Created {} day records", records.len()),
        );
        Ok(records)
    }

    /// Regenerate every record of `month` as blank.
    pub fn reset_month(pool: &mut DbPool, month: MonthKey) -> AppResult<usize> {
        let records = Self::write_blank_month(pool, month)?;
        ttlog_lenient(
            &pool.conn,
            "reset",
            &month.to_string(),
            &format!("Month regenerated with {} blank days", records.len()),
        );
        Ok(records.len())
    }

    pub fn edit_day(
        pool: &mut DbPool,
        date: NaiveDate,
        edit: &DayEdit,
        rules: &EngineRules,
    ) -> AppResult<DayRecord> {
        if let Some(h) = edit.training_hours
            && !(0.0..=MAX_TRAINING_HOURS).contains(&h)
        {
            return Err(AppError::InvalidNumber(format!(
                "training hours must be between 0 and {MAX_TRAINING_HOURS}, got {h}"
            )));
        }

        let month = MonthKey::of(date);
        Self::ensure_month(pool, month)?;

        let mut rec = queries::load_day(&pool.conn, date)?.unwrap_or_else(|| DayRecord::blank(date));

        if let Some(raw) = &edit.codes {
            rec.codes = ShiftCodes::parse(raw);
        }
        if let Some(h) = edit.training_hours {
            rec.training_hours = h;
        }
        if let Some(m) = edit.overtime_minutes {
            rec.overtime_minutes = m;
        }

        if rec.training_hours > 0.0 && !rec.codes.contains(&rules.training_code) {
            warning(format!(
                "{} has training hours but no '{}' code.",
                date, rules.training_code
            ));
        }

        let tx = pool.conn.transaction()?;
        queries::upsert_day(&tx, &rec)?;
        queries::invalidate_month(&tx, month)?;
        tx.commit()?;

        ttlog_lenient(
            &pool.conn,
            "edit",
            &rec.date_str(),
            &format!(
                "codes='{}' training={} overtime={}min",
                rec.codes, rec.training_hours, rec.overtime_minutes
            ),
        );

        Ok(rec)
    }

    /// Cached report of `month`, computed and stored when missing, when it
    /// was built with different engine rules, or when `recalc` is set.
    /// Nothing is refreshed otherwise.
    pub fn report(
        pool: &mut DbPool,
        month: MonthKey,
        rules: &EngineRules,
        recalc: bool,
    ) -> AppResult<ReportOutcome> {
        let records = Self::ensure_month(pool, month)?;

        // a report computed with other designated codes is a miss
        if !recalc
            && let Some(report) = queries::load_cached_report(&pool.conn, month)?
            && report.rules == *rules
        {
            return Ok(ReportOutcome {
                report,
                from_cache: true,
            });
        }

        let registry = queries::load_registry(&pool.conn)?;
        let report = Core::build_month_report(month, &records, &registry, rules);
        queries::store_report(&pool.conn, &report)?;

        ttlog_lenient(
            &pool.conn,
            "recalc",
            &month.to_string(),
            &format!("Month total {:.2}h", report.summary.total_hours),
        );

        Ok(ReportOutcome {
            report,
            from_cache: false,
        })
    }
}
