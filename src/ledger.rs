use crate::errors::AppError;
use crate::models::{DailySnapshot, TodayState, UserLedger, TASK_COUNT};
use chrono::{DateTime, Utc};

/// Final day of the challenge. `current_day` saturates here.
pub const FINAL_DAY: u32 = 75;

/// Flips one of the ten task flags on the in-progress day.
pub fn toggle_task(ledger: &mut UserLedger, key: &str) -> Result<bool, AppError> {
    ledger
        .today
        .task_set
        .toggle(key)
        .ok_or_else(|| AppError::invalid_task_key(key))
}

/// Permissive metric parsing: JSON numbers and numeric strings are accepted,
/// anything else (including negatives and NaN) coerces to zero.
pub fn coerce_water(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(liters) if liters.is_finite() && liters >= 0.0 => liters,
        _ => 0.0,
    }
}

pub fn coerce_steps(value: &serde_json::Value) -> u64 {
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(steps) if steps.is_finite() && steps >= 0.0 => steps.trunc() as u64,
        _ => 0,
    }
}

pub fn set_water(ledger: &mut UserLedger, value: &serde_json::Value) {
    ledger.today.water_liters = coerce_water(value);
}

pub fn set_steps(ledger: &mut UserLedger, value: &serde_json::Value) {
    ledger.today.steps = coerce_steps(value);
}

pub fn completion_percentage(ledger: &UserLedger) -> u32 {
    let checked = ledger.today.task_set.count_true();
    ((checked as f64 / TASK_COUNT as f64) * 100.0).round() as u32
}

pub fn is_day_complete(ledger: &UserLedger) -> bool {
    ledger.today.task_set.all_true()
}

/// Outcome of a successful day completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCompleted {
    pub day: u32,
    pub finished: bool,
}

pub fn complete_day(ledger: &mut UserLedger) -> Result<DayCompleted, AppError> {
    complete_day_at(ledger, Utc::now())
}

/// Completes the in-progress day: snapshots it into history, appends it to
/// the completed list, advances `current_day` (saturating at the final day)
/// and resets today's state. Applied as one unit; on error nothing changes.
pub fn complete_day_at(
    ledger: &mut UserLedger,
    now: DateTime<Utc>,
) -> Result<DayCompleted, AppError> {
    if !is_day_complete(ledger) {
        return Err(AppError::tasks_incomplete());
    }

    let day = ledger.current_day;
    // Day 75 can be re-completed after saturation; the first snapshot wins
    // and the completed list never gains a duplicate.
    if !ledger.completed_days.contains(&day) {
        ledger.history.insert(
            day,
            DailySnapshot {
                task_set: ledger.today.task_set.clone(),
                water_liters: ledger.today.water_liters,
                steps: ledger.today.steps,
                completed_at: now,
            },
        );
        ledger.completed_days.push(day);
    }
    ledger.current_day = (day + 1).min(FINAL_DAY);
    ledger.today = TodayState::default();

    Ok(DayCompleted {
        day,
        finished: day == FINAL_DAY,
    })
}

/// Clears the in-progress day only; history and position are untouched.
pub fn reset_today(ledger: &mut UserLedger) {
    ledger.today = TodayState::default();
}

/// Wipes all progress back to day 1. The caller is expected to have
/// confirmed; the record itself is kept.
pub fn reset_challenge(ledger: &mut UserLedger) {
    *ledger = UserLedger::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskSet, TASK_KEYS};
    use serde_json::json;

    fn all_checked(ledger: &mut UserLedger) {
        for key in TASK_KEYS {
            ledger.today.task_set.toggle(key);
        }
    }

    #[test]
    fn percentage_is_100_iff_day_complete() {
        let mut ledger = UserLedger::default();
        for key in TASK_KEYS {
            assert_eq!(
                completion_percentage(&ledger) == 100,
                is_day_complete(&ledger)
            );
            toggle_task(&mut ledger, key).unwrap();
        }
        assert!(is_day_complete(&ledger));
        assert_eq!(completion_percentage(&ledger), 100);
    }

    #[test]
    fn percentage_counts_in_tens() {
        let mut ledger = UserLedger::default();
        toggle_task(&mut ledger, "walk8k").unwrap();
        toggle_task(&mut ledger, "threeMeals").unwrap();
        toggle_task(&mut ledger, "wakeUp4am").unwrap();
        assert_eq!(completion_percentage(&ledger), 30);
    }

    #[test]
    fn toggle_rejects_unknown_key() {
        let mut ledger = UserLedger::default();
        let before = ledger.clone();
        assert!(toggle_task(&mut ledger, "coldShower").is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn metric_coercion_never_errors() {
        let mut ledger = UserLedger::default();
        set_water(&mut ledger, &json!("abc"));
        assert_eq!(ledger.today.water_liters, 0.0);
        set_water(&mut ledger, &json!(-5));
        assert_eq!(ledger.today.water_liters, 0.0);
        set_water(&mut ledger, &json!("2.5"));
        assert_eq!(ledger.today.water_liters, 2.5);
        set_water(&mut ledger, &json!(3.0));
        assert_eq!(ledger.today.water_liters, 3.0);

        set_steps(&mut ledger, &json!(null));
        assert_eq!(ledger.today.steps, 0);
        set_steps(&mut ledger, &json!("8000"));
        assert_eq!(ledger.today.steps, 8000);
        set_steps(&mut ledger, &json!(-12));
        assert_eq!(ledger.today.steps, 0);
        set_steps(&mut ledger, &json!(10500.9));
        assert_eq!(ledger.today.steps, 10500);
    }

    #[test]
    fn complete_day_refuses_unchecked_tasks() {
        let mut ledger = UserLedger::default();
        toggle_task(&mut ledger, "walk8k").unwrap();
        let before = ledger.clone();
        assert!(complete_day(&mut ledger).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn complete_day_snapshots_and_advances() {
        let mut ledger = UserLedger::default();
        all_checked(&mut ledger);
        ledger.today.water_liters = 2.5;
        ledger.today.steps = 9000;
        let expected_tasks = ledger.today.task_set.clone();

        let now = Utc::now();
        let outcome = complete_day_at(&mut ledger, now).unwrap();
        assert_eq!(outcome, DayCompleted { day: 1, finished: false });
        assert_eq!(ledger.current_day, 2);
        assert_eq!(ledger.completed_days, vec![1]);

        let snapshot = ledger.history.get(&1).unwrap();
        assert_eq!(snapshot.task_set, expected_tasks);
        assert_eq!(snapshot.water_liters, 2.5);
        assert_eq!(snapshot.steps, 9000);
        assert_eq!(snapshot.completed_at, now);

        assert_eq!(ledger.today, TodayState::default());
        assert_eq!(ledger.today.task_set, TaskSet::default());
    }

    #[test]
    fn final_day_saturates() {
        let mut ledger = UserLedger::default();
        ledger.current_day = FINAL_DAY;
        all_checked(&mut ledger);

        let outcome = complete_day(&mut ledger).unwrap();
        assert_eq!(outcome, DayCompleted { day: 75, finished: true });
        assert_eq!(ledger.current_day, FINAL_DAY);
        assert!(ledger.completed_days.contains(&FINAL_DAY));

        // Re-completing the final day neither duplicates nor resnapshots.
        let first_snapshot = ledger.history.get(&FINAL_DAY).unwrap().clone();
        all_checked(&mut ledger);
        ledger.today.steps = 1;
        let again = complete_day(&mut ledger).unwrap();
        assert!(again.finished);
        assert_eq!(
            ledger.completed_days.iter().filter(|d| **d == FINAL_DAY).count(),
            1
        );
        assert_eq!(ledger.history.get(&FINAL_DAY).unwrap(), &first_snapshot);
    }

    #[test]
    fn reset_today_leaves_history_alone() {
        let mut ledger = UserLedger::default();
        all_checked(&mut ledger);
        complete_day(&mut ledger).unwrap();
        toggle_task(&mut ledger, "walk8k").unwrap();
        ledger.today.steps = 500;

        reset_today(&mut ledger);
        assert_eq!(ledger.today, TodayState::default());
        assert_eq!(ledger.current_day, 2);
        assert_eq!(ledger.completed_days, vec![1]);
        assert!(ledger.history.contains_key(&1));
    }

    #[test]
    fn reset_challenge_wipes_everything() {
        let mut ledger = UserLedger::default();
        for _ in 0..3 {
            all_checked(&mut ledger);
            complete_day(&mut ledger).unwrap();
        }
        reset_challenge(&mut ledger);
        assert_eq!(ledger, UserLedger::default());
    }
}
