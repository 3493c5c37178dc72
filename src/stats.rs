use crate::ledger::FINAL_DAY;
use crate::models::{DayStatus, StatsResponse, Totals, UserLedger};

/// Unlock thresholds, keyed on the number of completed days.
pub const ACHIEVEMENTS: [(usize, &str); 4] = [
    (7, "First Week Warrior"),
    (21, "Habit Builder"),
    (50, "Marathon Mindset"),
    (75, "Hard 75 Champion"),
];

/// Totals over completed days only; the in-progress day does not count
/// toward any aggregate until it is completed.
pub fn build_totals(ledger: &UserLedger) -> Totals {
    let total_water: f64 = ledger
        .history
        .values()
        .map(|snapshot| snapshot.water_liters)
        .sum();
    let total_steps: u64 = ledger.history.values().map(|snapshot| snapshot.steps).sum();
    let total_tasks_completed: u64 = ledger
        .history
        .values()
        .map(|snapshot| snapshot.task_set.count_true() as u64)
        .sum();

    let days = ledger.completed_days.len();
    let (avg_water_per_day, avg_steps_per_day) = if days == 0 {
        (0.0, 0)
    } else {
        (
            total_water / days as f64,
            (total_steps as f64 / days as f64).round() as u64,
        )
    };

    Totals {
        total_water,
        total_steps,
        total_tasks_completed,
        avg_water_per_day,
        avg_steps_per_day,
    }
}

/// Length of the consecutive completed run ending immediately before
/// `current_day`. Ledger position, not the wall clock, decides what counts
/// as "immediately before"; a skipped day breaks the run.
pub fn current_streak(ledger: &UserLedger) -> u32 {
    let mut sorted = ledger.completed_days.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&most_recent) = sorted.first() else {
        return 0;
    };
    if most_recent + 1 != ledger.current_day {
        return 0;
    }

    let mut streak = 1;
    for pair in sorted.windows(2) {
        if pair[1] + 1 == pair[0] {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Unlocked achievement names. Derived purely from the completed count, so
/// it only moves backwards when the whole challenge is reset.
pub fn achievements(ledger: &UserLedger) -> Vec<&'static str> {
    let completed = ledger.completed_days.len();
    ACHIEVEMENTS
        .iter()
        .filter(|(threshold, _)| completed >= *threshold)
        .map(|(_, name)| *name)
        .collect()
}

/// Classification for one cell of the 75-day grid.
pub fn day_status(ledger: &UserLedger, day: u32) -> DayStatus {
    if ledger.completed_days.contains(&day) {
        DayStatus::Completed
    } else if day < ledger.current_day {
        DayStatus::Missed
    } else if day == ledger.current_day {
        DayStatus::Today
    } else {
        DayStatus::Future
    }
}

pub fn build_stats(ledger: &UserLedger) -> StatsResponse {
    StatsResponse {
        totals: build_totals(ledger),
        current_streak: current_streak(ledger),
        achievements: achievements(ledger),
        day_grid: (1..=FINAL_DAY).map(|day| day_status(ledger, day)).collect(),
        completed_count: ledger.completed_days.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{complete_day, toggle_task};
    use crate::models::TASK_KEYS;

    fn ledger_with_completed(days: &[u32], current_day: u32) -> UserLedger {
        let mut ledger = UserLedger::default();
        for &day in days {
            ledger.current_day = day;
            for key in TASK_KEYS {
                toggle_task(&mut ledger, key).unwrap();
            }
            ledger.today.water_liters = 2.0;
            ledger.today.steps = 8000;
            complete_day(&mut ledger).unwrap();
        }
        ledger.current_day = current_day;
        ledger
    }

    #[test]
    fn totals_exclude_the_day_in_progress() {
        let mut ledger = ledger_with_completed(&[1, 2], 3);
        ledger.today.water_liters = 9.0;
        ledger.today.steps = 99_999;

        let totals = build_totals(&ledger);
        assert_eq!(totals.total_water, 4.0);
        assert_eq!(totals.total_steps, 16_000);
        assert_eq!(totals.total_tasks_completed, 20);
        assert_eq!(totals.avg_water_per_day, 2.0);
        assert_eq!(totals.avg_steps_per_day, 8000);
    }

    #[test]
    fn empty_history_means_zero_totals() {
        let totals = build_totals(&UserLedger::default());
        assert_eq!(totals.total_water, 0.0);
        assert_eq!(totals.total_steps, 0);
        assert_eq!(totals.total_tasks_completed, 0);
        assert_eq!(totals.avg_water_per_day, 0.0);
        assert_eq!(totals.avg_steps_per_day, 0);
    }

    #[test]
    fn streak_is_zero_without_completions() {
        assert_eq!(current_streak(&UserLedger::default()), 0);
    }

    #[test]
    fn streak_requires_the_day_just_before_current() {
        // 5 was completed but current is 7, so the run is broken.
        let ledger = ledger_with_completed(&[1, 2, 3, 5], 7);
        assert_eq!(current_streak(&ledger), 0);
    }

    #[test]
    fn streak_counts_back_from_the_most_recent_day() {
        // 4 is missing: only day 5 chains to current day 6.
        let ledger = ledger_with_completed(&[1, 2, 3, 5], 6);
        assert_eq!(current_streak(&ledger), 1);

        let full = ledger_with_completed(&[1, 2, 3, 4], 5);
        assert_eq!(current_streak(&full), 4);
    }

    #[test]
    fn achievements_unlock_at_thresholds() {
        let days: Vec<u32> = (1..=21).collect();
        let ledger = ledger_with_completed(&days, 22);
        let unlocked = achievements(&ledger);
        assert!(unlocked.contains(&"First Week Warrior"));
        assert!(unlocked.contains(&"Habit Builder"));
        assert!(!unlocked.contains(&"Marathon Mindset"));
        assert!(!unlocked.contains(&"Hard 75 Champion"));

        assert!(achievements(&ledger_with_completed(&[1, 2], 3)).is_empty());
    }

    #[test]
    fn day_grid_classifies_every_cell() {
        let ledger = ledger_with_completed(&[1, 3], 5);
        assert_eq!(day_status(&ledger, 1), DayStatus::Completed);
        assert_eq!(day_status(&ledger, 2), DayStatus::Missed);
        assert_eq!(day_status(&ledger, 3), DayStatus::Completed);
        assert_eq!(day_status(&ledger, 4), DayStatus::Missed);
        assert_eq!(day_status(&ledger, 5), DayStatus::Today);
        assert_eq!(day_status(&ledger, 6), DayStatus::Future);

        let stats = build_stats(&ledger);
        assert_eq!(stats.day_grid.len(), 75);
        assert_eq!(stats.completed_count, 2);
    }
}
