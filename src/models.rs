use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of daily non-negotiables. The key set is fixed at compile time and
/// never grows at runtime.
pub const TASK_COUNT: usize = 10;

/// Wire names of the ten tasks, in display order.
pub const TASK_KEYS: [&str; TASK_COUNT] = [
    "wakeUp4am",
    "morningJournal",
    "exercise5am",
    "water1L",
    "noCoffeePhone",
    "threeMeals",
    "water2to3L",
    "walk8k",
    "eveningJournal",
    "noPhoneAfter8",
];

/// The ten daily non-negotiables, all starting unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TaskSet {
    #[serde(rename = "wakeUp4am", default)]
    pub wake_up_4am: bool,
    #[serde(rename = "morningJournal", default)]
    pub morning_journal: bool,
    #[serde(rename = "exercise5am", default)]
    pub exercise_5am: bool,
    #[serde(rename = "water1L", default)]
    pub water_1l: bool,
    #[serde(rename = "noCoffeePhone", default)]
    pub no_coffee_phone: bool,
    #[serde(rename = "threeMeals", default)]
    pub three_meals: bool,
    #[serde(rename = "water2to3L", default)]
    pub water_2to3l: bool,
    #[serde(rename = "walk8k", default)]
    pub walk_8k: bool,
    #[serde(rename = "eveningJournal", default)]
    pub evening_journal: bool,
    #[serde(rename = "noPhoneAfter8", default)]
    pub no_phone_after_8: bool,
}

impl TaskSet {
    pub fn flags(&self) -> [bool; TASK_COUNT] {
        [
            self.wake_up_4am,
            self.morning_journal,
            self.exercise_5am,
            self.water_1l,
            self.no_coffee_phone,
            self.three_meals,
            self.water_2to3l,
            self.walk_8k,
            self.evening_journal,
            self.no_phone_after_8,
        ]
    }

    fn flag_mut(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "wakeUp4am" => Some(&mut self.wake_up_4am),
            "morningJournal" => Some(&mut self.morning_journal),
            "exercise5am" => Some(&mut self.exercise_5am),
            "water1L" => Some(&mut self.water_1l),
            "noCoffeePhone" => Some(&mut self.no_coffee_phone),
            "threeMeals" => Some(&mut self.three_meals),
            "water2to3L" => Some(&mut self.water_2to3l),
            "walk8k" => Some(&mut self.walk_8k),
            "eveningJournal" => Some(&mut self.evening_journal),
            "noPhoneAfter8" => Some(&mut self.no_phone_after_8),
            _ => None,
        }
    }

    /// Flips one flag; `None` when `key` is not one of the ten.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let flag = self.flag_mut(key)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn count_true(&self) -> usize {
        self.flags().iter().filter(|flag| **flag).count()
    }

    pub fn all_true(&self) -> bool {
        self.flags().iter().all(|flag| *flag)
    }
}

/// Immutable capture of a day's state, recorded when the day is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    #[serde(rename = "taskSet")]
    pub task_set: TaskSet,
    #[serde(rename = "waterLiters")]
    pub water_liters: f64,
    pub steps: u64,
    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,
}

/// Mutable working state for the day in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TodayState {
    #[serde(rename = "taskSet", default)]
    pub task_set: TaskSet,
    #[serde(rename = "waterLiters", default)]
    pub water_liters: f64,
    #[serde(default)]
    pub steps: u64,
}

/// Per-user authoritative progress record.
///
/// Invariants: `history` holds a snapshot for day `d` iff `d` is in
/// `completed_days`; `completed_days` is in completion order with no
/// duplicates; `current_day` stays within 1..=75.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLedger {
    #[serde(rename = "currentDay")]
    pub current_day: u32,
    #[serde(rename = "completedDays", default)]
    pub completed_days: Vec<u32>,
    #[serde(default)]
    pub history: BTreeMap<u32, DailySnapshot>,
    #[serde(default)]
    pub today: TodayState,
}

impl Default for UserLedger {
    fn default() -> Self {
        Self {
            current_day: 1,
            completed_days: Vec::new(),
            history: BTreeMap::new(),
            today: TodayState::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricRequest {
    /// Raw JSON value; anything non-numeric or negative coerces to zero.
    pub value: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub current_day: u32,
    pub completed_count: usize,
    pub completion_percentage: u32,
    pub day_complete: bool,
    pub today: TodayState,
}

#[derive(Debug, Serialize)]
pub struct CompleteDayResponse {
    pub completed_day: u32,
    pub finished: bool,
    pub current_day: u32,
}

#[derive(Debug, Serialize)]
pub struct Totals {
    pub total_water: f64,
    pub total_steps: u64,
    pub total_tasks_completed: u64,
    pub avg_water_per_day: f64,
    pub avg_steps_per_day: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Missed,
    Today,
    Future,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub totals: Totals,
    pub current_streak: u32,
    pub achievements: Vec<&'static str>,
    pub day_grid: Vec<DayStatus>,
    pub completed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_set_serializes_exactly_the_fixed_keys() {
        let value = serde_json::to_value(TaskSet::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), TASK_COUNT);
        for key in TASK_KEYS {
            assert_eq!(object.get(key), Some(&serde_json::Value::Bool(false)));
        }
    }

    #[test]
    fn every_fixed_key_toggles() {
        let mut tasks = TaskSet::default();
        for key in TASK_KEYS {
            assert_eq!(tasks.toggle(key), Some(true), "key {key}");
        }
        assert!(tasks.all_true());
        assert_eq!(tasks.toggle("sleep8h"), None);
    }

    #[test]
    fn ledger_round_trips_byte_identical() {
        let mut ledger = UserLedger::default();
        ledger.current_day = 3;
        ledger.completed_days = vec![1, 2];
        ledger.today.water_liters = 1.5;
        ledger.today.steps = 4200;
        ledger.today.task_set.walk_8k = true;
        for day in [1u32, 2] {
            let mut tasks = TaskSet::default();
            for key in TASK_KEYS {
                tasks.toggle(key);
            }
            ledger.history.insert(
                day,
                DailySnapshot {
                    task_set: tasks,
                    water_liters: 2.5,
                    steps: 9000,
                    completed_at: chrono::DateTime::parse_from_rfc3339("2026-01-02T21:00:00Z")
                        .unwrap()
                        .with_timezone(&chrono::Utc),
                },
            );
        }

        let first = serde_json::to_vec(&ledger).unwrap();
        let reloaded: UserLedger = serde_json::from_slice(&first).unwrap();
        let second = serde_json::to_vec(&reloaded).unwrap();
        assert_eq!(first, second);
        assert_eq!(ledger, reloaded);
    }
}
