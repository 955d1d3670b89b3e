use time::{Date, Duration};
use tracing::warn;
use uuid::Uuid;

use crate::meals::model::{Meal, MealType};

pub const WEEK_DAYS: usize = 7;

/// The Monday on or before `anchor` (ISO week, Monday-first, locale-agnostic).
pub fn week_start(anchor: Date) -> Date {
    anchor - Duration::days(i64::from(anchor.weekday().number_days_from_monday()))
}

/// Moves the anchor by whole weeks. Reversible: shifting +1 then -1 returns
/// the original date.
pub fn shift_week(anchor: Date, weeks: i64) -> Date {
    anchor + Duration::days(7 * weeks)
}

/// A slot that matched more than one meal. The grid keeps the first match but
/// never hides the ambiguity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConflict {
    pub date: Date,
    pub meal_type: MealType,
    pub meal_ids: Vec<Uuid>,
}

/// Derived 7-day × meal-type view for one week. Never persisted; rebuilt from
/// the meal snapshot on demand.
pub struct WeekGrid {
    days: [Date; WEEK_DAYS],
    // Indexed [day][meal type], meal types in MealType::ALL order.
    cells: Vec<Vec<Option<Meal>>>,
    conflicts: Vec<SlotConflict>,
}

impl WeekGrid {
    pub fn days(&self) -> &[Date; WEEK_DAYS] {
        &self.days
    }

    pub fn slot(&self, day: usize, meal_type: MealType) -> Option<&Meal> {
        let type_idx = MealType::ALL.iter().position(|t| *t == meal_type)?;
        self.cells.get(day)?.get(type_idx)?.as_ref()
    }

    pub fn conflicts(&self) -> &[SlotConflict] {
        &self.conflicts
    }
}

/// Lays out meals into the week containing `anchor`. Each (day, meal type)
/// cell takes the first meal in snapshot order whose date and type match;
/// empty cells stay `None` for the caller to render as "add meal". Duplicate
/// matches for one slot are reported via `conflicts` and a warning.
pub fn build_week(anchor: Date, meals: &[Meal]) -> WeekGrid {
    let start = week_start(anchor);
    let days: [Date; WEEK_DAYS] =
        std::array::from_fn(|i| start + Duration::days(i as i64));

    let mut conflicts = Vec::new();
    let cells = days
        .iter()
        .map(|day| {
            MealType::ALL
                .iter()
                .map(|meal_type| {
                    let mut matches = meals
                        .iter()
                        .filter(|m| m.date == *day && m.meal_type == *meal_type);
                    let chosen = matches.next().cloned();
                    let extra_ids: Vec<Uuid> = matches.map(|m| m.id).collect();
                    if let (Some(chosen), false) = (&chosen, extra_ids.is_empty()) {
                        warn!(
                            date = %day,
                            meal_type = %meal_type,
                            extra = extra_ids.len(),
                            "multiple meals share one slot; keeping the first"
                        );
                        let mut meal_ids = vec![chosen.id];
                        meal_ids.extend(extra_ids);
                        conflicts.push(SlotConflict {
                            date: *day,
                            meal_type: *meal_type,
                            meal_ids,
                        });
                    }
                    chosen
                })
                .collect()
        })
        .collect();

    WeekGrid {
        days,
        cells,
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    fn meal_on(name: &str, date: Date, meal_type: MealType) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date,
            meal_type,
            description: None,
            ingredients: Vec::new(),
            preparation_time: 30,
            difficulty: Default::default(),
            completed: false,
            completed_at: None,
        }
    }

    #[test]
    fn week_starts_on_the_monday_before_a_wednesday_anchor() {
        // 2026-08-26 is a Wednesday.
        let anchor = date!(2026 - 08 - 26);
        assert_eq!(anchor.weekday(), Weekday::Wednesday);
        assert_eq!(week_start(anchor), date!(2026 - 08 - 24));
    }

    #[test]
    fn monday_anchors_on_itself_and_sunday_reaches_back_six_days() {
        assert_eq!(week_start(date!(2026 - 08 - 24)), date!(2026 - 08 - 24));
        assert_eq!(week_start(date!(2026 - 08 - 30)), date!(2026 - 08 - 24));
    }

    #[test]
    fn grid_always_has_seven_consecutive_days() {
        let grid = build_week(date!(2026 - 08 - 26), &[]);
        let days = grid.days();
        assert_eq!(days.len(), WEEK_DAYS);
        assert_eq!(days[0], date!(2026 - 08 - 24));
        assert_eq!(days[6], date!(2026 - 08 - 30));
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn cells_hold_the_matching_meal_or_stay_empty() {
        let meals = vec![
            meal_on("Porridge", date!(2026 - 08 - 24), MealType::Breakfast),
            meal_on("Paella", date!(2026 - 08 - 26), MealType::Lunch),
        ];
        let grid = build_week(date!(2026 - 08 - 26), &meals);

        assert_eq!(
            grid.slot(0, MealType::Breakfast).map(|m| m.name.as_str()),
            Some("Porridge")
        );
        assert_eq!(
            grid.slot(2, MealType::Lunch).map(|m| m.name.as_str()),
            Some("Paella")
        );
        assert!(grid.slot(2, MealType::Dinner).is_none());
        assert!(grid.slot(6, MealType::Snack).is_none());
        assert!(grid.conflicts().is_empty());
    }

    #[test]
    fn meals_outside_the_week_are_ignored() {
        let meals = vec![meal_on("Next week", date!(2026 - 08 - 31), MealType::Lunch)];
        let grid = build_week(date!(2026 - 08 - 26), &meals);
        for day in 0..WEEK_DAYS {
            for meal_type in MealType::ALL {
                assert!(grid.slot(day, meal_type).is_none());
            }
        }
    }

    #[test]
    fn duplicate_slot_keeps_first_match_and_reports_the_conflict() {
        let first = meal_on("First", date!(2026 - 08 - 25), MealType::Dinner);
        let second = meal_on("Second", date!(2026 - 08 - 25), MealType::Dinner);
        let ids = (first.id, second.id);
        let grid = build_week(date!(2026 - 08 - 26), &[first, second]);

        assert_eq!(
            grid.slot(1, MealType::Dinner).map(|m| m.name.as_str()),
            Some("First")
        );
        assert_eq!(grid.conflicts().len(), 1);
        let conflict = &grid.conflicts()[0];
        assert_eq!(conflict.date, date!(2026 - 08 - 25));
        assert_eq!(conflict.meal_type, MealType::Dinner);
        assert_eq!(conflict.meal_ids, vec![ids.0, ids.1]);
    }

    #[test]
    fn shift_week_round_trips() {
        let anchor = date!(2026 - 08 - 26);
        assert_eq!(shift_week(anchor, 1), date!(2026 - 09 - 02));
        assert_eq!(shift_week(shift_week(anchor, 1), -1), anchor);
        assert_eq!(shift_week(shift_week(anchor, -3), 3), anchor);
    }

    #[test]
    fn same_anchor_builds_the_same_week() {
        let meals = vec![meal_on("Stew", date!(2026 - 08 - 27), MealType::Dinner)];
        let a = build_week(date!(2026 - 08 - 26), &meals);
        let b = build_week(date!(2026 - 08 - 26), &meals);
        assert_eq!(a.days(), b.days());
        assert_eq!(
            a.slot(3, MealType::Dinner).map(|m| m.id),
            b.slot(3, MealType::Dinner).map(|m| m.id)
        );
    }
}
