use time::{Date, Duration, OffsetDateTime};

use crate::meals::model::Meal;
use crate::pantry::model::PantryItem;
use crate::shopping::model::ShoppingItem;

const UPCOMING_WINDOW_DAYS: i64 = 7;
const UPCOMING_LIMIT: usize = 5;

/// Read-only dashboard views, recomputed in full from the caller's snapshot on
/// every refresh. No caching, no incremental updates: the engine keeps no
/// state between calls, so there is nothing to invalidate.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub today_meals: Vec<Meal>,
    pub upcoming_meals: Vec<Meal>,
    pub low_stock: Vec<PantryItem>,
    pub pending_shopping: Vec<ShoppingItem>,
    /// Percent of today's meals completed, rounded to the nearest integer.
    /// A day with no planned meals reads 0%, not undefined.
    pub completion_rate: u8,
}

impl DashboardSummary {
    pub fn compute(
        today: Date,
        meals: &[Meal],
        pantry: &[PantryItem],
        shopping: &[ShoppingItem],
    ) -> Self {
        let today_meals: Vec<Meal> =
            meals.iter().filter(|m| m.date == today).cloned().collect();
        let completed_today = today_meals.iter().filter(|m| m.completed).count();
        let completion_rate =
            (completed_today as f64 / today_meals.len().max(1) as f64 * 100.0).round() as u8;

        let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);
        let mut upcoming_meals: Vec<Meal> = meals
            .iter()
            .filter(|m| m.date >= today && m.date <= horizon)
            .cloned()
            .collect();
        // Stable sort: same-day meals keep snapshot order.
        upcoming_meals.sort_by_key(|m| m.date);
        upcoming_meals.truncate(UPCOMING_LIMIT);

        let low_stock = pantry.iter().filter(|i| i.is_low_stock()).cloned().collect();
        let pending_shopping = shopping.iter().filter(|i| !i.purchased).cloned().collect();

        Self {
            today_meals,
            upcoming_meals,
            low_stock,
            pending_shopping,
            completion_rate,
        }
    }
}

/// The system's local calendar date, falling back to UTC when the local offset
/// cannot be determined.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::model::MealType;
    use time::macros::date;
    use uuid::Uuid;

    fn meal_on(name: &str, date: Date, completed: bool) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date,
            meal_type: MealType::Lunch,
            description: None,
            ingredients: Vec::new(),
            preparation_time: 30,
            difficulty: Default::default(),
            completed,
            completed_at: None,
        }
    }

    fn pantry_item(name: &str, quantity: f64, min_quantity: f64) -> PantryItem {
        PantryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            unit: "kg".to_string(),
            min_quantity,
            category: "Other".to_string(),
        }
    }

    const TODAY: Date = date!(2026 - 08 - 26);

    #[test]
    fn today_meals_match_the_calendar_date_only() {
        let meals = vec![
            meal_on("Lunch", TODAY, false),
            meal_on("Tomorrow", date!(2026 - 08 - 27), false),
        ];
        let summary = DashboardSummary::compute(TODAY, &meals, &[], &[]);
        assert_eq!(summary.today_meals.len(), 1);
        assert_eq!(summary.today_meals[0].name, "Lunch");
    }

    #[test]
    fn completion_rate_is_zero_on_an_empty_day() {
        let summary = DashboardSummary::compute(TODAY, &[], &[], &[]);
        assert_eq!(summary.completion_rate, 0);
    }

    #[test]
    fn completion_rate_rounds_to_nearest_percent() {
        let meals = vec![
            meal_on("One", TODAY, true),
            meal_on("Two", TODAY, false),
            meal_on("Three", TODAY, false),
        ];
        // 1/3 => 33.33 => 33.
        let summary = DashboardSummary::compute(TODAY, &meals, &[], &[]);
        assert_eq!(summary.completion_rate, 33);

        let meals = vec![
            meal_on("One", TODAY, true),
            meal_on("Two", TODAY, true),
            meal_on("Three", TODAY, false),
        ];
        // 2/3 => 66.67 => 67.
        let summary = DashboardSummary::compute(TODAY, &meals, &[], &[]);
        assert_eq!(summary.completion_rate, 67);
    }

    #[test]
    fn upcoming_window_is_inclusive_on_both_ends() {
        let meals = vec![
            meal_on("Yesterday", date!(2026 - 08 - 25), false),
            meal_on("Today", TODAY, false),
            meal_on("Edge", date!(2026 - 09 - 02), false),
            meal_on("Beyond", date!(2026 - 09 - 03), false),
        ];
        let summary = DashboardSummary::compute(TODAY, &meals, &[], &[]);
        let names: Vec<&str> = summary
            .upcoming_meals
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Today", "Edge"]);
    }

    #[test]
    fn upcoming_sorts_by_date_keeps_ties_stable_and_truncates_to_five() {
        let meals = vec![
            meal_on("f", date!(2026 - 08 - 29), false),
            meal_on("a", date!(2026 - 08 - 27), false),
            meal_on("b", date!(2026 - 08 - 27), false),
            meal_on("c", date!(2026 - 08 - 27), false),
            meal_on("d", date!(2026 - 08 - 28), false),
            meal_on("e", date!(2026 - 08 - 28), false),
        ];
        let summary = DashboardSummary::compute(TODAY, &meals, &[], &[]);
        let names: Vec<&str> = summary
            .upcoming_meals
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn low_stock_includes_zero_and_respects_min_quantity() {
        let pantry = vec![
            pantry_item("Salt", 0.0, 1.0),
            pantry_item("Rice", 2.0, 2.0),
            pantry_item("Oil", 3.0, 1.0),
        ];
        let summary = DashboardSummary::compute(TODAY, &[], &pantry, &[]);
        let names: Vec<&str> = summary.low_stock.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Salt", "Rice"]);
    }

    #[test]
    fn pending_shopping_excludes_purchased_entries() {
        let shopping = vec![
            ShoppingItem {
                id: Uuid::new_v4(),
                name: "Milk".to_string(),
                quantity: 1.0,
                unit: "l".to_string(),
                purchased: true,
                purchased_quantity: Some(1.0),
                purchased_at: None,
            },
            ShoppingItem {
                id: Uuid::new_v4(),
                name: "Bread".to_string(),
                quantity: 2.0,
                unit: "units".to_string(),
                purchased: false,
                purchased_quantity: None,
                purchased_at: None,
            },
        ];
        let summary = DashboardSummary::compute(TODAY, &[], &[], &shopping);
        assert_eq!(summary.pending_shopping.len(), 1);
        assert_eq!(summary.pending_shopping[0].name, "Bread");
    }
}
