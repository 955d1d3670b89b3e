use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use pantryplan::config::AppConfig;
use pantryplan::dashboard::{local_today, DashboardSummary};
use pantryplan::meals::{can_cook, missing_or_insufficient, MealStore, MealType, NewMeal};
use pantryplan::pantry::{NewPantryItem, PantryIndex, PantryStore};
use pantryplan::planner::{build_week, WEEK_DAYS};
use pantryplan::shopping::{NewShoppingItem, ShoppingStore};
use pantryplan::snapshot::Snapshot;
use pantryplan::store::{DocumentStore, MemoryStore, MEALS, PANTRY, SHOPPING};

#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    meals: Vec<Value>,
    #[serde(default)]
    pantry: Vec<Value>,
    #[serde(default)]
    shopping: Vec<Value>,
}

async fn seed_from_file(store: &dyn DocumentStore, path: &std::path::Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    let seed: SeedFile = serde_json::from_str(&raw).context("parse seed file")?;
    for doc in seed.meals {
        store.insert(MEALS, doc).await?;
    }
    for doc in seed.pantry {
        store.insert(PANTRY, doc).await?;
    }
    for doc in seed.shopping {
        store.insert(SHOPPING, doc).await?;
    }
    Ok(())
}

async fn seed_sample(
    meals: &MealStore,
    pantry: &PantryStore,
    shopping: &ShoppingStore,
) -> anyhow::Result<()> {
    let today = local_today();

    pantry
        .add(&NewPantryItem::new("Tomato", 2.0, "kg")?.with_category("Vegetables"))
        .await?;
    pantry
        .add(&NewPantryItem::new("Rice", 0.5, "kg")?.with_min_quantity(1.0)?)
        .await?;
    pantry.add(&NewPantryItem::new("Eggs", 6.0, "units")?).await?;

    let mut lunch = NewMeal::new("Tomato rice", today, MealType::Lunch)?;
    lunch.add_ingredient("Tomato", 1.0, "kg")?;
    lunch.add_ingredient("Rice", 0.3, "kg")?;
    meals.add(&lunch).await?;

    let mut dinner = NewMeal::new("Omelette", today, MealType::Dinner)?;
    dinner.add_ingredient("Eggs", 3.0, "units")?;
    dinner.add_ingredient("Onion", 1.0, "units")?;
    meals.add(&dinner).await?;

    shopping.add(&NewShoppingItem::new("Onion", 2.0, "units")?).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "pantryplan=debug".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let meals = MealStore::new(store.clone());
    let pantry = PantryStore::new(store.clone());
    let shopping = ShoppingStore::new(store.clone());

    match &config.seed_file {
        Some(path) => seed_from_file(store.as_ref(), path).await?,
        None => {
            info!("no seed file configured; using the built-in sample data");
            seed_sample(&meals, &pantry, &shopping).await?;
        }
    }

    let snapshot = Snapshot::load(&meals, &pantry, &shopping)
        .await
        .context("load snapshot")?;
    let today = local_today();
    let anchor = config.week_anchor.unwrap_or(today);

    let summary = DashboardSummary::compute(
        today,
        &snapshot.meals,
        &snapshot.pantry,
        &snapshot.shopping,
    );
    info!(
        %today,
        today_meals = summary.today_meals.len(),
        upcoming = summary.upcoming_meals.len(),
        low_stock = summary.low_stock.len(),
        pending_shopping = summary.pending_shopping.len(),
        completion_rate = summary.completion_rate,
        "dashboard"
    );
    for item in &summary.low_stock {
        warn!(name = %item.name, quantity = item.quantity, unit = %item.unit, "low stock");
    }

    let index = PantryIndex::build(&snapshot.pantry);
    let grid = build_week(anchor, &snapshot.meals);
    for day in 0..WEEK_DAYS {
        let date = grid.days()[day];
        for meal_type in MealType::ALL {
            let Some(meal) = grid.slot(day, meal_type) else {
                continue;
            };
            if meal.completed {
                info!(%date, %meal_type, name = %meal.name, "completed");
            } else if can_cook(meal, &index) {
                info!(%date, %meal_type, name = %meal.name, "ready to cook");
            } else {
                let shortfall: Vec<String> = missing_or_insufficient(meal, &index)
                    .iter()
                    .map(|i| format!("{} ({} {})", i.name, i.quantity, i.unit))
                    .collect();
                warn!(%date, %meal_type, name = %meal.name, ?shortfall, "missing ingredients");
            }
        }
    }
    for conflict in grid.conflicts() {
        warn!(
            date = %conflict.date,
            meal_type = %conflict.meal_type,
            meals = conflict.meal_ids.len(),
            "slot has more than one meal"
        );
    }

    Ok(())
}
