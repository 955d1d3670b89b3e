//! Pantry reconciliation and weekly scheduling engine for a household meal
//! planner. The engine is pure and stateless: callers fetch snapshots from the
//! document-store collaborator, compute availability, feasibility, week grids
//! and dashboard views over them, and forward staged writes back to the store.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod meals;
pub mod pantry;
pub mod planner;
pub mod shopping;
pub mod snapshot;
pub mod store;
