//! Column-packing layout core (pure).
//!
//! Leaf-first: measurement of the container and viewport, the registry of
//! measured items, the greedy packer, and the controller that ties them
//! together for one open panel.

pub mod controller;
pub mod measurement;
pub mod packer;
pub mod registry;
pub mod types;

pub use controller::{Invalidation, LayoutController, LayoutInputs};
pub use measurement::{Budget, BudgetPolicy, Geometry, MeasurementProvider};
pub use packer::pack;
pub use registry::{HeightsSnapshot, ItemHandle, ItemRegistry, RegistryError};
pub use types::{format_columns, Column, ColumnBudget, ItemIndex, LayoutState};
