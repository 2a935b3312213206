//! colbar
//!
//! Terminal menu bar whose popover lays its items out in height-bounded
//! columns. Items are measured off-screen first, then packed greedily into
//! columns no taller than a fraction of the space below the bar. Columns are
//! filled left to right and never rebalanced.
//!
//! Pure core (`layout`, `model`, `state`) with an impure shell (`view`,
//! `logging`, `config` file loading).

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
