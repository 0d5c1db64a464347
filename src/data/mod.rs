//! Data layer: course records, storage, scoring and filtering.
//!
//! Architecture:
//! ```text
//!   score.csv
//!       │
//!       ▼
//!   ┌──────────┐
//!   │  store    │  load / save the whole list
//!   └──────────┘
//!       │
//!       ▼
//!   ┌──────────────┐
//!   │ Vec<Course>   │  owned by AppState, edited via form
//!   └──────────────┘
//!       │                 │
//!       ▼                 ▼
//!   ┌──────────┐     ┌──────────┐
//!   │ scoring   │     │  filter   │  visible table rows
//!   └──────────┘     └──────────┘
//! ```

pub mod filter;
pub mod form;
pub mod model;
pub mod scoring;
pub mod store;
