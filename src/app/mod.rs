//! Application layer with dependency injection container.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │       App (DI container)             │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                       │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - JsonHighScoreStore                │   │
//! │  │  - InMemoryHighScoreStore (testing)  │   │
//! │  │  - TerminalRenderer / KeyboardInput  │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                 │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Ports                               │   │
//! │  │  - HighScoreStore, Renderer,         │   │
//! │  │    InputSource                       │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                    │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain                              │   │
//! │  │  - GameController                    │   │
//! │  │  - board engine, Score               │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod container;

pub use config::{GameConfig, MAX_WIN_TILE};
pub use container::{App, AppBuilder};
