//! User input module
//!
//! Console access, the food query grammar and the collection loop.

pub mod collector;
pub mod console;
pub mod validator;

pub use collector::{collect, INVALID_FORMAT, PROMPT};
pub use console::Console;
pub use validator::{is_valid_query, FoodQuery};
