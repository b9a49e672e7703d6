//! pocketcore — engine and shared pieces of the pocket calculator
//!
//! Front ends own one [`CalculatorState`], turn each button press into a
//! [`Token`], pass both to [`dispatch`] and render the returned state's
//! display text.

pub mod evaluator;
pub mod interpreter;
pub mod state;
pub mod storage;
pub mod theme;
pub mod token;

pub use evaluator::{evaluate, EvaluationError, ERROR_MARKER};
pub use interpreter::{dispatch, dispatch_all};
pub use state::CalculatorState;
pub use storage::{LayoutMode, Preferences};
pub use theme::PocketTheme;
pub use token::{Digit, Operator, Token};
