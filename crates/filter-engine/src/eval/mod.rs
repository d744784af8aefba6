mod check;
mod runtime;

pub use runtime::Evaluator;
