//! Compiles filter trees described as data into typed record predicates.
//!
//! ```
//! use filter_engine::{FieldTable, PredicateCompiler};
//! use model::filter::{FilterNode, FilterOperator};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let compiler = PredicateCompiler::new(
//!     FieldTable::<User>::new()
//!         .text("Name", |u| u.name.as_str())
//!         .int("Age", |u| u.age),
//! );
//!
//! let predicate = compiler
//!     .compile(&[
//!         FilterNode::leaf("Name", FilterOperator::Contains, "a"),
//!         FilterNode::leaf("Age", FilterOperator::In, vec![25, 30]).or(),
//!     ])
//!     .unwrap();
//!
//! let user = User { name: "Ali".to_string(), age: 40 };
//! assert!(!predicate.matches(&user));
//! ```

pub mod coerce;
pub mod compile;
pub mod error;
pub mod eval;
pub mod predicate;
pub mod schema;
pub mod settings;
pub mod source;

pub use compile::{PredicateCompiler, compile};
pub use error::{FilterError, Result};
pub use eval::Evaluator;
pub use predicate::Predicate;
pub use schema::{Accessor, FieldTable, Record};
pub use settings::CompilerSettings;
pub use source::{MemorySource, RecordSource};
