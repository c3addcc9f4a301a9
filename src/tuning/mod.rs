//! Periodic structure of tuning tables.
//!
//! A tuning table is periodic when it repeats every `scale_size` entries
//! with each repetition `period` times the previous one. [`infer`] finds
//! that structure in a 128-entry table; [`extend`] uses it to extrapolate
//! the table past note 127.

pub mod extend;
pub mod infer;

pub use extend::extend_table;
pub use infer::{infer_scale, ScaleStructure};
