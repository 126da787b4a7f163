//! Inline style composition for rows.
//!
//! Turns arrangements into per-child custom properties and container
//! attributes into alignment and gap properties.
//!
//! # Example
//!
//! ```
//! use rows_core::{Arrangement, ArrangementSet};
//! use rows_style::{child_style, StyleOptions};
//!
//! let set = ArrangementSet::new()
//!     .with("lg", ["1/3", "2/3"].into_iter().collect::<Arrangement>());
//! let options = StyleOptions::new().with_breakpoints(["lg"]);
//!
//! let style = child_style(1, &set, &options);
//! assert_eq!(style.to_string(), "--size-lg:2/3;--flex-lg:0 1 var(--flex-basis)");
//! ```

mod child;
mod container;
mod gap;
mod input;
mod options;
mod properties;

pub use child::{child_style, ChildStyler};
pub use container::{column_style, container_style, ContainerAttributes};
pub use gap::{gap_value, BlockGap, Gaps};
pub use input::parse_arrangement_set;
pub use options::{SizeProperty, StyleOptions};
pub use properties::{CustomProperty, StyleDeclarations};
