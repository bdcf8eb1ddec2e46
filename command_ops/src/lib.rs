//! # Command Operations
//!
//! The verbs behind `:set`, `:map`, `:unmap` and friends, wired to a settings
//! store, a key map and a status sink supplied by the host.
//!
//! ## Philosophy
//!
//! - **Injected collaborators**: Operations borrows its store, key map and sink
//! - **Never fails loudly**: Every outcome goes to the sink, nothing is returned
//! - **Vim wording**: Messages match what a Vim user expects to read
//!
//! ## Example
//!
//! ```ignore
//! use command_ops::{Operations, RecordingStatusSink};
//! use key_map::{KeyMapTable, KeyRemapMode};
//! use settings_registry::defaults::create_global_registry;
//!
//! let mut settings = create_global_registry();
//! let mut key_map = KeyMapTable::new();
//! let mut sink = RecordingStatusSink::new();
//!
//! let mut ops = Operations::new(&mut settings, &mut key_map, &mut sink);
//! ops.set_setting_value("ts", "4");
//! ops.remap_keys("jj", "<Esc>", &[KeyRemapMode::Insert], false);
//! ops.print_setting("ts");
//!
//! assert_eq!(sink.statuses(), vec!["tabstop=4"]);
//! ```

pub mod display;
pub mod error;
pub mod operations;
pub mod snapshot;
pub mod status;

pub use display::{format_mapping, format_setting};
pub use error::OperationError;
pub use operations::{Operations, NO_MAPPING_FOUND};
pub use snapshot::SessionSnapshot;
pub use status::{LogStatusSink, RecordingStatusSink, StatusEvent, StatusSink};
