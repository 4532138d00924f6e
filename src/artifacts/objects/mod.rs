//! Git object types (blob, tree, commit)
//!
//! Every object is stored as `<type> <size>\0<content>`, addressed by the
//! SHA-1 of that byte sequence.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

pub const OBJECT_ID_LENGTH: usize = 40;
