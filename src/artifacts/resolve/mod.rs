//! Blob identifier resolution
//!
//! Turns the textual tokens accepted on the command line (and on stdin in
//! batch mode) into fully-specified blob references.

pub mod blob_ref;

pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};

/// Minimum prefix length accepted for abbreviated OIDs
pub const MIN_OID_PREFIX: usize = 4;
