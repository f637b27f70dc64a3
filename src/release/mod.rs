//! The updater's release descriptor (`latest.json`) and the values that go into it
//!
//! - **descriptor**: typed descriptor, the double-encoded notes payload and
//!   an order-preserving document for in-place edits
//! - **pub_date**: publication timestamps floored to a 30-minute boundary
//! - **signature**: detached installer signature lookup

pub mod descriptor;
pub mod pub_date;
pub mod signature;

pub use descriptor::{ChangeLogNotes, DescriptorDocument, NoticeDescriptor, Platform, ReleaseDescriptor};
pub use pub_date::current_pub_date;
pub use signature::probe_signature;
