//! Persistence for the tracker application.
//!
//! This crate keeps the card collection on disk and gives the UI access to
//! export and import files.
//!
//! # Overview
//!
//! - [`blob`]: The [`BlobStore`] trait with file and in-memory implementations
//! - [`repository`]: [`CardRepository`], which loads, dispatches, and saves
//! - [`files`]: Export writing and async import reading
//! - [`error`]: Error types for storage operations

pub mod blob;
pub mod error;
pub mod files;
pub mod repository;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::{Result, StoreError};
pub use files::{DirectoryFileSave, FileSave, read_import_file};
pub use repository::{CardRepository, STORAGE_KEY};
