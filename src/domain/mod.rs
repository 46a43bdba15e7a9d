//! Domain Layer
//!
//! This is the core of Structuresmith - the reconciliation model without I/O
//! dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (DesiredFile, Manifest)
//! - `value_objects/` - Immutable value types (ContentHash, FileMode, destinations)
//! - `services/` - Domain services (Reconciler, OrphanPruner, value merge, rendering)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - File and network access goes through ports
//! 2. **Pure Functions** - Diffing and merging are stateless and testable
//! 3. **Ports & Adapters** - Infrastructure implements the port traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
