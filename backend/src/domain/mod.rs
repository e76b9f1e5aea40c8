//! Domain primitives, ports, and services.
//!
//! Purpose: define the Pokémon record, the transport-agnostic error envelope,
//! and the service that applies update rules on top of the storage port.
//!
//! Public surface:
//! - `Pokemon`, `PokemonId`, `PokemonPatch` — the record and its partial update.
//! - `Error`, `ErrorCode` — error payload shared by all adapters.
//! - `TraceId` — request correlation identifier.
//! - `PokemonService` — implementation of the driving ports.

pub mod error;
pub mod pokemon;
mod pokemon_service;
pub mod ports;
mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::pokemon::{Pokemon, PokemonId, PokemonPatch};
pub use self::pokemon_service::PokemonService;
pub use self::trace_id::TraceId;
