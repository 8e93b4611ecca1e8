//! Low-level FFI bindings for the attocube attoDRY interface library.
//!
//! This crate declares the C-callable surface of `attoDRYLib`, the
//! LabVIEW-built shared library that drives attoDRY cryostat controllers
//! (attoDRY800/1100/2100). Every entry point takes fixed-width scalars,
//! out-pointers, or null-terminated byte strings, and returns an `int`
//! status code where `0` means success.
//!
//! # Safety
//!
//! All functions are `unsafe` as they are direct FFI bindings. The library
//! additionally expects a strict call order (`begin` before `Connect`,
//! `Disconnect` before `end`) which nothing at this level enforces. For a
//! safe, state-checked wrapper use the `attodry` crate instead.
//!
//! # Features
//!
//! - `attodry-sdk`: generate bindings from the vendor header (requires
//!   `ATTODRY_SDK_DIR`) and link the interface library.
//!   Without this feature, the [`stub`] module provides functional
//!   stand-ins with identical signatures, backed by a scriptable
//!   process-global state. The stubs exist so the safe wrapper can be
//!   contract-tested on machines without the vendor SDK.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(clippy::all)]

#[cfg(feature = "attodry-sdk")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "attodry-sdk"))]
pub mod stub;
#[cfg(not(feature = "attodry-sdk"))]
pub use stub::*;
