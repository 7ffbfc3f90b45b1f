//! Core conversion logic for the currency convertor.
//!
//! This crate contains pure logic with ZERO network or storage dependencies.
//! Exchange rates come from a caller-supplied [`currency::ExchangeRateTable`].
//!
//! # Modules
//!
//! - `currency` - Decimal-precise conversion between ISO 4217 currencies

pub mod currency;
