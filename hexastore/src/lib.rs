/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod config;
pub mod error;
pub mod frozen_store;
pub mod hexa_store;
pub mod loader;
pub mod parser;
pub mod pattern_matcher;
pub mod star_query;
pub mod storage_trait;

pub use config::StoreConfig;
pub use error::{LoadError, Result};
pub use frozen_store::FrozenStore;
pub use hexa_store::HexaStore;
pub use storage_trait::RdfStorage;
