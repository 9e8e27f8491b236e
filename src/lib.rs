// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod currency;
pub mod filter;
pub mod fixtures;
pub mod fx;
pub mod ledger;
pub mod models;
pub mod portfolio;
pub mod session;
pub mod utils;
