// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! whatshot is a command-line tool for quickly answering questions about
//! a subreddit's hot listing in the terminal. It can report how many
//! accounts subscribe to a subreddit, list the titles of its hot posts,
//! and count how often a set of keywords appears in those titles.
//!
//! Listings are walked page by page, following the API's continuation
//! cursor until it runs out. If any page cannot be retrieved, the whole
//! operation yields nothing rather than a partial answer.
//!
//! # Examples
//!
//! (In all examples, replace `rust` with the name of an actual
//! subreddit, without the `/r/` prefix.)
//!
//! Show how many accounts subscribe to a subreddit:
//!
//! ```bash
//! whatshot subscribers rust
//! ```
//!
//! Print the titles of the first ten hot posts:
//!
//! ```bash
//! whatshot top rust
//! ```
//!
//! Print the titles of every hot post:
//!
//! ```bash
//! whatshot titles rust
//! ```
//!
//! Count keyword occurrences across the titles of every hot post,
//! printed as `keyword: count` lines, most frequent first:
//!
//! ```bash
//! whatshot count rust async tokio macro
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! whatshot --help
//! ```
//!
//! # License
//!
//! whatshot is licensed under the terms of the [Apache License 2.0].
//! Please see the LICENSE file accompanying this source code or visit
//! the previous link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod count;
pub mod http;
pub mod reddit;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
