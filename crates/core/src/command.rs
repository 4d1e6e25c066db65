// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::result::CommandResult;

/// A scheduling operation with all of its inputs bound at construction.
///
/// Commands perform no transport-level parsing: they receive validated
/// domain values. Execution consumes the command, so each one runs at
/// most once. Calls into the store are blocking.
pub trait Command {
    /// The infrastructure error the underlying store can raise.
    type Error;

    /// Runs the command against its store.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the store fails for reasons other than
    /// the documented absent/conflict outcomes. Those outcomes are reported
    /// through a failed [`CommandResult`] instead.
    fn execute(self) -> Result<CommandResult, Self::Error>;
}
