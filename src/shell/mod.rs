//! External command execution.

pub mod command;
pub mod interrupt;
pub mod mock;

pub use command::{CommandResult, CommandRunner, CommandSpec, RunOutcome, SystemRunner};
pub use interrupt::{ExitOnInterrupt, InterruptGuard};
pub use mock::MockRunner;
