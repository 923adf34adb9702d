use chula_base::BaseError;
use chula_lunisolar::CalendarError;
use chula_pak::PakError;

/// Errors surfaced by a `chula` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Pak(#[from] PakError),
}
