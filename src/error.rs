//! Fatal errors. Every variant ends the run with exit code 1.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to connect to X server: {0}")]
    Connect(#[from] x11rb::errors::ConnectError),

    #[error("X Input extension not available")]
    NoInputExtension,

    #[error("X connection failed: {0}")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("X request failed: {0}")]
    Reply(#[from] x11rb::errors::ReplyError),

    #[error("No calibratable devices found")]
    NoDevices,

    #[error("Device \"{0}\" not found; use --list to list the calibratable input devices")]
    DeviceNotFound(String),
}
