use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, otherwise logs the error and panics with its
    /// [`Display`](std::fmt::Display) message. Reserved for faults that are unrecoverable by
    /// contract, such as a list outgrowing its maximum capacity.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => {
                tracing::error!(%error, "unrecoverable list fault");
                panic!("{error}")
            }
        }
    }
}
