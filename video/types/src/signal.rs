/*!
    Host control signals.
*/

use std::fmt;

/**
    Signals raised by the host while a render call is in progress.

    Sinks report these through their abort query; the deinterlacer checks
    for them while waiting on output buffers and abandons the call when one
    is present.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbortSignal {
    /**
        The host is shutting down the output.

        No further frames will be accepted.
    */
    Terminate,
    /**
        The output hit an unrecoverable error.

        Frames handed over after this point would never be shown.
    */
    Error,
}

impl fmt::Display for AbortSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminate => f.write_str("terminate"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_equality() {
        assert_eq!(AbortSignal::Terminate, AbortSignal::Terminate);
        assert_ne!(AbortSignal::Terminate, AbortSignal::Error);
    }

    #[test]
    fn signal_display() {
        assert_eq!(AbortSignal::Terminate.to_string(), "terminate");
        assert_eq!(AbortSignal::Error.to_string(), "error");
    }
}
