// Transition tracing. Compiles to nothing unless the `trace` feature is on.

#[cfg(feature = "trace")]
macro_rules! trace_transition {
    ($from:expr, $to:expr, $op:literal) => {
        tracing::trace!(from = %$from, to = %$to, op = $op, "either state transition")
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_transition {
    ($from:expr, $to:expr, $op:literal) => {{
        let _ = (&$from, &$to);
    }};
}

pub(crate) use trace_transition;
