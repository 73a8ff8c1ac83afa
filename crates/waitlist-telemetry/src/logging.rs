//! Structured logging helpers.
//!
//! Every line carries a `component` field so log aggregation can split the
//! gateway, runtime and core apart.

/// Log an event tagged with its component.
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an enrollment-related event with the submitted email.
#[macro_export]
macro_rules! log_enrollment_event {
    ($level:ident, $component:expr, $msg:expr, $email:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            email = %$email,
            $($($field)*,)?
            $msg
        )
    };
}
