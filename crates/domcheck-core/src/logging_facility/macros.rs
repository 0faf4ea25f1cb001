//! Canonical logging macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use domcheck_core::log_op_start;
/// log_op_start!("diff");
/// log_op_start!("diff", actual_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use domcheck_core::log_op_end;
/// log_op_end!("diff", duration_ms = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into a [`DcError`](crate::errors::DcError) so the
/// event carries the stable kind and code.
///
/// # Example
///
/// ```
/// # use domcheck_core::{log_op_error, errors::DomError};
/// let err = DomError::SelectorYieldedNoResults { selector: ".x".to_string() };
/// log_op_error!("query_all", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::DcError;
        let dc_err: DcError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?dc_err.kind(),
            err.code = dc_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::DcError;
        let dc_err: DcError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::domcheck_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?dc_err.kind(),
            err.code = dc_err.code(),
            $($field)*
        );
    }};
}
