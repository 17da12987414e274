//! Error handling and exit codes.

use fibseq_core::{exit_codes, SeqError};

/// Map a sequence error to the process exit code.
pub fn handle_error(err: &SeqError) -> i32 {
    match err {
        SeqError::InvalidInput { .. } | SeqError::TieBreakRequired(_) => exit_codes::ERROR_INPUT,
        SeqError::Overflow { .. } => exit_codes::ERROR_OVERFLOW,
        SeqError::OutOfRange { .. }
        | SeqError::IndexOutOfRange { .. }
        | SeqError::RangeBounds { .. } => exit_codes::ERROR_RANGE,
        SeqError::ValueNotFound(_) => exit_codes::ERROR_NOT_FOUND,
        SeqError::NoSequence | SeqError::NoAnchor => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SeqError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibseq_core::Direction;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&SeqError::Overflow { index: 91 }), 3);
        assert_eq!(handle_error(&SeqError::ValueNotFound(4)), 5);
        assert_eq!(handle_error(&SeqError::TieBreakRequired(1)), 2);
        assert_eq!(
            handle_error(&SeqError::RangeBounds {
                direction: Direction::Right,
                requested: 7,
                available: 6,
            }),
            4
        );
        assert_eq!(handle_error(&SeqError::OutOfRange { ordinal: 0, max: 3 }), 4);
        assert_eq!(
            handle_error(&SeqError::IndexOutOfRange { index: 3, len: 3 }),
            4
        );
    }

    #[test]
    fn anyhow_wrapping() {
        let err = anyhow::Error::new(SeqError::Overflow { index: 91 });
        assert_eq!(exit_code(&err), 3);

        let err = anyhow::Error::new(SeqError::NoSequence).context("while anchoring");
        assert_eq!(exit_code(&err), 1);

        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), 1);
    }
}
