use crate::error::{ContactError, Result};

pub const NAME_AND_PHONE: &str = "Give me both name and phone number.";
pub const NAME_AND_PHONES: &str = "Give me the name, the old phone number and the new one.";
pub const NAME_AND_BIRTHDAY: &str = "Give me both name and birthday (DD.MM.YYYY).";
pub const NAME_ONLY: &str = "Give me the contact name.";

/// Checks that exactly `N` argument tokens were given.
///
/// Too few is a [`ContactError::MissingArgument`] carrying `usage`; too many is
/// [`ContactError::TooManyArguments`].
pub fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> Result<&'a [String; N]> {
    if args.len() < N {
        return Err(ContactError::MissingArgument(usage));
    }
    <&[String; N]>::try_from(args).map_err(|_| ContactError::TooManyArguments)
}

/// Commands without arguments ignore stray tokens; they are only noted in the debug log.
pub fn expect_no_args(command: &str, args: &[String]) {
    if !args.is_empty() {
        tracing::debug!(command, ?args, "ignoring extra arguments");
    }
}


#[cfg(test)]
mod tests {
    use super::tests_support::args;
    use super::*;

    #[test]
    fn exact_count_is_returned_as_array() {
        let given = args(&["Alice", "1234567890"]);
        let [name, phone] = expect_args::<2>(&given, NAME_AND_PHONE).unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(phone, "1234567890");
    }

    #[test]
    fn too_few_reports_usage() {
        let given = args(&["Alice"]);
        let err = expect_args::<2>(&given, NAME_AND_PHONE).unwrap_err();
        assert!(matches!(err, ContactError::MissingArgument(NAME_AND_PHONE)));
        assert_eq!(err.to_string(), "Give me both name and phone number.");
    }

    #[test]
    fn too_many_is_rejected() {
        let given = args(&["Alice", "1234567890", "extra"]);
        let err = expect_args::<2>(&given, NAME_AND_PHONE).unwrap_err();
        assert!(matches!(err, ContactError::TooManyArguments));
    }
}
