use clap::Parser;

/// A frameless always-on-top clock. Click it to close.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "desk_clock", version, about)]
pub struct Args {
    /// Background color of the clock, e.g. `red` or `#336699`.
    #[arg(long, value_name = "VALUE")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn color_is_optional() {
        let args = Args::try_parse_from(["desk_clock"]).unwrap();
        assert_eq!(args.color, None);
    }

    #[test]
    fn color_is_forwarded_verbatim() {
        let args = Args::try_parse_from(["desk_clock", "--color", "rgb(1, 2, 3)"]).unwrap();
        assert_eq!(args.color.as_deref(), Some("rgb(1, 2, 3)"));

        let args = Args::try_parse_from(["desk_clock", "--color=red"]).unwrap();
        assert_eq!(args.color.as_deref(), Some("red"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = Args::try_parse_from(["desk_clock", "--colour", "red"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn color_needs_a_value() {
        let err = Args::try_parse_from(["desk_clock", "--color"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
