use paw_derive::paw_error;
use std::borrow::Cow;

#[paw_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    raw.parse::<u32>().context("Parsing breed id")
}

#[test]
fn paw_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/paw_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn inner() -> Result<u32, SampleError> {
        Ok("nope".parse::<u32>()?)
    }

    let err = inner().unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse error: "));
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = parse("abc").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing breed id): "), "got: {err}");
}

#[test]
fn context_overrides_existing_error_context() {
    let res: Result<(), SampleError> = Err("boom".into());
    let err = res.context("while booting").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while booting): boom");
}

#[test]
fn internal_variant_accepts_strings() {
    let err = SampleError::from(format!("code {}", 7));
    assert_eq!(err.to_string(), "Internal error: code 7");
}
