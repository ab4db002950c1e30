#[macro_export]
macro_rules! expect_error {
    ($parse:ty: {$($syntax:tt)*} => $err:expr) => {{
        use reftuple_compiler::CompileError;

        let syntax = stringify!($($syntax)*);
        let error = match syn::parse_str::<$parse>(syntax) {
            Ok(parsed) => panic!("expected an error, but parsed {:?}", parsed),
            Err(error) => error,
        };
        let expected: CompileError = $err;
        assert_eq!(error.to_string(), expected.to_string(), "unexpected error");
    }};
}
