//! Format dispatch macro for command output

/// Dispatch on output format when the JSON branch returns `Result` and the
/// other branches return `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&data) },
///     human => { println!("done"); },
///     records => { println!("H ferry=1 records=1 mode=done"); }
/// )
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            ::ferry_core::format::OutputFormat::Json => $json,
            ::ferry_core::format::OutputFormat::Human => {
                $human;
                Ok(())
            }
            ::ferry_core::format::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;
