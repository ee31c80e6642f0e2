use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print `prompt` and read one trimmed, lowercased answer.
///
/// None means stdin hit EOF; callers treat that as "wrap up the session".
pub(crate) fn read_answer(prompt: &str) -> io::Result<Option<String>> {
    println!("\n{prompt}");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

/// Re-prompt until the answer parses into `T`. Invalid input is not an
/// error, just another round of the loop.
pub(crate) fn prompt_parsed<T>(prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    loop {
        let Some(answer) = read_answer(prompt)? else {
            return Ok(None);
        };

        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("Oops: {err}. Try again."),
        }
    }
}

/// Exactly "yes" (trimmed, any case) is yes; everything else, including EOF,
/// is no.
pub(crate) fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    Ok(matches!(read_answer(prompt)?, Some(answer) if answer == "yes"))
}
