use std::io::{self, BufRead, Write};

/// Line-oriented prompts over arbitrary input and output handles.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write text without a trailing newline.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `prompt` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a whole number in `range` is entered. `None` at end of
    /// input.
    pub fn prompt_number(
        &mut self,
        prompt: &str,
        range: std::ops::RangeInclusive<u64>,
    ) -> io::Result<Option<u64>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u64>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                Ok(n) => self.println(&format!(
                    "{n} is an invalid entry. Choose a number between {} and {}.",
                    range.start(),
                    range.end()
                ))?,
                Err(_) => self.println(&format!("'{answer}' is not a number."))?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
