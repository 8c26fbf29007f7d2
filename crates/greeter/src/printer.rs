//! Greeting output

use std::io::{self, StdoutLock, Write};

/// Greeting line for `name`
pub fn greeting_line(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Age line for `age`
pub fn age_line(age: i64) -> String {
    format!("Age: {}", age)
}

/// Writes the program's output lines
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<StdoutLock<'static>> {
    /// Printer bound to locked stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `Hello, {name}!`
    pub fn print_name(&mut self, name: &str) -> io::Result<()> {
        self.line(&greeting_line(name))
    }

    /// Write `Age: {age}`
    pub fn print_age(&mut self, age: i64) -> io::Result<()> {
        self.line(&age_line(age))
    }

    /// Write pre-rendered text as is, e.g. version or help output
    pub fn print_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        assert_eq!(greeting_line("Alice"), "Hello, Alice!");
        assert_eq!(age_line(42), "Age: 42");
        assert_eq!(age_line(-1), "Age: -1");
    }

    #[test]
    fn test_printer_output_order() {
        let mut printer = Printer::new(Vec::new());
        printer.print_name("Bob").unwrap();
        printer.print_age(42).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "Hello, Bob!\nAge: 42\n");
    }

    #[test]
    fn test_print_text_verbatim() {
        let mut printer = Printer::new(Vec::new());
        printer.print_text("greeter 1.0.0\n").unwrap();
        printer.print_text("no newline").unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "greeter 1.0.0\nno newline");
    }

    #[test]
    fn test_name_is_not_altered() {
        let mut printer = Printer::new(Vec::new());
        printer.print_name("  Zoë {x} ").unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "Hello,   Zoë {x} !\n");
    }
}
