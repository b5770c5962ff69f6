use colored::*;

pub enum Kind {
    Info,
    Success,
    Warn,
    Fatal,
}

/// A tagged, coloured message on stderr.
/// Program output goes to stdout, so the two never mix.
pub struct Status(pub Kind, pub &'static str);

impl Status {
    pub fn info() -> Status {
        Status(Kind::Info, "Info")
    }
    pub fn success() -> Status {
        Status(Kind::Success, "Finished")
    }
    pub fn warn() -> Status {
        Status(Kind::Warn, "Warning")
    }
    pub fn fatal() -> Status {
        Status(Kind::Fatal, "Fatal")
    }

    fn tag(&self) -> ColoredString {
        match self.0 {
            Kind::Info => self.1.blue(),
            Kind::Success => self.1.green(),
            Kind::Warn => self.1.yellow(),
            Kind::Fatal => self.1.red(),
        }
        .bold()
    }

    /// Syntax errors and traces span several lines;
    /// those go below the tag, indented.
    fn multiline(&self, lines: Vec<&str>) {
        eprintln!("{:>12}", self.tag());
        for line in lines {
            eprintln!("{:>12} {}", "", line);
        }
    }

    pub fn log(&self, message: &str) {
        let lines = message.lines().collect::<Vec<&str>>();

        if lines.len() > 1 {
            self.multiline(lines);
        } else {
            eprintln!("{:>12} {}", self.tag(), message);
        }
    }
}
