use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Stdout, StdinLock, Write};

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // 去掉行尾的 \n 或 \r\n
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut console = IoConsole::new(Cursor::new("Ada\r\nLovelace\n \nlast"), Vec::new());

        assert_eq!(console.read_line().unwrap().as_deref(), Some("Ada"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Lovelace"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some(" "));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_write() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write("Enter choice: ").unwrap();
        console.write_line("ok").unwrap();

        assert_eq!(console.into_writer(), b"Enter choice: ok\n");
    }
}
