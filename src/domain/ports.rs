use crate::utils::error::Result;

/// 選單與使用者之間的 I/O 介面
pub trait Console {
    /// Reads one line without its trailing newline. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}
