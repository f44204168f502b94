use super::LineWriter;

/// Duplicates each log line to all of its outputs.
///
/// A line is offered to every output, even if an earlier output fails;
/// the first error is then returned.
#[derive(Default)]
pub struct MultiSink {
    writers: Vec<Box<dyn LineWriter>>,
}

impl MultiSink {
    /// Creates a sink without outputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an output.
    #[must_use]
    pub fn with<W: LineWriter + 'static>(mut self, writer: W) -> Self {
        self.add(Box::new(writer));
        self
    }

    /// Adds a boxed output.
    pub fn add(&mut self, writer: Box<dyn LineWriter>) {
        self.writers.push(writer);
    }

    /// Number of outputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// True if the sink has no outputs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    fn for_each(
        &self,
        f: impl Fn(&dyn LineWriter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        let mut result = Ok(());
        for writer in &self.writers {
            if let Err(e) = f(&**writer) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

impl LineWriter for MultiSink {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        self.for_each(|w| w.write_line(line))
    }

    fn flush(&self) -> std::io::Result<()> {
        self.for_each(|w| w.flush())
    }
}

impl std::fmt::Debug for MultiSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSink")
            .field("outputs", &self.writers.len())
            .finish()
    }
}
