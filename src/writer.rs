use crate::error::Result;
use crate::request::PaymentResult;
use std::io::Write;

pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_results<I>(&mut self, results: I) -> Result<()>
    where
        I: IntoIterator<Item = PaymentResult>,
    {
        for result in results {
            self.writer.serialize(result)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
